use thiserror::Error;

/// Errors surfaced by encoding, validation and row decoding. All of them are
/// terminal for the call that produced them: there is no retry and no partial
/// statement.
#[derive(Debug, Error)]
pub enum Error {
    /// The encoder was handed a value shape it cannot walk.
    #[error("expected a struct value, found {found}")]
    InvalidInputShape { found: &'static str },
    /// A field tagged `identifier` does not hold an [`Identifier`]. This is a
    /// programming error in the options type, not bad user input.
    ///
    /// [`Identifier`]: crate::Identifier
    #[error("field `{field}` is tagged `identifier` but its value is not an identifier")]
    IdentifierCast { field: &'static str },
    /// An operation-specific invariant failed. The message names the
    /// invariant and the fields involved.
    #[error("validation failed: {0}")]
    Validation(String),
    #[error("identifier must be between 1 and 255 characters")]
    InvalidIdentifier,
    #[error("column `{0}` does not exist in the row provided")]
    MissingColumn(String),
    #[error("cannot decode column `{column}`: {message}")]
    Decode { column: String, message: String },
}

impl Error {
    pub fn validation(message: impl Into<String>) -> Self {
        Error::Validation(message.into())
    }

    pub fn decode(column: impl Into<String>, message: impl ToString) -> Self {
        Error::Decode {
            column: column.into(),
            message: message.to_string(),
        }
    }
}
