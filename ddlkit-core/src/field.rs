use crate::{EqualsModifier, Identifier, ParenModifier, QuoteModifier, ReverseModifier};
use std::borrow::Cow;

/// How a tagged field turns into SQL text. A field with no kind at all is
/// simply left out of the table produced by the derive and contributes
/// nothing to the statement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    /// Renders the field's name unconditionally, ignoring the runtime value.
    Static,
    /// Renders the name when the value is `true`, nothing when `false`, or
    /// the value itself as the keyword text for non-boolean values.
    Keyword,
    /// Renders the name followed by the identifier value.
    Identifier,
    /// Renders `NAME = value` (modifier-configurable).
    Parameter,
    /// Renders the name followed by a comma-joined list.
    List,
}

/// Per-field rendering description, built once at compile time by
/// `#[derive(SqlStruct)]` from the `#[ddl(...)]` attribute.
#[derive(Clone, Copy, Debug)]
pub struct FieldSpec {
    pub kind: FieldKind,
    /// SQL-visible name or keyword, possibly multi-word (`TO SHARE`).
    pub name: &'static str,
    pub quotes: QuoteModifier,
    pub parentheses: ParenModifier,
    pub equals: EqualsModifier,
    pub reverse: ReverseModifier,
}

/// One entry of the registration table: the Rust field name (used only in
/// error messages), its spec and its runtime value.
pub struct AnnotatedField<'a> {
    pub field: &'static str,
    pub spec: FieldSpec,
    pub value: FieldValue<'a>,
}

/// Runtime value of a tagged field, as seen by the encoder.
pub enum FieldValue<'a> {
    /// An unset `Option`. The field contributes no clause and no error.
    Absent,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Text(Cow<'a, str>),
    Identifier(&'a Identifier),
    Struct(&'a dyn SqlStruct),
    List(Vec<FieldValue<'a>>),
}

impl FieldValue<'_> {
    /// Plain textual form of a scalar value, no quoting applied.
    pub(crate) fn write_text(&self, out: &mut String) {
        match self {
            FieldValue::Bool(v) => out.push_str(["false", "true"][*v as usize]),
            FieldValue::Int(v) => {
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(*v));
            }
            FieldValue::UInt(v) => {
                let mut buffer = itoa::Buffer::new();
                out.push_str(buffer.format(*v));
            }
            FieldValue::Text(v) => out.push_str(v),
            FieldValue::Identifier(v) => v.write_name(out),
            FieldValue::Absent | FieldValue::Struct(..) | FieldValue::List(..) => {}
        }
    }

    pub(crate) fn shape(&self) -> &'static str {
        match self {
            FieldValue::Absent => "absent",
            FieldValue::Bool(..) => "bool",
            FieldValue::Int(..) | FieldValue::UInt(..) => "integer",
            FieldValue::Text(..) => "text",
            FieldValue::Identifier(..) => "identifier",
            FieldValue::Struct(..) => "struct",
            FieldValue::List(..) => "list",
        }
    }
}

/// An options value whose fields carry `#[ddl(...)]` annotations. Implemented
/// by `#[derive(SqlStruct)]`; the encoder walks the returned table in field
/// declaration order.
pub trait SqlStruct {
    fn fields(&self) -> Vec<AnnotatedField<'_>>;
}

/// Conversion seam between native field types and [`FieldValue`]. The derive
/// emits a `Struct(self)` impl for every annotated type, so options structs
/// nest without further ceremony.
pub trait AsFieldValue {
    fn as_field_value(&self) -> FieldValue<'_>;
}

impl AsFieldValue for bool {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

macro_rules! as_field_value_int {
    ($variant:ident: $($ty:ty),+) => {$(
        impl AsFieldValue for $ty {
            fn as_field_value(&self) -> FieldValue<'_> {
                FieldValue::$variant((*self).into())
            }
        }
    )+};
}
as_field_value_int!(Int: i8, i16, i32, i64);
as_field_value_int!(UInt: u8, u16, u32, u64);

impl AsFieldValue for str {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl AsFieldValue for String {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Text(Cow::Borrowed(self))
    }
}

impl AsFieldValue for Identifier {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::Identifier(self)
    }
}

impl<T: AsFieldValue> AsFieldValue for Option<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Some(v) => v.as_field_value(),
            None => FieldValue::Absent,
        }
    }
}

impl<T: AsFieldValue> AsFieldValue for Vec<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        FieldValue::List(self.iter().map(AsFieldValue::as_field_value).collect())
    }
}

impl<T: AsFieldValue + ?Sized> AsFieldValue for Box<T> {
    fn as_field_value(&self) -> FieldValue<'_> {
        (**self).as_field_value()
    }
}
