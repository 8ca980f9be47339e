use crate::{Error, Result};
use std::collections::HashMap;
use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// One tabular result row: column name to textual value. Produced by the
/// transport collaborator executing the generated statement.
#[derive(Clone, Debug, Default)]
pub struct Row {
    columns: HashMap<String, String>,
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<String>) {
        self.columns.insert(column.into(), value.into());
    }

    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Row {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Row {
            columns: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Binds a flat row into a typed struct, field by field, by column name.
/// Implemented by `#[derive(FromRow)]`.
pub trait FromRow: Sized {
    fn from_row(row: &Row) -> Result<Self>;
}

pub fn decode_rows<T: FromRow>(rows: &[Row]) -> Result<Vec<T>> {
    rows.iter().map(T::from_row).collect()
}

/// Decodes one column's text. A missing column is an error for required
/// fields and `None` for `Option` fields.
pub trait ColumnDecode: Sized {
    fn decode_column(column: &str, value: Option<&str>) -> Result<Self> {
        match value {
            Some(text) => Self::decode_text(column, text),
            None => Err(Error::MissingColumn(column.into())),
        }
    }

    fn decode_text(column: &str, text: &str) -> Result<Self>;
}

impl ColumnDecode for String {
    fn decode_text(_column: &str, text: &str) -> Result<Self> {
        Ok(text.into())
    }
}

impl ColumnDecode for bool {
    fn decode_text(column: &str, text: &str) -> Result<Self> {
        if text.eq_ignore_ascii_case("true") {
            Ok(true)
        } else if text.eq_ignore_ascii_case("false") {
            Ok(false)
        } else {
            Err(Error::decode(
                column,
                format!("`{}` is not a boolean", text),
            ))
        }
    }
}

macro_rules! decode_integer {
    ($($ty:ty),+) => {$(
        impl ColumnDecode for $ty {
            fn decode_text(column: &str, text: &str) -> Result<Self> {
                text.parse().map_err(|e| Error::decode(column, e))
            }
        }
    )+};
}
decode_integer!(i32, i64, u32, u64);

impl ColumnDecode for OffsetDateTime {
    fn decode_text(column: &str, text: &str) -> Result<Self> {
        OffsetDateTime::parse(text, &Rfc3339).map_err(|e| Error::decode(column, e))
    }
}

impl<T: ColumnDecode> ColumnDecode for Option<T> {
    fn decode_column(column: &str, value: Option<&str>) -> Result<Self> {
        value
            .map(|text| T::decode_text(column, text))
            .transpose()
    }

    fn decode_text(column: &str, text: &str) -> Result<Self> {
        Ok(Some(T::decode_text(column, text)?))
    }
}
