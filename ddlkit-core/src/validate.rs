use crate::{Identifier, Result};

/// Operation-specific invariants, checked by the calling operation before it
/// encodes anything. The encoder itself never validates.
pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Whether an optional value counts as "set" for the combinators below.
/// Unset `Option`s, empty strings and empty-named identifiers do not count.
pub trait ValueSet {
    fn is_set(&self) -> bool;
}

impl ValueSet for Identifier {
    fn is_set(&self) -> bool {
        !self.name().is_empty()
    }
}

impl ValueSet for str {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl ValueSet for String {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: ValueSet> ValueSet for Option<T> {
    fn is_set(&self) -> bool {
        self.as_ref().is_some_and(ValueSet::is_set)
    }
}

impl<T> ValueSet for Vec<T> {
    fn is_set(&self) -> bool {
        !self.is_empty()
    }
}

impl<T: ValueSet + ?Sized> ValueSet for &T {
    fn is_set(&self) -> bool {
        (**self).is_set()
    }
}

macro_rules! always_set {
    ($($ty:ty),+) => {$(
        impl ValueSet for $ty {
            fn is_set(&self) -> bool {
                true
            }
        }
    )+};
}
always_set!(bool, i8, i16, i32, i64, u8, u16, u32, u64);

pub fn value_set(value: &dyn ValueSet) -> bool {
    value.is_set()
}

pub fn any_value_set(values: &[&dyn ValueSet]) -> bool {
    values.iter().any(|v| v.is_set())
}

pub fn exactly_one_value_set(values: &[&dyn ValueSet]) -> bool {
    values.iter().filter(|v| v.is_set()).count() == 1
}

pub fn every_value_set(values: &[&dyn ValueSet]) -> bool {
    values.iter().all(|v| v.is_set())
}

pub fn every_value_nil(values: &[&dyn ValueSet]) -> bool {
    !any_value_set(values)
}

/// An identifier is usable in a statement only with a non-empty name of at
/// most 255 characters.
pub fn valid_object_identifier(id: &Identifier) -> bool {
    (1..=255).contains(&id.name().len())
}

pub fn validate_int_in_range(value: i64, min: i64, max: i64) -> bool {
    (min..=max).contains(&value)
}

pub fn validate_int_greater_than_or_equal(value: i64, min: i64) -> bool {
    value >= min
}
