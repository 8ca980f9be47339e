pub use ddlkit_core::*;
pub use ddlkit_macros::{FromRow, SqlStruct};
