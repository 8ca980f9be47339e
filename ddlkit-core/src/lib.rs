mod builder;
mod clause;
mod decode;
mod error;
mod field;
mod identifier;
mod modifier;
mod util;
mod validate;

pub use builder::*;
pub use clause::*;
pub use decode::*;
pub use error::*;
pub use field::*;
pub use identifier::*;
pub use modifier::*;
pub use util::*;
pub use validate::*;

pub type Result<T> = std::result::Result<T, Error>;
