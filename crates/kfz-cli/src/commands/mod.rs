//! Command implementations.

pub mod extract;
pub mod fields;

pub use self::extract::execute_extract;
pub use self::fields::execute_fields;
