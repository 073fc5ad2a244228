mod error;

pub mod contact;
pub mod enrollment;
pub mod validate;

pub use error::*;
