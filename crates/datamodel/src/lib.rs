#![cfg_attr(test, allow(unused_crate_dependencies))]

pub mod datamodel;
pub mod error;
pub mod input;

pub use datamodel::*;
pub use error::DataModelError;

pub type Result<T> = std::result::Result<T, error::DataModelError>;
