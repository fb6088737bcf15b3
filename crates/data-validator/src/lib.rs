//! Form Input Validation
//!
//! Enforces the numeric ranges the form widgets allow before a request is
//! encoded. The encoder itself never rejects a value.

mod error;
mod validator;

pub use error::ValidationError;
pub use validator::{ValidationConfig, ValidationResult, Validator};
