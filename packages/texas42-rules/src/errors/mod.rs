//! Error handling for the Texas 42 rules engine.

pub mod domain;
pub mod error_code;

pub use domain::{DomainError, StructuralKind, ValidationKind};
pub use error_code::ErrorCode;
