//! Tagged validation results returned to the orchestrator.
//!
//! Rule checks are written as `Result<(), DomainError>` so they compose with
//! `?`; this type is the serialisable form handed across the boundary.

use serde::Serialize;

use crate::errors::domain::DomainError;
use crate::errors::error_code::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationIssue {
    pub code: ErrorCode,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<ValidationIssue>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn rejected(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            is_valid: false,
            errors: vec![ValidationIssue {
                code,
                message: message.into(),
            }],
            warnings: Vec::new(),
        }
    }

    pub fn with_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// First error code, if any.
    pub fn error(&self) -> Option<ErrorCode> {
        self.errors.first().map(|e| e.code)
    }

    /// First error message, if any.
    pub fn message(&self) -> Option<&str> {
        self.errors.first().map(|e| e.message.as_str())
    }

    /// Logical AND of validity; errors and warnings are concatenated.
    pub fn and(mut self, other: ValidationResult) -> Self {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
        self
    }
}

impl From<&DomainError> for ValidationResult {
    fn from(err: &DomainError) -> Self {
        Self::rejected(err.code(), err.detail())
    }
}

impl From<Result<(), DomainError>> for ValidationResult {
    fn from(res: Result<(), DomainError>) -> Self {
        match res {
            Ok(()) => Self::ok(),
            Err(e) => Self::from(&e),
        }
    }
}

impl FromIterator<ValidationResult> for ValidationResult {
    fn from_iter<I: IntoIterator<Item = ValidationResult>>(iter: I) -> Self {
        iter.into_iter().fold(Self::ok(), Self::and)
    }
}
