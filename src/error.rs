//! Error types for the visitor form

use thiserror::Error;

use crate::form::FieldErrors;

/// Why a submit attempt did not start
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a submission is already in progress")]
    InProgress,
    #[error("{} field(s) failed validation", .0.len())]
    Invalid(FieldErrors),
}

/// Startup configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown form variant `{0}` (expected `standard` or `material`)")]
    UnknownVariant(String),
    #[error("invalid value `{value}` for {key}: {source}")]
    InvalidDuration {
        key: &'static str,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}
