use thiserror::Error;

/// Errors raised by the input layer while turning raw string fields into typed values.
///
/// The transformation pipeline itself ([`crate::time`], [`crate::ref_system`]) is a total
/// function over its numeric domain and never returns one of these: all rejection of
/// malformed input happens before the pipeline is invoked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TerraframeError {
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    #[error("Invalid value for {field}: {value}")]
    InvalidField { field: &'static str, value: String },

    #[error("Expected {expected} arguments (year month day hour minute second x y z), got {got}")]
    WrongArgumentCount { expected: usize, got: usize },
}
