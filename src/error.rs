//! Error types for decoding and validating field models.

use thiserror::Error;

/// Errors surfaced by the field library. Rendering itself never fails.
#[derive(Error, Debug)]
pub enum FieldError {
    /// The payload is not JSON or does not match either field schema.
    #[error("failed to decode field model: {0}")]
    Decode(#[source] serde_json::Error),

    #[error("failed to encode field model: {0}")]
    Encode(#[source] serde_json::Error),

    /// Raised only by the strict validator.
    #[error("{name} = {value} is out of range")]
    RatioOutOfRange { name: &'static str, value: f64 },

    #[error("no default field named '{0}'")]
    UnknownDefault(String),
}
