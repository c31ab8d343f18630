//! Error types for protogen passes and the driver

use thiserror::Error;

/// Result type alias for generation operations
pub type GeneratorResult<T> = Result<T, GeneratorError>;

/// Error type for generation operations
///
/// Passes themselves are expected to degrade silently on odd schema input;
/// these errors cover driver misuse, bad configuration, and unreadable input.
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Driver is not in a valid state for the requested operation
    #[error("invalid lifecycle state: expected {expected}, got {actual}")]
    InvalidState { expected: String, actual: String },

    /// A pass failed to initialize
    #[error("initialization failed: {0}")]
    InitializationFailed(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    ConfigError(String),

    /// Descriptor input could not be read or is structurally invalid
    #[error("descriptor error: {0}")]
    DescriptorError(String),

    /// No pass is registered under the requested name
    #[error("unknown pass: {0}")]
    UnknownPass(String),

    /// A pass with the same name is already registered
    #[error("duplicate pass: {0}")]
    DuplicatePass(String),

    /// A pass returned an error while generating a file
    #[error("generation failed: {0}")]
    GenerationFailed(String),

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

impl GeneratorError {
    /// Returns a stable numeric code for this error kind
    pub fn error_code(&self) -> u32 {
        match self {
            GeneratorError::InvalidState { .. } => 1,
            GeneratorError::InitializationFailed(_) => 2,
            GeneratorError::ConfigError(_) => 3,
            GeneratorError::DescriptorError(_) => 4,
            GeneratorError::UnknownPass(_) => 5,
            GeneratorError::DuplicatePass(_) => 6,
            GeneratorError::GenerationFailed(_) => 7,
            GeneratorError::Internal(_) => 8,
        }
    }
}

impl From<serde_json::Error> for GeneratorError {
    fn from(err: serde_json::Error) -> Self {
        GeneratorError::DescriptorError(err.to_string())
    }
}
