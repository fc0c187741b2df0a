//! Error handling for the hybrid orchestration layer

use std::fmt;

use api::error::Error as CoreError;

/// Error type for hybrid operations
#[derive(Debug)]
pub enum Error {
    /// An error raised by the underlying primitives
    Api(CoreError),
    /// Key text is not base64, hex, or raw bytes of a supported length
    InvalidKeyText(&'static str),
    /// A wrapped-key artifact failed to decode
    InvalidArtifact(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Api(e) => write!(f, "Hybrid primitive error: {}", e),
            Error::InvalidKeyText(reason) => write!(f, "Invalid key text: {}", reason),
            Error::InvalidArtifact(reason) => write!(f, "Invalid wrapped-key artifact: {}", reason),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Api(e) => Some(e),
            _ => None,
        }
    }
}

impl From<CoreError> for Error {
    fn from(err: CoreError) -> Self {
        Error::Api(err)
    }
}

/// Result type for hybrid operations
pub type Result<T> = std::result::Result<T, Error>;
