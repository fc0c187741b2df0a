//! Error handling for the fileseal ecosystem
//!
//! A single error type is shared by every crate in the workspace so that
//! callers can tell validation failures (wrong key length, malformed key
//! text) apart from format/cryptographic failures (bad padding, corrupted
//! ciphertext) without string matching.

use std::fmt;

pub mod validate;

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The supplied key is malformed or has an unsupported length
    InvalidKey {
        /// Context where the key was rejected
        context: &'static str,
        /// Detail about why the key was rejected
        message: String,
    },

    /// A buffer has the wrong length for the requested operation
    InvalidLength {
        /// Context where the length error occurred
        context: &'static str,
        /// Expected length in bytes
        expected: usize,
        /// Actual length in bytes
        actual: usize,
    },

    /// A parameter is outside its valid domain
    InvalidParameter {
        /// Name of the invalid parameter
        context: &'static str,
        /// Reason why the parameter is invalid
        message: String,
    },

    /// PKCS#7 padding is absent, out of range, or inconsistent.
    ///
    /// On decrypt this signals either a wrong key or a corrupted
    /// ciphertext; the plaintext is never returned truncated.
    InvalidPadding {
        /// Context where the padding was rejected
        context: &'static str,
    },

    /// Ciphertext is structurally invalid (e.g. not a whole number of blocks)
    InvalidCiphertext {
        /// Context where the ciphertext was rejected
        context: &'static str,
        /// Detail about the structural problem
        message: String,
    },

    /// A number-theoretic operation has no result (e.g. no modular inverse)
    Arithmetic {
        /// Operation that failed
        context: &'static str,
    },

    /// Fallback for errors that fit no other variant
    Other {
        /// Context where the error occurred
        context: &'static str,
        /// Detailed error message
        message: String,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Shorthand to create an [`Error::InvalidKey`]
    pub fn key(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidKey {
            context,
            message: message.into(),
        }
    }

    /// Shorthand to create an [`Error::InvalidParameter`]
    pub fn param(context: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidParameter {
            context,
            message: message.into(),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidKey { context, message } => {
                write!(f, "Invalid key for {}: {}", context, message)
            }
            Error::InvalidLength {
                context,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Invalid length for {}: expected {}, got {}",
                    context, expected, actual
                )
            }
            Error::InvalidParameter { context, message } => {
                write!(f, "Invalid parameter '{}': {}", context, message)
            }
            Error::InvalidPadding { context } => {
                write!(f, "Invalid padding in {}", context)
            }
            Error::InvalidCiphertext { context, message } => {
                write!(f, "Invalid ciphertext in {}: {}", context, message)
            }
            Error::Arithmetic { context } => {
                write!(f, "Arithmetic failure in {}", context)
            }
            Error::Other { context, message } => {
                write!(f, "Error in {}: {}", context, message)
            }
        }
    }
}

impl std::error::Error for Error {}
