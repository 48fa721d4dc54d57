//! Custom error types for TIFF processing
//!
//! Only conditions that stop a parse outright are errors. Everything the
//! parser can recover from is reported as a diagnostic instead.

use std::fmt;
use std::io;

/// TIFF-specific error types
#[derive(Debug)]
pub enum TiffError {
    /// I/O error
    IoError(io::Error),
    /// Input ended while reading a structural field
    PrematureEOF {
        /// Offset at which the short read started
        offset: u64,
    },
    /// Malformed tag/type tables or configuration file
    ConfigError(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for TiffError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TiffError::IoError(e) => write!(f, "I/O error: {}", e),
            TiffError::PrematureEOF { offset } => {
                write!(f, "Premature end of file at offset {}", offset)
            }
            TiffError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            TiffError::GenericError(msg) => write!(f, "TIFF error: {}", msg),
        }
    }
}

impl std::error::Error for TiffError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TiffError::IoError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for TiffError {
    fn from(error: io::Error) -> Self {
        TiffError::IoError(error)
    }
}

/// Result type for TIFF operations
pub type TiffResult<T> = Result<T, TiffError>;

impl From<String> for TiffError {
    fn from(msg: String) -> Self {
        TiffError::GenericError(msg)
    }
}
