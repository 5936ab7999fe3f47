//! Error types for simdbench operations.
//!
//! Every failure in a benchmark run is fatal for that backend, so these
//! errors only need to carry enough context to produce a useful diagnostic
//! before the process exits.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Errors that can occur while generating inputs or writing results.
#[derive(Debug)]
pub enum BenchError {
    /// Memory allocation failed.
    AllocationError {
        /// The size that was requested to be allocated.
        requested_size: usize,
        /// The alignment that was requested.
        requested_alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Invalid layout parameters were provided.
    LayoutError {
        /// The number of elements that caused the error.
        size: usize,
        /// The alignment parameter that caused the error.
        alignment: usize,
        /// Human-readable error message.
        message: String,
    },
    /// Input validation error.
    ValidationError {
        /// Human-readable error message.
        message: String,
    },
    /// The results file could not be created or truncated.
    OutputFile {
        /// Path of the file that was being opened.
        path: PathBuf,
        /// Underlying I/O failure.
        source: io::Error,
    },
    /// Writing or flushing results failed.
    Io(io::Error),
}

impl fmt::Display for BenchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BenchError::AllocationError {
                requested_size,
                requested_alignment,
                message,
            } => write!(
                f,
                "Memory allocation failed: {} (requested {} bytes with {} byte alignment)",
                message, requested_size, requested_alignment
            ),
            BenchError::LayoutError {
                size,
                alignment,
                message,
            } => write!(
                f,
                "Invalid memory layout: {} (size: {}, alignment: {})",
                message, size, alignment
            ),
            BenchError::ValidationError { message } => {
                write!(f, "Validation error: {}", message)
            }
            BenchError::OutputFile { path, source } => {
                write!(
                    f,
                    "Nie udalo sie otworzyc pliku {}: {}",
                    path.display(),
                    source
                )
            }
            BenchError::Io(err) => write!(f, "Failed to write results: {}", err),
        }
    }
}

impl std::error::Error for BenchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BenchError::OutputFile { source, .. } => Some(source),
            BenchError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for BenchError {
    fn from(err: io::Error) -> Self {
        BenchError::Io(err)
    }
}

/// Result type alias for simdbench operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Creates an allocation error.
pub fn allocation_error(size: usize, alignment: usize, message: impl Into<String>) -> BenchError {
    BenchError::AllocationError {
        requested_size: size,
        requested_alignment: alignment,
        message: message.into(),
    }
}

/// Creates a layout error.
pub fn layout_error(size: usize, alignment: usize, message: impl Into<String>) -> BenchError {
    BenchError::LayoutError {
        size,
        alignment,
        message: message.into(),
    }
}

/// Creates a validation error.
pub fn validation_error(message: impl Into<String>) -> BenchError {
    BenchError::ValidationError {
        message: message.into(),
    }
}
