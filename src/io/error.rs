//! Error types for generation and level asset operations

use std::fmt;
use std::path::{Path, PathBuf};

use crate::spatial::PieceId;

/// Main error type for all algorithm operations
#[derive(Debug)]
pub enum AlgorithmError {
    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A loaded level asset does not describe a valid board
    InvalidSourceData {
        /// Description of what's wrong with the level data
        reason: String,
    },

    /// The finished board failed its final solvability check
    ///
    /// Every commit is gated by the same simulation, so this indicates the
    /// grid and the accepted list fell out of sync. The board must not be
    /// offered for play.
    UnsolvableBoard {
        /// Number of accepted snakes
        pieces: usize,
        /// Snakes that could never escape
        remaining: Vec<PieceId>,
    },

    /// Failed to write a PNG preview
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// Level asset could not be encoded or decoded
    Serialization {
        /// Path of the level asset
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for AlgorithmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::InvalidSourceData { reason } => {
                write!(f, "Invalid level data: {reason}")
            }
            Self::UnsolvableBoard { pieces, remaining } => {
                write!(
                    f,
                    "Generated board with {pieces} snakes failed final verification ({} stuck: {remaining:?})",
                    remaining.len()
                )
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(
                    f,
                    "Failed to encode or decode level '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for AlgorithmError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for algorithm results
pub type Result<T> = std::result::Result<T, AlgorithmError>;

/// Attaches the path and operation to file system failures
pub trait WithPath<T> {
    /// Convert an I/O failure into a `FileSystem` error naming `path`
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path and operation applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|source| AlgorithmError::FileSystem {
            path: path.to_path_buf(),
            operation,
            source,
        })
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> AlgorithmError {
    AlgorithmError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an invalid level data error
pub fn invalid_source_data(reason: &impl ToString) -> AlgorithmError {
    AlgorithmError::InvalidSourceData {
        reason: reason.to_string(),
    }
}
