//! Error types for maze generation and GIF encoding
//!
//! Every failure is either configuration validation (checked once, before
//! the engine runs) or a sink write failure (propagated immediately, never
//! retried). The engine and encoder operate on data they produce
//! themselves, so there is no corrupt-input recovery path.

use std::fmt;
use std::path::PathBuf;

/// Main error type for all generation and encoding operations
#[derive(Debug)]
pub enum MazeError {
    /// A grid or canvas dimension is unusable
    InvalidDimension {
        /// Name of the offending dimension
        dimension: &'static str,
        /// Provided value
        value: usize,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A pixel index fell outside the fixed color table
    ///
    /// The renderer constructs indices from a fixed palette, so this is an
    /// internal invariant failure rather than a recoverable condition.
    PaletteOverflow {
        /// The out-of-range palette index
        index: u8,
        /// Number of entries the color table holds
        palette_size: usize,
    },

    /// The output byte sink rejected a write
    ///
    /// Aborts the run: sub-blocks already written cannot be un-written.
    OutputWrite {
        /// Underlying I/O error
        source: std::io::Error,
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

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension {
                dimension,
                value,
                reason,
            } => {
                write!(f, "Invalid {dimension} = {value}: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::PaletteOverflow {
                index,
                palette_size,
            } => {
                write!(
                    f,
                    "Palette index {index} exceeds the {palette_size}-entry color table"
                )
            }
            Self::OutputWrite { source } => {
                write!(f, "Failed to write output stream: {source}")
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

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::OutputWrite { source } | Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::OutputWrite { source: err }
    }
}

/// Convenience type alias for generation results
pub type Result<T> = std::result::Result<T, MazeError>;

/// Create an invalid dimension error
pub fn invalid_dimension(
    dimension: &'static str,
    value: usize,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidDimension {
        dimension,
        value,
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
