//! Error types for all pipeline operations

use crate::terrain::labels::SectionType;
use std::fmt;
use std::path::PathBuf;

/// Main error type for the conversion pipeline
#[derive(Debug)]
pub enum Error {
    /// Failed to load the source image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// A user-supplied parameter failed validation
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Linear index outside `[0, width * height)`
    IndexOutOfRange {
        /// The offending index
        index: usize,
        /// Number of cells in the grid
        len: usize,
    },

    /// Coordinates outside `[0, width) x [0, height)`
    CoordinatesOutOfRange {
        /// The offending x coordinate
        x: usize,
        /// The offending y coordinate
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },

    /// Cell contents do not match the declared grid shape
    GridShape {
        /// Declared width
        width: usize,
        /// Declared height
        height: usize,
        /// Actual number of cells provided
        len: usize,
    },

    /// Classification config could not be read or parsed
    Config {
        /// Path to the config file
        path: PathBuf,
        /// Description of the failure
        reason: String,
    },

    /// General filesystem operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Archive container could not be opened or read
    Archive {
        /// Path to the container
        path: PathBuf,
        /// Underlying archive error
        source: zip::result::ZipError,
    },

    /// Section asset data is malformed
    SectionFormat {
        /// Name of the asset being decoded
        name: String,
        /// Description of the failure
        reason: String,
    },

    /// The exact store has no candidate for a required pattern
    ///
    /// The library loaded fine but is topologically incomplete for this map.
    NoSectionsOfType {
        /// The unsatisfiable pattern
        section_type: SectionType,
    },

    /// The fuzzy store has no registered sections at all
    EmptyLibrary,

    /// Chosen sections disagree on tile dimensions
    SectionSizeMismatch {
        /// Name of the offending section
        name: String,
        /// Dimensions of the first section encountered
        expected: (usize, usize),
        /// Dimensions of the offending section
        actual: (usize, usize),
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::IndexOutOfRange { index, len } => {
                write!(f, "Index {index} is out of range (grid has {len} cells)")
            }
            Self::CoordinatesOutOfRange {
                x,
                y,
                width,
                height,
            } => {
                write!(
                    f,
                    "Coordinates ({x}, {y}) are out of range for a {width}x{height} grid"
                )
            }
            Self::GridShape { width, height, len } => {
                write!(
                    f,
                    "Grid of {width}x{height} cells cannot be built from {len} values"
                )
            }
            Self::Config { path, reason } => {
                write!(f, "Failed to read config '{}': {reason}", path.display())
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
            Self::Archive { path, source } => {
                write!(
                    f,
                    "Failed to read archive '{}': {source}",
                    path.display()
                )
            }
            Self::SectionFormat { name, reason } => {
                write!(f, "Malformed section asset '{name}': {reason}")
            }
            Self::NoSectionsOfType { section_type } => {
                write!(
                    f,
                    "Library has no section registered for pattern {section_type}"
                )
            }
            Self::EmptyLibrary => {
                write!(f, "Library contains no registered sections")
            }
            Self::SectionSizeMismatch {
                name,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "Section '{name}' is {}x{} tiles but the map expects {}x{}",
                    actual.0, actual.1, expected.0, expected.1
                )
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            Self::Archive { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for pipeline results
pub type Result<T> = std::result::Result<T, Error>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> Error {
    Error::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
