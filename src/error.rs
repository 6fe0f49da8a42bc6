//! Crate-level error types.

use std::fmt;

/// Errors produced by the vantage crate.
#[derive(Debug)]
pub enum VantageError {
    /// A zero quaternion was supplied where a rotation is required.
    ZeroQuaternion,
    /// A flat matrix source had the wrong element count.
    MatrixShape {
        /// Number of elements actually supplied.
        len: usize,
    },
    /// Basis construction collapsed (parallel or zero axes).
    DegenerateBasis,
    /// A sightline direction collapsed to zero length.
    DegenerateDirection,
    /// A 2D shape constructor received invalid geometry.
    InvalidShape(String),
    /// A keyframed model had empty or ragged frame data.
    MalformedModel(String),
    /// A scene operation referenced a node id not in the graph.
    UnknownNode(u64),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuaternion => {
                write!(f, "zero quaternion cannot represent a rotation")
            }
            Self::MatrixShape { len } => {
                write!(f, "matrix source must have 16 elements, got {len}")
            }
            Self::DegenerateBasis => {
                write!(f, "basis axes are parallel or zero")
            }
            Self::DegenerateDirection => {
                write!(f, "sightline direction has zero length")
            }
            Self::InvalidShape(msg) => {
                write!(f, "invalid shape: {msg}")
            }
            Self::MalformedModel(msg) => {
                write!(f, "malformed model: {msg}")
            }
            Self::UnknownNode(id) => {
                write!(f, "unknown scene node id {id}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
