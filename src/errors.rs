use std::path::PathBuf;
use thiserror::Error;

/// Main error type for loading team-generator content
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A content file could not be read
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// A content file is not valid RON for the expected shape
    #[error("Failed to parse {what}: {source}")]
    Parse {
        what: String,
        #[source]
        source: ron::error::SpannedError,
    },
    /// The catalog parsed but breaks one of the content rules
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] ValidationError),
}

/// Content rules a staff-set catalog must satisfy
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The catalog has no sets at all
    #[error("catalog contains no sets")]
    EmptyCatalog,
    /// A value-or-list field was given an empty list
    #[error("set '{set}' has an empty list of alternatives for {field}")]
    EmptyAlternatives { set: String, field: String },
    /// A move name or signature move is blank
    #[error("set '{set}' has a blank move in {field}")]
    BlankMove { set: String, field: String },
    /// Level outside 1..=100
    #[error("set '{set}' has invalid level {level}")]
    InvalidLevel { set: String, level: u8 },
    /// A single EV above the per-stat maximum
    #[error("set '{set}' has {value} EVs in {stat}, above the maximum of {max}")]
    EvOutOfRange {
        set: String,
        stat: String,
        value: u8,
        max: u8,
    },
    /// A single IV above the per-stat maximum
    #[error("set '{set}' has IV {value} in {stat}, above the maximum of {max}")]
    IvOutOfRange {
        set: String,
        stat: String,
        value: u8,
        max: u8,
    },
    /// A type exception names a set the catalog does not contain
    #[error("type exception refers to unknown set '{0}'")]
    UnknownExceptionSet(String),
    /// A type exception lists no types
    #[error("type exception for '{0}' lists no types")]
    EmptyExceptionTypes(String),
}

/// Type alias for Results using CatalogError
pub type CatalogResult<T> = Result<T, CatalogError>;
