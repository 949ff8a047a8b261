//! Error types for dictionary loading.
use std::path::PathBuf;

use smol_str::SmolStr;

/// Errors that can occur while loading base or user dictionaries.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum DictionaryError {
    /// The dictionary could not be opened or read
    #[error("Failed to read dictionary {origin}")]
    Io {
        origin: SmolStr,
        #[source]
        source: std::io::Error,
    },

    /// A line carried fewer than two fields
    #[error("Malformed entry at {origin}:{line_no}: {line:?}")]
    MalformedLine {
        origin: SmolStr,
        line_no: usize,
        line: String,
    },

    /// The frequency field is not a number
    #[error("Invalid frequency at {origin}:{line_no}: {value:?}")]
    InvalidFrequency {
        origin: SmolStr,
        line_no: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    /// A frequency is negative, infinite or NaN
    #[error("Frequency out of range at {origin}:{line_no}: {value}")]
    FrequencyOutOfRange {
        origin: SmolStr,
        line_no: usize,
        value: f64,
    },

    /// The base dictionary has no positive frequency total to normalise against
    #[error("Base dictionary {0} has no entries with a positive frequency")]
    EmptyBase(SmolStr),

    /// A configured user dictionary directory does not exist
    #[error("User dictionary directory {0} does not exist")]
    MissingDirectory(PathBuf),

    /// The user dictionary directory pattern could not be built
    #[error("Failed to scan user dictionary directory {path}")]
    Glob {
        path: PathBuf,
        #[source]
        source: globwalk::GlobError,
    },

    /// Walking the user dictionary directory failed
    #[error("Failed to walk user dictionary directory {path}")]
    Walk {
        path: PathBuf,
        #[source]
        source: globwalk::WalkError,
    },
}
