//! Error types for HMM model loading.

use smol_str::SmolStr;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ModelError {
    /// The model could not be opened or read
    #[error("Failed to read HMM model {origin}")]
    Io {
        origin: SmolStr,
        #[source]
        source: std::io::Error,
    },

    /// An emission line appeared before any state line
    #[error("Emission without a state at {origin}:{line_no}")]
    EmissionWithoutState { origin: SmolStr, line_no: usize },

    /// A state line names something other than B, M, E or S
    #[error("Unknown state {symbol:?} at {origin}:{line_no}")]
    UnknownState {
        origin: SmolStr,
        line_no: usize,
        symbol: String,
    },

    /// The log-probability field is not a number
    #[error("Invalid probability at {origin}:{line_no}: {value:?}")]
    InvalidProbability {
        origin: SmolStr,
        line_no: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
