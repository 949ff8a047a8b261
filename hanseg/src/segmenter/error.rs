//! Error types for building a segmenter.
use std::path::PathBuf;

use crate::dict::error::DictionaryError;
use crate::hmm::error::ModelError;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SegmenterError {
    /// The base or a user dictionary failed to load
    #[error(transparent)]
    Dictionary(#[from] DictionaryError),

    /// The HMM emission model failed to load
    #[error(transparent)]
    Model(#[from] ModelError),

    /// The configuration file could not be read
    #[error("Failed to read configuration {path}")]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid JSON for [`SegmenterConfig`](super::SegmenterConfig)
    #[error("Invalid configuration {path}")]
    ConfigFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
