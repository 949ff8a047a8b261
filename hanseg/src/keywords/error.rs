use smol_str::SmolStr;

#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum KeywordError {
    #[error("Failed to read {origin}")]
    Io {
        origin: SmolStr,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed IDF entry at {origin}:{line_no}: {line:?}")]
    MalformedLine {
        origin: SmolStr,
        line_no: usize,
        line: String,
    },

    #[error("Invalid IDF value at {origin}:{line_no}: {value:?}")]
    InvalidIdf {
        origin: SmolStr,
        line_no: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}
