use thiserror::Error;

/// Custom error type for FTC
#[derive(Error, Debug)]
pub enum FtcError {
    #[error("{source_name} unavailable: {reason}")]
    SourceUnavailable { source_name: String, reason: String },

    #[error("Malformed {what}: {detail}")]
    MalformedInput { what: String, detail: String },

    #[error("No result from {0}")]
    EmptyResult(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for FTC
pub type Result<T> = std::result::Result<T, FtcError>;

impl FtcError {
    /// Create a source unavailable error
    pub fn source_unavailable<S: Into<String>, R: ToString>(source_name: S, reason: R) -> Self {
        FtcError::SourceUnavailable {
            source_name: source_name.into(),
            reason: reason.to_string(),
        }
    }

    /// Create a malformed input error
    pub fn malformed<S: Into<String>, D: Into<String>>(what: S, detail: D) -> Self {
        FtcError::MalformedInput {
            what: what.into(),
            detail: detail.into(),
        }
    }

    /// Create an empty result error
    pub fn empty<S: Into<String>>(source_name: S) -> Self {
        FtcError::EmptyResult(source_name.into())
    }

    /// Create a config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        FtcError::Config(msg.into())
    }

    pub fn is_malformed(&self) -> bool {
        matches!(self, FtcError::MalformedInput { .. })
    }
}
