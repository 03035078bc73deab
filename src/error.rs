//! Error types for the job board.
//!
//! ERROR HANDLING
//! ==============
//! `DataLoadFailure` is the only runtime error. It is caught at the load
//! boundary, logged, and replaced by a static message in the UI.
//! `ConfigError` only exists while reading start-up configuration and always
//! falls back to defaults.

/// The job data source could not be read.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DataLoadFailure {
    /// The request never produced a response.
    #[error("jobs request failed: {0}")]
    Transport(String),

    /// The data source answered with a non-success HTTP status.
    #[error("jobs request failed with status {status}")]
    Status { status: u16 },

    /// The response body was not a list of job records.
    #[error("jobs response malformed: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for DataLoadFailure {
    fn from(e: serde_json::Error) -> Self {
        Self::Malformed(e.to_string())
    }
}

/// Widget configuration could not be used.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The embedded config JSON could not be parsed.
    #[error("config parse failed: {0}")]
    Parse(String),

    /// A config value parsed but is unusable.
    #[error("invalid config: {0}")]
    Invalid(&'static str),
}
