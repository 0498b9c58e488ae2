//! Error taxonomy for configuration storage and lookup

use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced by the repository and facade.
///
/// An absent backing store is not represented here: first-run absence is an
/// expected condition and recovers to the default document inside `load`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Document text was malformed or schema-invalid
    #[error("failed to parse configuration document: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    /// Document could not be encoded
    #[error("failed to serialize configuration: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    /// File system failure reading or writing the backing store
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Name-based theme selection missed the catalog
    #[error("no built-in theme named \"{0}\"")]
    UnknownTheme(String),

    /// Another writer updated the backing store mid-sequence
    #[error("configuration changed concurrently: expected last_updated {expected}, found {found}")]
    Conflict { expected: i64, found: i64 },
}
