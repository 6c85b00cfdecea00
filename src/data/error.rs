//! Error types for data file lookups

use std::path::PathBuf;

use thiserror::Error;

use super::Category;

/// Data loading error type
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("missing support for opening files of type: {0}")]
    UnsupportedFormat(String),

    #[error("unknown data category: {0}")]
    UnknownCategory(String),

    #[error("category '{category}' not found in data file")]
    CategoryNotFound { category: Category },

    #[error("no {category} record with id {id}")]
    RecordNotFound { category: Category, id: u64 },

    #[error("{category} record {id} has an unexpected shape: {source}")]
    Decode {
        category: Category,
        id: u64,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// True for both flavours of "not found": a missing category table or a missing id.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::CategoryNotFound { .. } | Error::RecordNotFound { .. }
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
