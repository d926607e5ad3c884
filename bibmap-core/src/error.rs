use std::io;
use std::path::PathBuf;

/// Why the places dataset could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The request never produced a response.
    #[error("failed to fetch {locator}: {source}")]
    Transport {
        locator: String,
        #[source]
        source: reqwest::Error,
    },
    /// The server answered with a non-success status.
    #[error("failed to load places from {locator}: HTTP {status}")]
    Status { locator: String, status: u16 },
    /// The local file could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The document is not valid JSON.
    #[error("places document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    /// The loader stopped before it produced a result.
    #[error("places loader stopped: {0}")]
    Interrupted(String),
}

impl LoadError {
    /// HTTP status reported by the server, if the failure came from one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }
}
