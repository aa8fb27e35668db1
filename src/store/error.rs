use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("storage location not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("malformed record in {}: {details}", path.display())]
    Malformed { path: PathBuf, details: String },

    #[error("I/O operation failed on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl Error {
    pub fn malformed(path: impl Into<PathBuf>, details: impl Into<String>) -> Self {
        Self::Malformed {
            path: path.into(),
            details: details.into(),
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::NotFound { path }
        } else {
            Self::Io { path, source }
        }
    }
}
