use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlugError {
    #[error("File not found: {}", path.display())]
    MissingFile { path: PathBuf },

    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to build pattern for category '{label}': {source}")]
    Pattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("{0}")]
    Usage(String),
}

impl SlugError {
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingFile { .. } => 1,
            Self::Usage(_) => 2,
            Self::Read { .. } | Self::Write { .. } | Self::Pattern { .. } => 3,
        }
    }
}
