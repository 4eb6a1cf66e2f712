use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StepError {
    #[error("Target file does not exist: {path:?}")]
    MissingTarget { path: PathBuf },

    #[error("Failed to read file {path:?}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to delete file {path:?}: {source}")]
    Delete {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Expected original content not found in {path:?}; check that it is an unmodified template file")]
    ContentMismatch { path: PathBuf },

    #[error("Edit for {path:?} has an empty search block")]
    EmptyPattern { path: PathBuf },
}
