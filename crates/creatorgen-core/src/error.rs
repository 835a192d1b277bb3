/// Error type for project-file generation.
///
/// Nothing here is recovered from: every variant aborts the run and is
/// reported by the binary through `anyhow`.
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    /// The directory walk could not read an entry (usually access denied).
    #[error("failed to walk {}: {source}", path.display())]
    Walk {
        path: PathBuf,
        #[source]
        source: jwalk::Error,
    },

    /// Stat of a discovered entry failed.
    #[error("failed to read metadata for {}: {source}", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Creating, writing or flushing one of the artifacts failed.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, GenerateError>;
