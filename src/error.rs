//! Errors for the fallible edges of the crate: catalog loading and file cleaning.
//!
//! Name cleaning itself never fails; a name with nothing to strip comes back
//! unchanged.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CleanError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid term catalog: {0}")]
    Catalog(#[from] serde_json::Error),

    #[error("term catalog already initialized")]
    AlreadyInitialized,
}

pub type Result<T> = std::result::Result<T, CleanError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_path() {
        let err = CleanError::Read {
            path: PathBuf::from("names.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
        };
        assert_eq!(err.to_string(), "failed to read names.txt: gone");
    }
}
