use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures surfaced by the snapshot file. A missing file is not one of them;
/// see [`LoadOutcome::Missing`](super::LoadOutcome::Missing).
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("failed to read inventory file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("inventory file {path} is corrupt or not an inventory snapshot")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: bincode::Error,
    },
    #[error("failed to encode inventory")]
    Encode(#[source] bincode::Error),
    #[error("failed to write inventory file {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}
