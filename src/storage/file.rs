use std::fs;
use std::io::{ErrorKind, Write};
use std::path::Path;

use bincode::Options;
use log::{info, warn};
use tempfile::NamedTempFile;

use super::StorageError;
use crate::models::Inventory;

/// Result of reading the snapshot file.
#[derive(Debug, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(Inventory),
    /// No snapshot exists yet. Callers treat this as a fresh, empty start.
    Missing,
}

impl LoadOutcome {
    /// Collapse into an inventory, mapping a missing file to an empty one.
    pub fn into_inventory(self) -> Inventory {
        match self {
            LoadOutcome::Loaded(inventory) => inventory,
            LoadOutcome::Missing => Inventory::new(),
        }
    }
}

/// Encoding shared by `load` and `save`. Anything after the encoded list makes
/// the snapshot invalid.
fn codec() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .reject_trailing_bytes()
}

/// Read and decode the whole snapshot in one call.
///
/// An absent file yields [`LoadOutcome::Missing`]. A file that exists but does
/// not decode (including an empty file) is [`StorageError::Corrupt`], never an
/// empty inventory, so a damaged snapshot is not silently replaced.
pub fn load(path: &Path) -> Result<LoadOutcome, StorageError> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => {
            info!("no inventory file at {}", path.display());
            return Ok(LoadOutcome::Missing);
        }
        Err(source) => {
            return Err(StorageError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let inventory: Inventory =
        codec().deserialize(&bytes).map_err(|source| StorageError::Corrupt {
            path: path.to_path_buf(),
            source,
        })?;

    info!("loaded {} CDs from {}", inventory.len(), path.display());
    Ok(LoadOutcome::Loaded(inventory))
}

/// Replace the snapshot with the full inventory.
///
/// The blob is written to a temporary file next to the target and renamed over
/// it once flushed, so an interrupted save leaves the previous snapshot intact.
pub fn save(path: &Path, inventory: &Inventory) -> Result<(), StorageError> {
    let bytes = codec().serialize(inventory).map_err(StorageError::Encode)?;
    let write_err = |source| StorageError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir).map_err(write_err)?;

    let mut staged = NamedTempFile::new_in(dir).map_err(write_err)?;
    staged.write_all(&bytes).map_err(write_err)?;
    staged.as_file().sync_all().map_err(write_err)?;
    staged.persist(path).map_err(|err| {
        warn!("could not move staged snapshot into place: {}", err.error);
        write_err(err.error)
    })?;

    info!("saved {} CDs to {}", inventory.len(), path.display());
    Ok(())
}
