use std::path::PathBuf;

use anyhow::{anyhow, Result};
use directories::BaseDirs;

/// Hidden folder in the home directory that holds the CD collection.
const COLLECTION_DIR: &str = ".cd-inventory";
/// Name of the binary snapshot written by the `s` command.
const SNAPSHOT_FILE: &str = "CDInventory.dat";

/// Where the collection is kept when no `--file` is given.
pub fn default_data_file() -> Result<PathBuf> {
    let home = BaseDirs::new()
        .map(|dirs| dirs.home_dir().to_path_buf())
        .ok_or_else(|| anyhow!("no home directory to keep the CD inventory in; pass --file"))?;
    Ok(home.join(COLLECTION_DIR).join(SNAPSHOT_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_path_ends_with_data_file() {
        // Sandboxed CI runners may not expose a home directory.
        if let Ok(path) = default_data_file() {
            assert!(path.ends_with(".cd-inventory/CDInventory.dat"));
        }
    }
}
