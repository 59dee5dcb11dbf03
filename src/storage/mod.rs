//! Persistence of the inventory as a single binary snapshot.

mod error;
mod file;
mod paths;

pub use error::StorageError;
pub use file::{load, save, LoadOutcome};
pub use paths::default_data_file;
