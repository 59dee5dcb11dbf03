//! Core library surface for the CD inventory manager.
//!
//! The binary only parses configuration and wires stdin/stdout into [`App`];
//! every piece of behavior lives in the modules below so it can be exercised
//! with scripted input in tests.
pub mod app;
pub mod config;
pub mod models;
pub mod storage;
pub mod store;
pub mod ui;

pub use app::App;
pub use config::{Cli, Config};
pub use models::{CdRecord, Inventory};
pub use storage::{load, save, LoadOutcome, StorageError};
pub use ui::Console;
