//! Command-line and environment configuration.

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use log::LevelFilter;

use crate::storage::default_data_file;

#[derive(Parser, Debug)]
#[clap(
    name = "cd-inventory",
    version,
    about = "Keep track of a personal CD collection from the terminal"
)]
pub struct Cli {
    #[clap(
        long,
        short,
        env = "CD_INVENTORY_FILE",
        help = "Inventory file to load and save (defaults to ~/.cd-inventory/CDInventory.dat)"
    )]
    pub file: Option<PathBuf>,

    #[clap(long, short, default_value = "warn")]
    pub log_level: String,

    #[clap(long, help = "Print status messages without colors")]
    pub no_color: bool,
}

/// Settings resolved from [`Cli`].
#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,
    pub log_level: LevelFilter,
    pub color: bool,
}

impl Cli {
    pub fn into_config(self) -> Result<Config> {
        let data_file = match self.file {
            Some(path) => path,
            None => default_data_file()?,
        };
        Ok(Config {
            data_file,
            log_level: self.log_level.parse().unwrap_or(LevelFilter::Warn),
            color: !self.no_color && io::stdout().is_terminal(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_file_and_level_are_used() {
        let cli = Cli::try_parse_from([
            "cd-inventory",
            "--file",
            "/tmp/cds.dat",
            "--log-level",
            "debug",
            "--no-color",
        ])
        .unwrap();
        let config = cli.into_config().unwrap();

        assert_eq!(config.data_file, PathBuf::from("/tmp/cds.dat"));
        assert_eq!(config.log_level, LevelFilter::Debug);
        assert!(!config.color);
    }

    #[test]
    fn unknown_log_level_falls_back_to_warn() {
        let cli = Cli::try_parse_from(["cd-inventory", "-f", "cds.dat", "-l", "loud"]).unwrap();
        assert_eq!(cli.into_config().unwrap().log_level, LevelFilter::Warn);
    }
}
