//! Binary entry point: resolve configuration, set up logging, load the
//! inventory and run the menu until the user exits.
use cd_inventory::{App, Cli, Console};
use clap::Parser;

/// Fatal startup problems (unreadable or corrupt inventory file, no home
/// directory) bubble up here and end the process with a non-zero status.
fn main() -> anyhow::Result<()> {
    let config = Cli::parse().into_config()?;

    env_logger::Builder::new()
        .filter_level(config.log_level)
        .target(env_logger::Target::Stderr)
        .init();

    let console = Console::stdio(config.color);
    let mut app = App::start(config.data_file, console)?;
    app.run()
}
