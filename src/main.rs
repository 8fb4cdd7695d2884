use anyhow::Context;
use clap::Parser;
use grisaia_space::config::{Config, ConfigStore};
use grisaia_space::logging::init_tracing;
use grisaia_space::ui::resources::catalog_listing;
use grisaia_space::ui::runtime;
use std::path::PathBuf;

/// Page through the Grisaia character cards.
#[derive(Debug, Parser)]
#[command(name = "grisaia-space", version)]
struct Cli {
    /// Config file path (default: <config dir>/grisaia-space/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print the character catalog and exit
    #[arg(long)]
    list: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let path = cli.config.unwrap_or_else(Config::config_path);
    let store = ConfigStore::open(path).context("Failed to load configuration")?;
    init_tracing(&store.get().logging).context("Failed to open log file")?;

    if cli.list {
        println!("{}", catalog_listing());
        return Ok(());
    }

    tracing::info!(config = %store.path().display(), "starting");
    runtime::run(store).context("Terminal UI failed")?;
    Ok(())
}
