//! Daytona Server - configuration bootstrap and workspace log maintenance

use anyhow::Result;
use clap::Parser;
use daytona_core::{ConfigStore, ServerConfig};
use daytona_logs::LogTree;
use tracing::{debug, error};

mod cli;
mod commands;
mod logging;
mod output;

use cli::{Cli, Commands};
use output::print_error_json;

fn main() -> Result<()> {
    let cli = Cli::parse();

    output::set_json_mode(cli.json);
    logging::init(cli.verbose);

    let (store, config) = bootstrap(&cli);

    let result = match cli.command {
        Commands::Init => commands::init::execute(&store, &config, cli.verbose),
        Commands::Config(command) => commands::config::execute(command, &store, &config),
        Commands::Logs(command) => commands::logs::execute(command, &LogTree::for_store(&store)),
    };

    if let Err(e) = result {
        print_error_json(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}

/// Resolve the config directory and make sure a config exists.
///
/// The server cannot do anything without a config, so failure here ends
/// the process.
fn bootstrap(cli: &Cli) -> (ConfigStore, ServerConfig) {
    let store = match &cli.config_dir {
        Some(dir) => ConfigStore::new(dir.clone()),
        None => ConfigStore::from_env().unwrap_or_else(|e| fatal(&e)),
    };
    debug!("Using server config directory {}", store.dir().display());

    let config = store.initialize().unwrap_or_else(|e| fatal(&e));
    (store, config)
}

fn fatal(e: &daytona_core::Error) -> ! {
    error!("Failed to initialize server config: {}", e);
    print_error_json(&format!("Failed to initialize server config: {}", e));
    std::process::exit(1);
}
