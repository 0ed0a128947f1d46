//! Config command implementation

use anyhow::Result;
use daytona_core::{ConfigStore, ServerConfig};

use crate::cli::ConfigCommand;
use crate::output::{is_json_mode, print_json, print_success_json};

pub fn execute(command: ConfigCommand, store: &ConfigStore, config: &ServerConfig) -> Result<()> {
    match command {
        ConfigCommand::Show => {
            print_json(config);
            Ok(())
        }
        ConfigCommand::Path => {
            let path = store.config_path();
            if is_json_mode() {
                print_json(&path);
            } else {
                println!("{}", path.display());
            }
            Ok(())
        }
        ConfigCommand::Reset => {
            let fresh = ServerConfig::default_for(store.dir());
            store.save(&fresh)?;
            print_success_json(
                &format!("Reset config at {}", store.config_path().display()),
                Some(&fresh),
            );
            Ok(())
        }
    }
}
