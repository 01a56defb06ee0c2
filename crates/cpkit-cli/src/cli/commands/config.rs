//! Config command: show the loaded config (redacted) or its path.

use anyhow::Result;
use clap::Subcommand;
use cpkit_core::config;

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Load the config (creating a default file if missing) and print it as
    /// TOML with secrets redacted.
    Show,
    /// Print the config file location.
    Path,
}

pub fn run_config(action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let cfg = config::load_or_init()?;
            // Serializing through Secret redacts the credential.
            print!("{}", toml::to_string_pretty(&cfg)?);
        }
        ConfigAction::Path => {
            println!("{}", config::config_path()?.display());
        }
    }
    Ok(())
}
