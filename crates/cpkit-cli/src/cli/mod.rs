//! CLI for the cpkit control-plane toolkit.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{run_config, run_hash, run_info, run_resolve, run_token, ConfigAction};

/// Top-level CLI for the cpkit toolkit.
#[derive(Debug, Parser)]
#[command(name = "cpkit")]
#[command(about = "cpkit: control-plane client toolkit", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Compute the digest of a string.
    Hash {
        /// Input string to hash.
        input: String,
        /// Digest algorithm: md5, sha1, sha256, sha512 or fnv64a.
        #[arg(long, default_value = "sha256")]
        algorithm: String,
    },

    /// Generate a random 32-character hex token.
    Token,

    /// Resolve a host:port address and print its IP and port.
    Resolve {
        /// Address in host:port form.
        address: String,
    },

    /// Print runtime facts (and the external IP when discoverable) as JSON.
    Info,

    /// Inspect the client configuration.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        match cli.command {
            CliCommand::Hash { input, algorithm } => run_hash(&input, &algorithm),
            CliCommand::Token => run_token(),
            CliCommand::Resolve { address } => run_resolve(&address),
            CliCommand::Info => run_info(),
            CliCommand::Config { action } => run_config(action),
        }
    }
}

#[cfg(test)]
mod tests;
