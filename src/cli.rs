//! PlayMate mock server command-line interface.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use anyhow::Error;

use crate::config::Config;

/// The command line arguments.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Configuration file path.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// Overrides the port to listen on.
    #[arg(short, long)]
    pub port: Option<u16>,
    /// The command to run.
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Args {
    /// The config file to read, defaulting to `playmate.toml`.
    pub fn config_path(&self) -> PathBuf {
        self.config
            .clone()
            .unwrap_or_else(|| PathBuf::from("playmate.toml"))
    }

    /// Applies command line overrides on top of a read config.
    pub fn apply(&self, config: &mut Config) {
        if let Some(port) = self.port {
            config.http.port = port;
        }
    }
}

/// Operational commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Prints the resolved configuration and exits.
    ShowConfig,
}

/// Prints the resolved configuration as JSON.
pub fn show_config(config: &Config) -> Result<(), Error> {
    println!("{}", serde_json::to_string_pretty(config)?);

    Ok(())
}
