//! CLI command implementations.

pub mod config;
pub mod options;
pub mod simulate;

use clap::{Args, Subcommand};

/// Arguments for the simulate command.
#[derive(Args)]
pub struct SimulateArgs {
    /// Committed quantity at mount.
    #[arg(long, default_value_t = 1)]
    pub value: u32,

    /// Ceiling (stock on hand).
    #[arg(short, long)]
    pub max: u32,

    /// Simulate a disabled selector: interactions are ignored.
    #[arg(long)]
    pub disabled: bool,

    /// Steps: select:<text>, input:<text>, focus, blur, render[:value[:max]].
    #[arg(required = true)]
    pub steps: Vec<String>,
}

/// Arguments for the options command.
#[derive(Args)]
pub struct OptionsArgs {
    /// Ceiling (stock on hand).
    #[arg(short, long)]
    pub max: u32,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Validate a config file
    Check {
        /// Path to a TOML or JSON config.
        path: String,
    },
    /// Print the active configuration as TOML
    Show,
}
