//! Product list CLI - drive the widget logic from a terminal.
//!
//! Commands:
//! - `product-list simulate` - Replay a scripted sequence of selector events
//! - `product-list options` - Show the picker choices for a ceiling
//! - `product-list config` - Validate or print widget configuration

mod commands;
mod context;
mod output;
mod script;

use anyhow::Result;
use clap::{Parser, Subcommand};

use commands::{ConfigArgs, OptionsArgs, SimulateArgs};

/// Product list CLI - inspect quantity selection and widget settings
#[derive(Parser)]
#[command(name = "product-list")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Enable verbose output and widget logs
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Use JSON output format
    #[arg(long, global = true)]
    json: bool,

    /// Config file path
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay selector events against a committed value
    Simulate(SimulateArgs),

    /// List picker options for a ceiling
    Options(OptionsArgs),

    /// Manage configuration
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_env_filter("product_list=trace")
            .with_writer(std::io::stderr)
            .init();
    }

    let output = output::Output::new(cli.verbose, cli.json);
    let ctx = context::Context::load(cli.config.as_deref(), output)?;

    let result = match cli.command {
        Commands::Simulate(args) => commands::simulate::run(args, &ctx),
        Commands::Options(args) => commands::options::run(args, &ctx),
        Commands::Config(args) => commands::config::run(args, &ctx),
    };

    if let Err(e) = result {
        ctx.output.error(&format!("{:#}", e));
        std::process::exit(1);
    }

    Ok(())
}
