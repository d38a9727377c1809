//! Configuration commands.

use anyhow::{Context as _, Result};
use product_list_commerce::ProductListConfig;

use super::{ConfigArgs, ConfigCommand};
use crate::context::Context;

/// Run the config command.
pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Check { path } => check(&path, ctx),
        ConfigCommand::Show => show(&ctx.config, ctx),
    }
}

fn check(path: &str, ctx: &Context) -> Result<()> {
    let config = ProductListConfig::load(path)
        .with_context(|| format!("Config check failed: {}", path))?;

    if ctx.output.is_json() {
        ctx.output.json(&config);
        return Ok(());
    }

    ctx.output.config_summary(path, &config);
    Ok(())
}

fn show(config: &ProductListConfig, ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(config);
        return Ok(());
    }

    let content = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", content);
    Ok(())
}
