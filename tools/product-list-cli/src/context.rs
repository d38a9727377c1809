//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use product_list_commerce::ProductListConfig;

use crate::output::Output;

const CONFIG_NAMES: [&str; 3] = ["product-list.toml", ".product-list.toml", "product-list.json"];

/// Execution context for CLI commands.
pub struct Context {
    pub config: ProductListConfig,
    pub output: Output,
}

impl Context {
    /// Load context, reading the config file if one is given or found.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let config = match config_path {
            Some(path) => ProductListConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path))?,
            None => {
                let cwd = std::env::current_dir().context("Failed to get current directory")?;
                Self::find_config(&cwd).unwrap_or_default()
            }
        };

        Ok(Self { config, output })
    }

    /// Find a config file in the directory tree.
    fn find_config(start: &Path) -> Option<ProductListConfig> {
        let mut current = PathBuf::from(start);
        loop {
            for name in CONFIG_NAMES {
                let path = current.join(name);
                if path.exists() {
                    if let Ok(config) = ProductListConfig::load(&path) {
                        return Some(config);
                    }
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }
}
