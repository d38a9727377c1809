//! Product list error types.

use thiserror::Error;

/// Errors that can occur outside the quantity path.
///
/// Quantity selection never fails: malformed input is clamped or recovered
/// instead, so nothing in [`crate::quantity`] returns this type.
#[derive(Error, Debug)]
pub enum ProductListError {
    /// Manual price text could not be parsed as an amount.
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Manual price submitted without a valid draft amount.
    #[error("No manual price entered")]
    MissingPrice,

    /// Configuration file could not be read.
    #[error("Failed to read config {path}: {source}")]
    ConfigRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// TOML configuration error.
    #[error("Invalid TOML config: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration error.
    #[error("Invalid JSON config: {0}")]
    Json(#[from] serde_json::Error),
}
