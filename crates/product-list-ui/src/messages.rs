//! Translatable widget strings.

use std::collections::HashMap;

use leptos::prelude::*;

use crate::context::use_settings;

/// Strings shown by the product list widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageId {
    PriceChanged,
    PriceOptions,
    ChangePrice,
    OriginalPrice,
    ChangeTo,
    RevertToOriginal,
}

impl MessageId {
    pub const ALL: [MessageId; 6] = [
        MessageId::PriceChanged,
        MessageId::PriceOptions,
        MessageId::ChangePrice,
        MessageId::OriginalPrice,
        MessageId::ChangeTo,
        MessageId::RevertToOriginal,
    ];

    /// Catalog key, e.g. `store/product-list.priceChanged`.
    pub fn key(&self) -> &'static str {
        match self {
            MessageId::PriceChanged => "store/product-list.priceChanged",
            MessageId::PriceOptions => "store/product-list.priceOptions",
            MessageId::ChangePrice => "store/product-list.changePrice",
            MessageId::OriginalPrice => "store/product-list.originalPrice",
            MessageId::ChangeTo => "store/product-list.changeTo",
            MessageId::RevertToOriginal => "store/product-list.revertToOriginal",
        }
    }

    pub fn default_text(&self) -> &'static str {
        match self {
            MessageId::PriceChanged => "Price changed",
            MessageId::PriceOptions => "Price options",
            MessageId::ChangePrice => "Change price",
            MessageId::OriginalPrice => "Original price",
            MessageId::ChangeTo => "Change to",
            MessageId::RevertToOriginal => "Revert to original price",
        }
    }
}

/// Message catalog: English defaults plus configured overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Messages {
    overrides: HashMap<String, String>,
}

impl Messages {
    pub fn new(overrides: HashMap<String, String>) -> Self {
        Self { overrides }
    }

    pub fn get(&self, id: MessageId) -> String {
        self.overrides
            .get(id.key())
            .cloned()
            .unwrap_or_else(|| id.default_text().to_string())
    }
}

/// Render a catalog message.
#[component]
pub fn FormattedMessage(id: MessageId) -> impl IntoView {
    use_settings().messages.get(id)
}
