//! Shared widget settings and per-item context.

use leptos::prelude::*;
use product_list_commerce::{
    LineItem, LoggingSettings, ManualPriceConfig, Money, ProductListConfig,
};
use product_list_observability::WidgetLogger;

use crate::css_handles::CssHandles;
use crate::messages::Messages;

/// Settings shared by every widget of a product list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductListSettings {
    pub css: CssHandles,
    pub messages: Messages,
    pub manual_price: ManualPriceConfig,
    pub logging: LoggingSettings,
}

impl ProductListSettings {
    pub fn from_config(config: &ProductListConfig) -> Self {
        Self {
            css: CssHandles::new(config.css_namespace.clone()),
            messages: Messages::new(config.messages.clone()),
            manual_price: config.manual_price.clone(),
            logging: config.logging.clone(),
        }
    }

    /// Logger for a widget, optionally tagged with the line item position.
    pub fn logger(&self, widget: &str, item_index: Option<usize>) -> WidgetLogger {
        let logger = WidgetLogger::from_settings(widget, &self.logging);
        match item_index {
            Some(index) => logger.with_item_index(index),
            None => logger,
        }
    }
}

/// Provide settings to all widgets below the current owner.
pub fn provide_settings(config: &ProductListConfig) {
    provide_context(ProductListSettings::from_config(config));
}

/// Settings from context, or defaults when none were provided.
pub fn use_settings() -> ProductListSettings {
    use_context::<ProductListSettings>().unwrap_or_default()
}

/// The line item a group of widgets is rendering.
#[derive(Clone, Copy)]
pub struct ItemContext {
    pub item: Signal<LineItem>,
    /// Position of the item in the list, passed back to owner callbacks.
    pub item_index: usize,
    pub should_allow_manual_price: bool,
    /// Invoked with the new selling price and the item position.
    pub on_set_manual_price: Callback<(Money, usize)>,
}

pub fn provide_item_context(context: ItemContext) {
    provide_context(context);
}

/// Item context of the enclosing `ProductListItem`.
///
/// # Panics
/// Panics when called outside an item, which is a wiring mistake.
pub fn use_item_context() -> ItemContext {
    expect_context::<ItemContext>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use product_list_commerce::Currency;

    #[test]
    fn test_settings_from_config() {
        let mut config = ProductListConfig::default();
        config.css_namespace = "store".to_string();
        config.manual_price.enabled = true;
        config.manual_price.currency = Currency::BRL;

        let settings = ProductListSettings::from_config(&config);
        assert_eq!(settings.css.handle("manualPrice"), "store-manualPrice");
        assert!(settings.manual_price.enabled);
        assert_eq!(settings.manual_price.currency, Currency::BRL);
    }

    #[test]
    fn test_logger_carries_item_index() {
        let settings = ProductListSettings::default();
        let logger = settings.logger("quantity-selector", Some(3));
        let entry = logger.info_builder("x").build().unwrap();
        assert_eq!(entry.item_index, Some(3));
        assert_eq!(entry.widget, "quantity-selector");
    }
}
