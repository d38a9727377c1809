//! Leptos components for the storefront product list.
//!
//! - `QuantitySelector` - picker or free-text quantity entry bounded by stock
//! - `ManualPrice` - price override button and dialog
//! - `ProductVariations` - SKU specification rows
//! - `ProductListItem` - one line item wiring the three together
//!
//! Widgets read shared settings (CSS namespace, messages, logging) from a
//! [`ProductListSettings`] context and per-item data from an
//! [`ItemContext`].

mod context;
mod css_handles;
mod item;
mod manual_price;
mod messages;
mod product_variations;
mod quantity_selector;

pub use context::*;
pub use css_handles::*;
pub use item::*;
pub use manual_price::*;
pub use messages::*;
pub use product_variations::*;
pub use quantity_selector::*;

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::context::{
        provide_item_context, provide_settings, use_item_context, use_settings, ItemContext,
        ProductListSettings,
    };
    pub use crate::item::ProductListItem;
    pub use crate::manual_price::ManualPrice;
    pub use crate::messages::{FormattedMessage, MessageId, Messages};
    pub use crate::product_variations::ProductVariations;
    pub use crate::quantity_selector::QuantitySelector;
    pub use product_list_commerce::prelude::*;
}
