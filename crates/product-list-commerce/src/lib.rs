//! Domain logic for the storefront product list widgets.
//!
//! - **Quantity**: the quantity selector state machine (picker or free text)
//! - **Manual price**: the price override dialog
//! - **Variations**: formatting of SKU specifications
//! - **Config**: widget configuration loaded from TOML or JSON
//!
//! # Example
//!
//! ```rust
//! use product_list_commerce::quantity::{Modality, QuantityState};
//!
//! let mut state = QuantityState::mount(3, 20);
//! assert_eq!(state.modality(), Modality::Enumerated);
//!
//! // Picking "10+" commits 10 and switches to the free-text field.
//! assert_eq!(state.select("10", 20), 10);
//! assert_eq!(state.modality(), Modality::FreeText);
//! ```

pub mod config;
pub mod error;
pub mod item;
pub mod manual_price;
pub mod money;
pub mod quantity;
pub mod variations;

pub use config::{LoggingSettings, ManualPriceConfig, ProductListConfig};
pub use error::ProductListError;
pub use item::{Availability, LineItem, SkuSpecification};
pub use manual_price::ManualPriceEditor;
pub use money::{Currency, Money};
pub use quantity::{Modality, PickerOption, QuantityEvent, QuantityState};
pub use variations::{variation_lines, VariationLine};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::config::ProductListConfig;
    pub use crate::error::ProductListError;
    pub use crate::item::{Availability, LineItem, SkuSpecification};
    pub use crate::manual_price::ManualPriceEditor;
    pub use crate::money::{Currency, Money};
    pub use crate::quantity::{
        normalize, picker_options, validate_display_value, validate_value, Modality,
        PickerOption, QuantityEvent, QuantityState,
    };
    pub use crate::variations::{variation_lines, VariationLine};
}
