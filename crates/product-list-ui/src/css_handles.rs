//! Namespaced CSS class handles.

use serde::Serialize;

pub const VARIATIONS_CONTAINER: &str = "productVariationsContainer";
pub const VARIATIONS_ITEM: &str = "productVariationsItem";
pub const VARIATIONS_ITEM_VALUE: &str = "productVariationsItemValue";
pub const QUANTITY_SELECTOR: &str = "quantitySelector";
pub const MANUAL_PRICE: &str = "manualPrice";
pub const PRODUCT_LIST_ITEM: &str = "productListItem";

/// Builds theme-overridable class names under a namespace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CssHandles {
    namespace: String,
}

impl CssHandles {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    /// `{namespace}-{handle}`.
    pub fn handle(&self, handle: &str) -> String {
        format!("{}-{}", self.namespace, handle)
    }

    /// `{namespace}-{handle}--{modifier}`.
    pub fn modifier(&self, handle: &str, modifier: &str) -> String {
        format!("{}--{}", self.handle(handle), modifier)
    }
}

impl Default for CssHandles {
    fn default() -> Self {
        Self::new("product-list")
    }
}

/// Join class names, skipping empty ones.
pub fn class_list(classes: &[&str]) -> String {
    classes
        .iter()
        .map(|class| class.trim())
        .filter(|class| !class.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles() {
        let css = CssHandles::new("store");
        assert_eq!(css.handle(VARIATIONS_ITEM), "store-productVariationsItem");
        assert_eq!(
            css.modifier(VARIATIONS_ITEM, "Color"),
            "store-productVariationsItem--Color"
        );
    }

    #[test]
    fn test_class_list_skips_empty() {
        assert_eq!(class_list(&["c-muted-1 f6", "", " o-40 "]), "c-muted-1 f6 o-40");
        assert_eq!(class_list(&[]), "");
    }
}
