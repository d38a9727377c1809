//! Line item as shown in the product list.

use crate::money::Money;
use serde::{Deserialize, Serialize};

/// Availability of a line item, as reported by the cart API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Availability {
    #[default]
    Available,
    Unavailable,
    CannotBeDelivered,
    Withheld,
}

impl Availability {
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available)
    }

    /// Class dimming widgets of items that cannot be bought.
    pub fn opacity_class(&self) -> &'static str {
        if self.is_available() {
            ""
        } else {
            "o-40"
        }
    }
}

/// A SKU attribute such as color or size.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SkuSpecification {
    pub field_name: Option<String>,
    #[serde(default)]
    pub field_values: Vec<String>,
}

impl SkuSpecification {
    pub fn new(field_name: impl Into<String>, field_values: Vec<String>) -> Self {
        Self {
            field_name: Some(field_name.into()),
            field_values,
        }
    }
}

/// A line item in the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub id: String,
    pub name: String,
    /// List price, before any override.
    pub price: Option<Money>,
    /// Price the item currently sells for, including manual overrides.
    pub selling_price: Option<Money>,
    pub quantity: u32,
    /// Ceiling for the quantity selector.
    pub available_quantity: u32,
    #[serde(default)]
    pub availability: Availability,
    #[serde(default)]
    pub sku_specifications: Vec<SkuSpecification>,
}

impl LineItem {
    /// Create an available line item selling at its list price.
    pub fn new(id: impl Into<String>, name: impl Into<String>, price: Money) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price: Some(price),
            selling_price: Some(price),
            quantity: 1,
            available_quantity: 0,
            availability: Availability::Available,
            sku_specifications: Vec::new(),
        }
    }

    pub fn with_quantity(mut self, quantity: u32, available_quantity: u32) -> Self {
        self.quantity = quantity;
        self.available_quantity = available_quantity;
        self
    }

    pub fn with_specification(mut self, spec: SkuSpecification) -> Self {
        self.sku_specifications.push(spec);
        self
    }

    /// Whether the selling price differs from the list price.
    pub fn price_changed(&self) -> bool {
        self.price != self.selling_price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Currency;

    #[test]
    fn test_price_changed() {
        let mut item = LineItem::new("1", "Mug", Money::new(1000, Currency::USD));
        assert!(!item.price_changed());

        item.selling_price = Some(Money::new(800, Currency::USD));
        assert!(item.price_changed());
    }

    #[test]
    fn test_opacity_class() {
        assert_eq!(Availability::Available.opacity_class(), "");
        assert_eq!(Availability::Withheld.opacity_class(), "o-40");
    }

    #[test]
    fn test_deserialize_from_cart_json() {
        let json = r#"{
            "id": "42",
            "name": "T-shirt",
            "price": { "amount_cents": 2500, "currency": "BRL" },
            "sellingPrice": { "amount_cents": 2000, "currency": "BRL" },
            "quantity": 2,
            "availableQuantity": 30,
            "availability": "cannot_be_delivered",
            "skuSpecifications": [{ "fieldName": "Color", "fieldValues": ["Red"] }]
        }"#;

        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.availability, Availability::CannotBeDelivered);
        assert_eq!(item.available_quantity, 30);
        assert_eq!(item.sku_specifications[0].field_values, vec!["Red"]);
        assert!(item.price_changed());
    }
}
