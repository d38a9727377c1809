//! Read-only formatting of SKU variations.

use crate::item::{LineItem, SkuSpecification};
use serde::Serialize;

/// One rendered variation row, e.g. `color: red, blue`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VariationLine {
    /// Field name as given by the catalog, used for keys and class modifiers.
    pub field_name: String,
    /// Lowercased field name followed by `": "`.
    pub label: String,
    /// Lowercased, comma separated values.
    pub values: String,
    /// Comma separated values in original case, for the tooltip.
    pub title: String,
    /// DOM id, `specification-{item_id}-{field_name}`.
    pub element_id: String,
}

impl VariationLine {
    fn from_spec(item_id: &str, spec: &SkuSpecification) -> Self {
        let field_name = spec.field_name.clone().unwrap_or_default();
        let title = spec.field_values.join(", ");

        Self {
            label: format!("{}: ", field_name.to_lowercase()),
            values: title.to_lowercase(),
            element_id: format!("specification-{}-{}", item_id, field_name),
            title,
            field_name,
        }
    }
}

/// Variation rows for an item, in catalog order.
pub fn variation_lines(item: &LineItem) -> Vec<VariationLine> {
    item.sku_specifications
        .iter()
        .map(|spec| VariationLine::from_spec(&item.id, spec))
        .collect()
}
