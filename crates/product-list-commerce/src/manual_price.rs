//! Manual price override dialog state.
//!
//! Operators with the right permission can override the selling price of a
//! line item. The dialog holds a draft amount until it is submitted,
//! cancelled, or reverted to the list price.

use crate::error::ProductListError;
use crate::item::LineItem;
use crate::money::{Currency, Money};

/// State of the override dialog for one line item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManualPriceEditor {
    is_open: bool,
    draft: Option<Money>,
}

impl ManualPriceEditor {
    /// Closed dialog with the current selling price as draft.
    pub fn new(item: &LineItem) -> Self {
        Self {
            is_open: false,
            draft: item.selling_price,
        }
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn draft(&self) -> Option<Money> {
        self.draft
    }

    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close without saving, discarding the draft.
    pub fn cancel(&mut self, item: &LineItem) {
        self.draft = item.selling_price;
        self.is_open = false;
    }

    /// Update the draft from typed text.
    ///
    /// Invalid text clears the draft so a later submit is refused.
    pub fn edit(&mut self, raw: &str, currency: Currency) -> Result<(), ProductListError> {
        match Money::parse_decimal(raw, currency) {
            Some(amount) => {
                self.draft = Some(amount);
                Ok(())
            }
            None => {
                self.draft = None;
                Err(ProductListError::InvalidPrice(raw.to_string()))
            }
        }
    }

    /// Submit the draft. Closes the dialog and returns the new price.
    pub fn submit(&mut self) -> Result<Money, ProductListError> {
        let amount = self.draft.ok_or(ProductListError::MissingPrice)?;
        self.is_open = false;
        Ok(amount)
    }

    /// Restore the list price. Closes the dialog and returns the price to
    /// hand back to the owner, if the item has one.
    pub fn revert(&mut self, item: &LineItem) -> Option<Money> {
        self.draft = item.price;
        self.is_open = false;
        item.price
    }

    /// Draft amount formatted for the input field, without symbol.
    pub fn draft_display(&self) -> String {
        self.draft.map(|m| m.display_amount()).unwrap_or_default()
    }
}
