//! One line item of the product list.

use leptos::prelude::*;
use product_list_commerce::{LineItem, Money};

use crate::context::{provide_item_context, use_settings, ItemContext};
use crate::css_handles::PRODUCT_LIST_ITEM;
use crate::manual_price::ManualPrice;
use crate::product_variations::ProductVariations;
use crate::quantity_selector::QuantitySelector;

/// Line item row: name, variations, quantity selector and manual price.
#[component]
pub fn ProductListItem(
    #[prop(into)] item: Signal<LineItem>,
    /// Position of the item in the list.
    item_index: usize,
    /// Receives `(quantity, item_index)` when the quantity is committed.
    #[prop(into)]
    on_quantity_change: Callback<(u32, usize)>,
    /// Receives `(price, item_index)` when a manual price is set.
    #[prop(into)]
    on_set_manual_price: Callback<(Money, usize)>,
) -> impl IntoView {
    let settings = use_settings();
    provide_item_context(ItemContext {
        item,
        item_index,
        should_allow_manual_price: settings.manual_price.enabled,
        on_set_manual_price,
    });

    let quantity = Signal::derive(move || item.with(|i| i.quantity));
    let available_quantity = Signal::derive(move || item.with(|i| i.available_quantity));
    let unavailable = Signal::derive(move || item.with(|i| !i.availability.is_available()));
    let on_change = Callback::new(move |value: u32| on_quantity_change.run((value, item_index)));

    view! {
        <div class={settings.css.handle(PRODUCT_LIST_ITEM)}>
            <div class="fw5 mb2">{move || item.with(|i| i.name.clone())}</div>
            <ProductVariations/>
            <div class="mt3 w4">
                <QuantitySelector
                    value=quantity
                    max_value=available_quantity
                    disabled=unavailable
                    on_change=on_change
                    item_index=item_index
                />
            </div>
            <ManualPrice/>
        </div>
    }
}
