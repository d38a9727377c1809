//! SKU variation rows.

use leptos::prelude::*;
use product_list_commerce::variations::variation_lines;

use crate::context::{use_item_context, use_settings};
use crate::css_handles::{class_list, VARIATIONS_CONTAINER, VARIATIONS_ITEM, VARIATIONS_ITEM_VALUE};

#[component]
pub fn ProductVariations() -> impl IntoView {
    let ctx = use_item_context();
    let css = use_settings().css;

    move || {
        let item = ctx.item.get();
        let lines = variation_lines(&item);
        if lines.is_empty() {
            return None;
        }

        let container_class = class_list(&[
            "c-muted-1 f6 lh-copy",
            &css.handle(VARIATIONS_CONTAINER),
            item.availability.opacity_class(),
        ]);
        let value_class = css.handle(VARIATIONS_ITEM_VALUE);

        let rows = lines
            .into_iter()
            .map(|line| {
                let row_class = class_list(&[
                    &css.handle(VARIATIONS_ITEM),
                    &css.modifier(VARIATIONS_ITEM, &line.field_name),
                ]);
                view! {
                    <div class=row_class id={line.element_id}>
                        {line.label}
                        <span title={line.title} class={value_class.clone()}>
                            {line.values}
                        </span>
                    </div>
                }
            })
            .collect_view();

        Some(view! { <div class=container_class>{rows}</div> })
    }
}
