//! Manual price override widget.

use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::prelude::*;
use product_list_commerce::ManualPriceEditor;

use crate::context::{use_item_context, use_settings};
use crate::css_handles::{class_list, MANUAL_PRICE};
use crate::messages::{FormattedMessage, MessageId};

/// Widget name used in logs.
pub const MANUAL_PRICE_WIDGET: &str = "manual-price";

/// Price override button and dialog for the current line item.
///
/// Renders nothing but the (closed) dialog unless manual prices are enabled
/// for the item.
#[component]
pub fn ManualPrice() -> impl IntoView {
    let ctx = use_item_context();
    let settings = use_settings();
    let currency = settings.manual_price.currency;
    let logger = StoredValue::new(settings.logger(MANUAL_PRICE_WIDGET, Some(ctx.item_index)));

    let editor = RwSignal::new(ManualPriceEditor::new(&ctx.item.get_untracked()));
    let error = RwSignal::new(None::<String>);
    let price_changed = Memo::new(move |_| ctx.item.with(|item| item.price_changed()));
    let is_open = Memo::new(move |_| editor.with(|e| e.is_open()));

    let open = move |_: MouseEvent| editor.update(|e| e.open());

    let close = move |_: MouseEvent| {
        let item = ctx.item.get_untracked();
        editor.update(|e| e.cancel(&item));
        error.set(None);
    };

    let edit = move |raw: String| match editor.try_update(|e| e.edit(&raw, currency)) {
        Some(Err(err)) => error.set(Some(err.to_string())),
        _ => error.set(None),
    };

    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        match editor.try_update(|e| e.submit()) {
            Some(Ok(price)) => {
                logger.with_value(|l| {
                    l.info_builder("manual price submitted")
                        .field_i64("amount_cents", price.amount_cents)
                        .field("currency", price.currency.code())
                        .emit()
                });
                error.set(None);
                ctx.on_set_manual_price.run((price, ctx.item_index));
            }
            Some(Err(err)) => error.set(Some(err.to_string())),
            None => {}
        }
    };

    let revert = move |_: MouseEvent| {
        let item = ctx.item.get_untracked();
        if let Some(price) = editor.try_update(|e| e.revert(&item)).flatten() {
            logger.with_value(|l| {
                l.info_builder("manual price reverted")
                    .field_i64("amount_cents", price.amount_cents)
                    .emit()
            });
            ctx.on_set_manual_price.run((price, ctx.item_index));
        }
        error.set(None);
    };

    let draft_price = move || editor.with(|e| e.draft().map(|m| m.display()).unwrap_or_default());
    let original_price =
        move || ctx.item.with(|item| item.price.map(|m| m.display()).unwrap_or_default());
    let original_class = move || {
        class_list(&["c-muted-1 mb3", if price_changed.get() { "strike" } else { "" }])
    };

    let trigger = move || {
        if !ctx.should_allow_manual_price {
            return None;
        }
        let body = if price_changed.get() {
            view! {
                <div>
                    <div class="flex-grow-0 tc mb2 c-muted-1">{draft_price}</div>
                    <div class="flex-grow-0 mb3 tc">
                        <span class="tag tag--small fw5">
                            <FormattedMessage id=MessageId::PriceChanged/>
                        </span>
                    </div>
                    <button type="button" class="button-plain button--small" on:click=open>
                        <FormattedMessage id=MessageId::PriceOptions/>
                    </button>
                </div>
            }
            .into_any()
        } else {
            view! {
                <button type="button" class="button-plain button--small" on:click=open>
                    <FormattedMessage id=MessageId::ChangePrice/>
                </button>
            }
            .into_any()
        };
        Some(view! { <div class="flex flex-column items-center mt3">{body}</div> })
    };

    let dialog = move || {
        is_open.get().then(|| {
            let initial = editor.with_untracked(|e| e.draft_display());
            view! {
                <div class="modal-overlay" on:click=close></div>
                <div class="modal w-25" role="dialog" aria-modal="true">
                    <div class="flex flex-column">
                        <span class="t-small mw9 mb1">
                            <FormattedMessage id=MessageId::OriginalPrice/>
                        </span>
                        <div class=original_class>{original_price}</div>
                        <form on:submit=submit>
                            <label class="t-small mw9 mb2" for="manual-price-input">
                                <FormattedMessage id=MessageId::ChangeTo/>
                            </label>
                            <div class="flex flex-row flex-grow mb3">
                                <div class="mr2">
                                    <input
                                        id="manual-price-input"
                                        type="text"
                                        inputmode="decimal"
                                        placeholder="Type a monetary value"
                                        value=initial
                                        on:input=move |ev| edit(event_target_value(&ev))
                                    />
                                </div>
                                <button type="submit" class="button button--secondary">"ok"</button>
                            </div>
                            {move || error.get().map(|message| view! {
                                <p class="c-danger t-small">{message}</p>
                            })}
                        </form>
                        <Show when=move || price_changed.get()>
                            <div>
                                <button type="button" class="button-plain" on:click=revert>
                                    <FormattedMessage id=MessageId::RevertToOriginal/>
                                </button>
                            </div>
                        </Show>
                    </div>
                </div>
            }
        })
    };

    let container_class = settings.css.handle(MANUAL_PRICE);

    view! {
        <div class=container_class>
            {trigger}
            {dialog}
        </div>
    }
}
