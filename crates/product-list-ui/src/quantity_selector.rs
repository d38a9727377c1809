//! Quantity selector widget.
//!
//! Renders either a picker (`0..=9` plus `10+`) or a free-text field, never
//! both. The state machine lives in [`product_list_commerce::quantity`];
//! this module only binds it to the DOM.

use leptos::prelude::*;
use product_list_commerce::quantity::{
    normalize, picker_options, Modality, QuantityState, MAX_INPUT_LENGTH,
};

use crate::context::use_settings;
use crate::css_handles::{class_list, QUANTITY_SELECTOR};

/// Widget name used in logs.
pub const QUANTITY_WIDGET: &str = "quantity-selector";

const PICKER_CLASSES: &str = "w-100 pa2 br2 ba b--muted-4";
const INPUT_CLASSES: &str = "w-100 pa2 br2 ba b--muted-4 tc";

#[component]
pub fn QuantitySelector(
    /// Committed quantity, owned by the caller.
    #[prop(into)]
    value: Signal<u32>,
    /// Highest selectable quantity, e.g. stock on hand.
    #[prop(into)]
    max_value: Signal<u32>,
    /// Render the widget but ignore interaction.
    #[prop(into, default = false.into())]
    disabled: Signal<bool>,
    /// Receives the validated quantity on every commit.
    #[prop(into)]
    on_change: Callback<u32>,
    /// Position of the line item, for logs.
    #[prop(optional)]
    item_index: Option<usize>,
) -> impl IntoView {
    let settings = use_settings();
    let logger = StoredValue::new(settings.logger(QUANTITY_WIDGET, item_index));
    let state = RwSignal::new(QuantityState::mount(
        value.get_untracked(),
        max_value.get_untracked(),
    ));

    // Reconcile with the committed value before anything is rendered from
    // the state. The write is untracked so it cannot retrigger this memo.
    let snapshot = Memo::new(move |_| {
        let committed = value.get();
        let ceiling = max_value.get();
        let resynced = state
            .try_update_untracked(|s| s.reconcile(committed, ceiling))
            .unwrap_or(false);
        if resynced {
            logger.with_value(|l| {
                l.trace_builder("display resynchronized")
                    .field_i64("value", i64::from(committed))
                    .field_i64("max_value", i64::from(ceiling))
                    .emit()
            });
        }
        state.get()
    });

    let modality = Memo::new(move |_| snapshot.with(|s| s.modality()));
    let picker_value = Memo::new(move |_| normalize(value.get(), max_value.get()));

    let commit = move |committed: u32| {
        logger.with_value(|l| {
            l.debug_builder("quantity committed")
                .field_i64("value", i64::from(committed))
                .field("modality", snapshot.with_untracked(|s| s.modality().as_str()))
                .emit()
        });
        on_change.run(committed);
    };

    let choose = move |raw: String| {
        if disabled.get_untracked() {
            return;
        }
        let ceiling = max_value.get_untracked();
        if let Some(committed) = state.try_update(|s| s.select(&raw, ceiling)) {
            commit(committed);
        }
    };

    // The rendered `prop:value` only changes when the state does. A keystroke
    // that normalizes back to the current text leaves the raw text in the
    // element, so handlers write the display text back directly.
    let field = NodeRef::<leptos::html::Input>::new();
    let sync_field = move || {
        if let Some(input) = field.get_untracked() {
            state.with_untracked(|s| input.set_value(s.display_text()));
        }
    };

    let type_text = move |raw: String| {
        if disabled.get_untracked() {
            return;
        }
        let ceiling = max_value.get_untracked();
        let rewritten = state
            .try_update(|s| s.input(&raw, ceiling))
            .unwrap_or(false);
        if rewritten {
            sync_field();
            logger.with_value(|l| {
                l.trace_builder("keystroke normalized")
                    .field("typed", &raw)
                    .emit()
            });
        }
    };

    // Focus tracking runs even while disabled; only commits are blocked.
    let focus = move || state.update(|s| s.focus());

    let blur = move || {
        if disabled.get_untracked() {
            state.update(|s| s.release_focus());
            return;
        }
        let ceiling = max_value.get_untracked();
        if let Some(committed) = state.try_update(|s| s.blur(ceiling)) {
            sync_field();
            commit(committed);
        }
    };

    let container_class = class_list(&[&settings.css.handle(QUANTITY_SELECTOR), "w-100"]);

    view! {
        <div class=container_class>
            {move || match modality.get() {
                Modality::Enumerated => view! {
                    <select
                        class=PICKER_CLASSES
                        disabled=move || disabled.get()
                        on:change=move |ev| choose(event_target_value(&ev))
                    >
                        {move || {
                            picker_options(max_value.get())
                                .into_iter()
                                .map(|option| {
                                    let choice = option.value;
                                    view! {
                                        <option
                                            value={choice.to_string()}
                                            prop:selected=move || picker_value.get() == choice
                                        >
                                            {option.label}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                }
                .into_any(),
                Modality::FreeText => view! {
                    <input
                        type="text"
                        inputmode="numeric"
                        class=INPUT_CLASSES
                        maxlength={MAX_INPUT_LENGTH.to_string()}
                        node_ref=field
                        prop:value=move || snapshot.with(|s| s.display_text().to_string())
                        disabled=move || disabled.get()
                        on:input=move |ev| type_text(event_target_value(&ev))
                        on:focus=move |_| focus()
                        on:blur=move |_| blur()
                    />
                }
                .into_any(),
            }}
        </div>
    }
}
