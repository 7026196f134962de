//! Modal dialog for creating or editing a product.

use leptos::prelude::*;

use crate::app::ClientContext;
use crate::net::types::Product;
use crate::pages::resource::failure_notice;
use crate::state::forms::{ProductDraft, SaveAction, save_record};
use crate::util::browser::spawn_task;

/// Product form. `initial` is the stored record when editing, `None` for a new
/// product.
#[component]
pub fn ProductForm(
    initial: Option<Product>,
    on_saved: Callback<SaveAction>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let action = SaveAction::for_id(initial.as_ref().and_then(|p| p.id));
    let draft = RwSignal::new(initial.as_ref().map(ProductDraft::from_product).unwrap_or_default());
    let error = RwSignal::new(None::<String>);
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get_untracked() {
            return;
        }
        let record = match draft.with_untracked(|d| d.validate(initial.as_ref())) {
            Ok(record) => record,
            Err(message) => {
                error.set(Some(message.to_owned()));
                return;
            }
        };
        busy.set(true);
        error.set(None);

        let service = ctx.products.clone();
        let started = spawn_task("product save", async move {
            match save_record(&*service, record.id, record).await {
                Ok(done) => on_saved.run(done),
                Err(e) => {
                    log::warn!("product {} failed: {e}", action.verb());
                    error.set(failure_notice(&format!("{} product", action.verb()), &e));
                    busy.set(false);
                }
            }
        });
        if !started {
            busy.set(false);
        }
    };

    let title = match action {
        SaveAction::Created => "New Product",
        SaveAction::Updated => "Edit Product",
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--resource"
                on:click=move |ev| ev.stop_propagation()
                on:submit=on_submit
            >
                <h3 class="dialog__title">{title}</h3>
                <label class="dialog__label">
                    "Code"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="20"
                        prop:value=move || draft.with(|d| d.product_code.clone())
                        on:input=move |ev| draft.update(|d| d.product_code = event_target_value(&ev))
                        autofocus=true
                    />
                </label>
                <label class="dialog__label">
                    "Name"
                    <input
                        class="dialog__input"
                        type="text"
                        maxlength="100"
                        prop:value=move || draft.with(|d| d.product_name.clone())
                        on:input=move |ev| draft.update(|d| d.product_name = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Value"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="0.01"
                        prop:value=move || draft.with(|d| d.product_value.clone())
                        on:input=move |ev| draft.update(|d| d.product_value = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "Stock"
                    <input
                        class="dialog__input"
                        type="number"
                        min="0"
                        step="1"
                        prop:value=move || draft.with(|d| d.stock.clone())
                        on:input=move |ev| draft.update(|d| d.stock = event_target_value(&ev))
                    />
                </label>
                <label class="dialog__label">
                    "City ID"
                    <input
                        class="dialog__input"
                        type="number"
                        min="1"
                        step="1"
                        prop:value=move || draft.with(|d| d.city_id.clone())
                        on:input=move |ev| draft.update(|d| d.city_id = event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="dialog__error" role="alert">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(())>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
