//! Products list with create, edit and delete.

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use leptos::prelude::*;

use super::resource::{Editor, delete_then_reload, load_into, open_editor, saved_notice};
use crate::app::ClientContext;
use crate::components::notice::{Notice, show_notice};
use crate::components::product_form::ProductForm;
use crate::net::types::Product;
use crate::state::forms::SaveAction;

/// Price cell text, two decimals.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

#[component]
pub fn ProductsPage() -> impl IntoView {
    let ctx = expect_context::<ClientContext>();
    let products = RwSignal::new(Vec::<Product>::new());
    let loading = RwSignal::new(true);
    let notice = RwSignal::new(None::<String>);
    let reload = RwSignal::new(0_u64);
    let editor = RwSignal::new(Editor::<Product>::Closed);

    let service = ctx.products.clone();
    Effect::new(move || {
        reload.track();
        load_into(service.clone(), products, loading, notice);
    });

    let on_saved = Callback::new(move |action: SaveAction| {
        editor.set(Editor::Closed);
        show_notice(notice, saved_notice::<Product>(action));
        reload.update(|n| *n += 1);
    });
    let on_cancel = Callback::new(move |()| editor.set(Editor::Closed));

    let row_service = ctx.products;
    view! {
        <section class="resource-page">
            <div class="resource-page__header">
                <h2>"Products"</h2>
                <button class="btn btn--primary" type="button" on:click=move |_| editor.set(Editor::Creating)>
                    "New"
                </button>
            </div>
            <Notice message=notice/>
            <Show when=move || loading.get()>
                <p class="resource-page__loading">"Loading..."</p>
            </Show>
            <table class="resource-table">
                <thead>
                    <tr>
                        <th>"Code"</th>
                        <th>"Name"</th>
                        <th>"Value"</th>
                        <th>"Stock"</th>
                        <th>"City"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=move || products.get()
                        key=|product| product.id
                        children=move |product: Product| {
                            let edit_service = row_service.clone();
                            let delete_service = row_service.clone();
                            let id = product.id;
                            view! {
                                <tr>
                                    <td>{product.product_code}</td>
                                    <td>{product.product_name}</td>
                                    <td>{format_price(product.product_value)}</td>
                                    <td>{product.stock}</td>
                                    <td>{product.city_id}</td>
                                    <td class="resource-table__actions">
                                        <button
                                            class="resource-table__edit"
                                            type="button"
                                            disabled=id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    open_editor(edit_service.clone(), id, editor, notice);
                                                }
                                            }
                                        >
                                            "Edit"
                                        </button>
                                        <button
                                            class="resource-table__delete"
                                            type="button"
                                            disabled=id.is_none()
                                            on:click=move |_| {
                                                if let Some(id) = id {
                                                    delete_then_reload(delete_service.clone(), id, notice, reload);
                                                }
                                            }
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            {move || {
                let state = editor.get();
                state.is_open().then(|| {
                    view! { <ProductForm initial=state.record().cloned() on_saved=on_saved on_cancel=on_cancel/> }
                })
            }}
        </section>
    }
}
