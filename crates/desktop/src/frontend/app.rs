//! Leptos application: the inventory view.
//!
//! One component, one signal: the whole view state lives in a single
//! `RwSignal<InventoryView>` and every user event routes through the
//! controller's operations.

use leptos::*;

use stash_core::ProductId;
use stash_products::{Category, Product, Rating};

use crate::state::InventoryView;

/// Main application component.
#[component]
pub fn App() -> impl IntoView {
    let state = create_rw_signal(seeded_view());
    view! { <InventoryManager state=state/> }
}

/// Demo records shown on first load.
fn seeded_view() -> InventoryView {
    let seed = [
        ("Hydrating Shampoo", "PureCare", Category::Cleansing, 5),
        ("Shea Butter Mask", "Natura", Category::Treatment, 4),
    ]
    .into_iter()
    .filter_map(|(name, brand, category, rating)| {
        Product::new(ProductId::new(), name, brand, category, Rating::clamped(rating)).ok()
    })
    .collect();

    InventoryView::with_products(seed).unwrap_or_default()
}

/// The inventory view: add-product form plus collection table.
#[component]
fn InventoryManager(state: RwSignal<InventoryView>) -> impl IntoView {
    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        state.update(|s| {
            s.submit();
        });
    };

    view! {
        <div class="app">
            <header>
                <h2>"Product Stash"</h2>
                <p>"Manage your collection of hair products and treatments."</p>
            </header>

            <div class="layout">
                <section class="form-panel">
                    <h3>"Add New Product"</h3>
                    <form on:submit=on_submit>
                        <div class="form-group">
                            <label for="name">"Product Name"</label>
                            <input
                                type="text"
                                id="name"
                                placeholder="e.g. Leave-in Conditioner"
                                prop:value=move || state.with(|s| s.draft().name.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.set_name(event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="brand">"Brand"</label>
                            <input
                                type="text"
                                id="brand"
                                placeholder="e.g. SheaMoisture"
                                prop:value=move || state.with(|s| s.draft().brand.clone())
                                on:input=move |ev| {
                                    state.update(|s| s.set_brand(event_target_value(&ev)));
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label for="category">"Category"</label>
                            <select
                                id="category"
                                prop:value=move || {
                                    state.with(|s| s.draft().category.label().to_string())
                                }
                                on:change=move |ev| {
                                    if let Ok(category) = event_target_value(&ev).parse::<Category>() {
                                        state.update(|s| s.set_category(category));
                                    }
                                }
                            >
                                {Category::ALL
                                    .into_iter()
                                    .map(|category| {
                                        view! {
                                            <option value=category.label()>{category.label()}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Rating (1-5)"</label>
                            <div class="star-picker">
                                {(1u8..=5)
                                    .map(|n| {
                                        let filled = move || {
                                            state.with(|s| s.draft().rating.value() >= n)
                                        };
                                        view! {
                                            <button
                                                type="button"
                                                class=move || {
                                                    if filled() { "star filled" } else { "star" }
                                                }
                                                on:click=move |_| {
                                                    state.update(|s| s.set_rating(Rating::clamped(n)));
                                                }
                                            >
                                                {move || if filled() { "★" } else { "☆" }}
                                            </button>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <button type="submit" class="submit">"Add to Stash"</button>
                    </form>
                </section>

                <section class="collection-panel">
                    <h3>"My Collection"</h3>
                    <Show
                        when=move || state.with(|s| !s.products().is_empty())
                        fallback=|| {
                            view! {
                                <div class="empty-state">
                                    <p>"Your stash is empty. Add your first product!"</p>
                                </div>
                            }
                        }
                    >
                        <table>
                            <thead>
                                <tr>
                                    <th>"Product"</th>
                                    <th>"Category"</th>
                                    <th>"Rating"</th>
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || state.with(|s| s.products().to_vec())
                                    key=|product| product.id_typed()
                                    children=move |product| {
                                        let id = product.id_typed();
                                        view! {
                                            <tr>
                                                <td>
                                                    <div class="product-name">
                                                        {product.name().to_string()}
                                                    </div>
                                                    <div class="product-brand">
                                                        {product.brand().to_string()}
                                                    </div>
                                                </td>
                                                <td>
                                                    <span class=format!(
                                                        "tag {}",
                                                        product.category().css_class(),
                                                    )>{product.category().label()}</span>
                                                </td>
                                                <td>
                                                    <span class="stars">{star_row(product.rating())}</span>
                                                </td>
                                                <td>
                                                    <button
                                                        class="remove"
                                                        title="Remove Product"
                                                        on:click=move |_| {
                                                            state.update(|s| {
                                                                s.remove(&id);
                                                            });
                                                        }
                                                    >
                                                        "Remove"
                                                    </button>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </Show>
                </section>
            </div>
        </div>
    }
}

/// Exactly `rating` filled stars out of five.
fn star_row(rating: Rating) -> String {
    (1..=5)
        .map(|n| if n <= rating.value() { '★' } else { '☆' })
        .collect()
}
