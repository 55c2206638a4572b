use leptos::prelude::*;
use leptos_router::components::A;
use verdant_commerce::cart::CartItem;

use crate::state::{use_store, StoreContext, Toasts};

#[component]
pub fn CartPage() -> impl IntoView {
    let store = use_store();

    let total = move || {
        store.cart.with(|cart| match cart.total() {
            Ok(total) => total.display(),
            Err(e) => {
                tracing::warn!(error = %e, "cart total unavailable");
                "-".to_string()
            }
        })
    };

    view! {
        <h1>"Your cart"</h1>
        {move || {
            let items = store.cart.with(|c| c.items.clone());
            if items.is_empty() {
                view! {
                    <p>"Your cart is empty."</p>
                    <A href="/shop">"Continue shopping"</A>
                }
                .into_any()
            } else {
                view! {
                    <ul class="cart-items">
                        {items.into_iter().map(|item| view! { <CartLine item=item store=store/> }).collect_view()}
                    </ul>
                    <p class="cart-total">
                        <strong>"Total: "</strong>
                        {total}
                    </p>
                    <button type="button" on:click=move |_| store.cart.update(|c| c.clear())>
                        "Clear cart"
                    </button>
                }
                .into_any()
            }
        }}
    }
}

#[component]
fn CartLine(item: CartItem, store: StoreContext) -> impl IntoView {
    let toasts = expect_context::<Toasts>();
    let line_total = item.total().map(|m| m.display()).unwrap_or_default();
    let unit_price = item.unit_price.display();

    let set_quantity = {
        let id = item.product_id.clone();
        move |quantity: i64| {
            let result = store
                .cart
                .try_update(|c| c.update_quantity(&id, quantity))
                .unwrap_or(Ok(()));
            if let Err(e) = result {
                toasts.error(e.to_string());
            }
        }
    };
    let decrement = set_quantity.clone();
    let quantity = item.quantity;
    let remove_id = item.product_id.clone();

    view! {
        <li class="cart-line">
            <img src=item.image.clone().unwrap_or_default() alt=item.name.clone()/>
            <div>
                <strong>{item.name.clone()}</strong>
                <small>{item.size.clone()} " - " {unit_price}</small>
            </div>
            <div class="cart-line__qty">
                <button type="button" aria-label="Decrease quantity" on:click=move |_| decrement(quantity - 1)>
                    "-"
                </button>
                <span>{quantity}</span>
                <button type="button" aria-label="Increase quantity" on:click=move |_| set_quantity(quantity + 1)>
                    "+"
                </button>
            </div>
            <strong>{line_total}</strong>
            <button
                type="button"
                aria-label="Remove item"
                on:click=move |_| {
                    store.cart.update(|c| {
                        c.remove(&remove_id);
                    });
                }
            >
                "\u{00d7}"
            </button>
        </li>
    }
}
