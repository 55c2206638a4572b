use leptos::prelude::*;
use leptos_router::components::A;

use crate::catalog::Catalog;
use crate::components::product_card::ProductGrid;
use crate::state::use_store;

#[component]
pub fn WishlistPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let store = use_store();

    let products = move || {
        store.wishlist.with(|w| {
            catalog
                .products()
                .iter()
                .filter(|p| w.contains(&p.id))
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <h1>"Wishlist"</h1>
        {move || {
            let products = products();
            if products.is_empty() {
                view! {
                    <p>"Nothing saved yet."</p>
                    <A href="/shop">"Browse products"</A>
                }
                .into_any()
            } else {
                view! { <ProductGrid products=products/> }.into_any()
            }
        }}
    }
}
