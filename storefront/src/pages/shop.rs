use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

use crate::catalog::Catalog;
use crate::components::product_card::ProductGrid;

/// Listing page driven by `?search=` and `?category=`.
#[component]
pub fn ShopPage() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let query = use_query_map();

    let search = Memo::new(move |_| query.with(|q| q.get("search")));
    let category = Memo::new(move |_| query.with(|q| q.get("category")));

    let heading = move || match (search.get(), category.get()) {
        (Some(s), _) if !s.trim().is_empty() => format!("Results for \"{}\"", s.trim()),
        (_, Some(c)) => c,
        _ => "All products".to_string(),
    };

    let products = move || catalog.listing(search.get().as_deref(), category.get().as_deref());

    view! {
        <h1>{heading}</h1>
        {move || {
            let products = products();
            if products.is_empty() {
                view! { <p class="empty">"No products found."</p> }.into_any()
            } else {
                let count = products.len();
                view! {
                    <p>{count} " products"</p>
                    <ProductGrid products=products/>
                }
                .into_any()
            }
        }}
    }
}
