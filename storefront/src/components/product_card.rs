//! Product tile used by the home, listing and wishlist pages.

use leptos::prelude::*;
use verdant_commerce::catalog::CatalogProduct;

use crate::catalog::Catalog;
use crate::state::{use_store, Toasts};

#[component]
pub fn ProductCard(product: CatalogProduct) -> impl IntoView {
    let store = use_store();
    let catalog = expect_context::<Catalog>();
    let toasts = expect_context::<Toasts>();

    let id = product.id.clone();
    let wish_id = product.id.clone();
    let in_wishlist = {
        let id = product.id.clone();
        Memo::new(move |_| store.wishlist.with(|w| w.contains(&id)))
    };

    let price = product.price.display();
    let old_price = product.old_price.map(|p| p.display());
    let image = product.image.clone().unwrap_or_default();
    let badges = product.card_badges();

    view! {
        <article class="product-card">
            <img src=image alt=product.name.clone() loading="lazy"/>
            <div class="product-card__body">
                <div>
                    {badges.into_iter().map(|b| view! { <span class="badge">{b}</span> }).collect_view()}
                </div>
                <h3>{product.name.clone()}</h3>
                {product.name_ur.clone().map(|name| view! { <p lang="ur">{name}</p> })}
                <p>
                    <strong>{price}</strong>
                    {old_price.map(|p| view! { <span class="price--old">{p}</span> })}
                </p>
                <button type="button" class="btn" on:click=move |_| store.add_to_cart(catalog.products(), &id, toasts)>
                    "Add to cart"
                </button>
                <button
                    type="button"
                    class="btn btn--ghost"
                    aria-pressed=move || in_wishlist.get().to_string()
                    on:click=move |_| store.toggle_wishlist(&wish_id, toasts)
                >
                    {move || if in_wishlist.get() { "\u{2665}" } else { "\u{2661}" }}
                </button>
            </div>
        </article>
    }
}

/// Responsive grid of [`ProductCard`]s.
#[component]
pub fn ProductGrid(products: Vec<CatalogProduct>) -> impl IntoView {
    view! {
        <div class="product-grid">
            {products
                .into_iter()
                .map(|product| view! { <ProductCard product=product/> })
                .collect_view()}
        </div>
    }
}
