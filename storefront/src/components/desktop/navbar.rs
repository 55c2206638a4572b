use leptos::prelude::*;
use leptos_router::components::A;
use verdant_client::search::category_url;
use verdant_client::StorefrontConfig;
use verdant_commerce::cart::badge_label;
use verdant_commerce::catalog::category_summaries;

use crate::catalog::Catalog;
use crate::components::search_bar::SearchBar;
use crate::state::use_store;

const NAV_CATEGORY_LIMIT: usize = 6;

#[component]
pub fn DesktopNavbar() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let config = expect_context::<StorefrontConfig>();
    let store = use_store();

    let cart_badge = move || store.cart.with(|c| badge_label(c.item_count()));
    let wishlist_count = move || store.wishlist.with(|w| w.len());

    let quick_links = category_summaries(catalog.products(), NAV_CATEGORY_LIMIT)
        .into_iter()
        .map(|summary| {
            let href = category_url(&config.search.listing_route, &summary.name);
            view! { <A href=href>{summary.name}</A> }
        })
        .collect_view();

    view! {
        <header>
            <nav class="desktop-navbar">
                <A href="/">"Verdant"</A>
                <SearchBar products=catalog.suggestions()/>
                <A href="/wishlist">"Wishlist (" {wishlist_count} ")"</A>
                <A href="/cart">
                    "Cart"
                    {move || cart_badge().map(|b| view! { <span class="nav-badge">{b}</span> })}
                </A>
            </nav>
            <nav class="desktop-categories" aria-label="Categories">
                <A href="/shop">"All products"</A>
                {quick_links}
            </nav>
        </header>
    }
}
