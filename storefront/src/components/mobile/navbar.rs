use leptos::prelude::*;
use leptos_router::components::A;
use verdant_commerce::cart::badge_label;

use crate::state::use_store;

#[component]
pub fn MobileNavbar() -> impl IntoView {
    let store = use_store();
    let cart_badge = move || store.cart.with(|c| badge_label(c.item_count()));
    let wishlist_badge = move || store.wishlist.with(|w| badge_label(w.len() as i64));

    view! {
        <nav class="mobile-navbar">
            <A href="/">"Home"</A>
            <A href="/shop">"Shop"</A>
            <A href="/wishlist">
                "Wishlist"
                {move || wishlist_badge().map(|b| view! { <span class="nav-badge">{b}</span> })}
            </A>
            <A href="/cart">
                "Cart"
                {move || cart_badge().map(|b| view! { <span class="nav-badge">{b}</span> })}
            </A>
        </nav>
    }
}
