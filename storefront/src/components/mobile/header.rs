use leptos::prelude::*;

use super::MenuModal;
use crate::catalog::Catalog;
use crate::components::search_bar::SearchBar;

#[component]
pub fn MobileHeader() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let search_open = RwSignal::new(false);
    let overlay_open = RwSignal::new(false);
    let menu_open = RwSignal::new(false);

    // Closing the suggestion panel from inside the search also closes the overlay.
    Effect::new(move |was_open: Option<bool>| {
        let open = search_open.get();
        if was_open == Some(true) && !open {
            overlay_open.set(false);
        }
        open
    });

    let products = catalog.suggestions();

    view! {
        <header class="mobile-header">
            <button type="button" aria-label="Open menu" on:click=move |_| menu_open.set(true)>
                "\u{2630}"
            </button>
            <a href="/" class="logo">"Verdant"</a>
            <button
                type="button"
                aria-label="Search"
                on:click=move |_| {
                    overlay_open.set(true);
                    search_open.set(true);
                }
            >
                "\u{1F50D}"
            </button>
        </header>
        <Show when=move || overlay_open.get()>
            <div class="mobile-search-overlay">
                <button type="button" aria-label="Close search" on:click=move |_| overlay_open.set(false)>
                    "\u{2190}"
                </button>
                <SearchBar products=products.clone() open=search_open autofocus=true/>
            </div>
        </Show>
        <MenuModal open=menu_open/>
    }
}
