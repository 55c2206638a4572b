use leptos::prelude::*;
use leptos_router::components::A;
use verdant_client::search::category_url;
use verdant_client::StorefrontConfig;
use verdant_commerce::catalog::category_summaries;

use crate::catalog::Catalog;

const MENU_CATEGORY_LIMIT: usize = 8;

/// Slide-in category menu.
#[component]
pub fn MenuModal(open: RwSignal<bool>) -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let config = expect_context::<StorefrontConfig>();

    let categories = category_summaries(catalog.products(), MENU_CATEGORY_LIMIT)
        .into_iter()
        .map(|summary| {
            let href = category_url(&config.search.listing_route, &summary.name);
            (summary.name.clone(), summary.count_label(), href)
        })
        .collect::<Vec<_>>();

    view! {
        <Show when=move || open.get()>
            <div class="menu-modal" on:click=move |_| open.set(false)>
                <div class="menu-modal__sheet" on:click=|ev| ev.stop_propagation()>
                    <button type="button" aria-label="Close menu" on:click=move |_| open.set(false)>
                        "\u{00d7}"
                    </button>
                    <h2>"Categories"</h2>
                    <ul>
                        {categories
                            .clone()
                            .into_iter()
                            .map(|(name, count, href)| view! {
                                <li on:click=move |_| open.set(false)>
                                    <A href=href>
                                        {name}
                                        " "
                                        <small>{count}</small>
                                    </A>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </div>
            </div>
        </Show>
    }
}
