use leptos::prelude::*;
use leptos_router::components::A;
use verdant_commerce::catalog::{category_summaries, HomeTab};

use crate::catalog::Catalog;
use crate::components::product_card::ProductGrid;
use crate::device::DeviceContent;

const MOBILE_TAB_LIMIT: usize = 8;
const DESKTOP_SECTION_LIMIT: usize = 4;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <DeviceContent
            mobile=|| view! { <MobileHome/> }
            desktop=|| view! { <DesktopHome/> }
        />
    }
}

/// Tabbed product list.
#[component]
fn MobileHome() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let active = RwSignal::new(HomeTab::All);

    let mut tabs = vec![
        (HomeTab::All, "All".to_string()),
        (HomeTab::New, "New".to_string()),
        (HomeTab::BestSellers, "Best Sellers".to_string()),
    ];
    tabs.extend(
        category_summaries(catalog.products(), 4)
            .into_iter()
            .map(|summary| (HomeTab::Category(summary.name.clone()), summary.name)),
    );

    let products = move || {
        active.with(|tab| {
            tab.filter(catalog.products(), MOBILE_TAB_LIMIT)
                .into_iter()
                .cloned()
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|(tab, label)| {
                    let selected = {
                        let tab = tab.clone();
                        move || active.with(|a| *a == tab)
                    };
                    view! {
                        <button
                            type="button"
                            role="tab"
                            class:active=selected.clone()
                            aria-selected=move || selected().to_string()
                            on:click=move |_| active.set(tab.clone())
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
        {move || view! { <ProductGrid products=products()/> }}
    }
}

/// Hero banner with best-seller and new-arrival sections.
#[component]
fn DesktopHome() -> impl IntoView {
    let catalog = expect_context::<Catalog>();
    let section = |tab: HomeTab| {
        tab.filter(catalog.products(), DESKTOP_SECTION_LIMIT)
            .into_iter()
            .cloned()
            .collect::<Vec<_>>()
    };
    let best_sellers = section(HomeTab::BestSellers);
    let new_arrivals = section(HomeTab::New);

    view! {
        <section class="hero">
            <h1>"Pure, natural, delivered"</h1>
            <p>"Cold pressed oils, raw honey and herbal teas from trusted farms."</p>
            <A href="/shop">"Shop now"</A>
        </section>
        <section>
            <h2>"Best sellers"</h2>
            <ProductGrid products=best_sellers/>
        </section>
        <section>
            <h2>"New arrivals"</h2>
            <ProductGrid products=new_arrivals/>
        </section>
    }
}
