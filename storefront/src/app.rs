//! Root component and routes.

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use verdant_client::StorefrontConfig;

use crate::catalog::Catalog;
use crate::components::toast::ToastStack;
use crate::device::DeviceManager;
use crate::pages::{CartPage, HomePage, NotFound, ShopPage, WishlistPage};
use crate::state::Toasts;

const EMBEDDED_CONFIG: &str = include_str!("../storefront.toml");

/// Parse the embedded `storefront.toml`, falling back to defaults.
pub fn load_config() -> StorefrontConfig {
    StorefrontConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|e| {
        leptos::logging::warn!("invalid storefront.toml, using defaults: {e}");
        StorefrontConfig::default()
    })
}

#[component]
pub fn App(config: StorefrontConfig) -> impl IntoView {
    provide_meta_context();
    provide_context(config);
    provide_context(Catalog::demo());
    provide_context(Toasts::new());

    view! {
        <Title text="Verdant - Natural Foods & Remedies"/>
        <Meta name="description" content="Organic oils, honey, teas and herbal remedies"/>

        <Router>
            <DeviceManager>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("") view=HomePage/>
                    <Route path=path!("/shop") view=ShopPage/>
                    <Route path=path!("/cart") view=CartPage/>
                    <Route path=path!("/wishlist") view=WishlistPage/>
                </Routes>
            </DeviceManager>
            <ToastStack/>
        </Router>
    }
}
