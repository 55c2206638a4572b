use leptos::prelude::*;

use super::{MobileHeader, MobileNavbar};

#[component]
pub fn MobileLayout(children: Children) -> impl IntoView {
    view! {
        <div class="mobile-layout">
            <MobileHeader/>
            <main class="mobile-main">{children()}</main>
            <MobileNavbar/>
        </div>
    }
}
