use leptos::prelude::*;

use super::{DesktopNavbar, Footer};

#[component]
pub fn DesktopLayout(children: Children) -> impl IntoView {
    view! {
        <div class="desktop-layout">
            <DesktopNavbar/>
            <main class="desktop-main">{children()}</main>
            <Footer/>
        </div>
    }
}
