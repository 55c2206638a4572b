use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="desktop-footer">
            <p>"Verdant - natural oils, honey, teas and herbs, delivered across Pakistan."</p>
            <p>"Cash on delivery available. Free shipping on orders over Rs 3,000."</p>
        </footer>
    }
}
