use leptos::prelude::*;

use crate::state::{ToastKind, Toasts};

#[component]
pub fn ToastStack() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="toasts" aria-live="polite">
            <For each=move || toasts.items().get() key=|toast| toast.id let:toast>
                <div
                    class="toast"
                    class:toast--error={toast.kind == ToastKind::Error}
                    on:click=move |_| toasts.dismiss(toast.id)
                >
                    {toast.message.clone()}
                </div>
            </For>
        </div>
    }
}
