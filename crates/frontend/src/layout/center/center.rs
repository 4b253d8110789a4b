use leptos::prelude::*;

use crate::shared::components::BackToTop;

/// Main content zone with the "back to top" button
#[component]
pub fn Center(children: Children) -> impl IntoView {
    view! {
        <main data-zone="center" class="app-content" style="flex: 1;">
            {children()}
            <BackToTop />
        </main>
    }
}
