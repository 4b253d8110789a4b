use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

/// Sidebar zone; hidden when `left_open` is off
#[component]
pub fn Left(children: Children) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_open = move || ctx.left_open.get();

    view! {
        <aside
            data-zone="left"
            class="left app-sidebar"
            class:hidden=move || !is_open()
            aria-hidden=move || (!is_open()).to_string()
        >
            {children()}
        </aside>
    }
}
