//! Application top bar: sidebar toggle and title

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <header class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Ocultar menú" } else { "Mostrar menú" }
                    aria-expanded=move || is_sidebar_visible().to_string()
                >
                    {icon("menu")}
                </button>
                <a class="top-header__title" href="/">"Condominio"</a>
            </div>
            <div class="top-header__actions">
                <a class="top-header__link" href="/perfil/">"Mi perfil"</a>
                <a class="top-header__link" href="/logout/">"Cerrar sesión"</a>
            </div>
        </header>
    }
}
