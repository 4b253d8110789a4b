use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

/// Collapsible card around a list filter form. The header badge shows how
/// many filters are applied, so a folded panel still tells the user the
/// list is narrowed.
#[component]
pub fn FilterPanel(
    #[prop(into)] is_expanded: RwSignal<bool>,
    #[prop(into)] active_filters_count: Signal<usize>,
    children: Children,
) -> impl IntoView {
    let toggle = move || is_expanded.update(|e| *e = !*e);
    let on_key = move |e: ev::KeyboardEvent| {
        if e.key() == "Enter" || e.key() == " " {
            e.prevent_default();
            toggle();
        }
    };

    view! {
        <section class="filter-panel">
            <div
                class="filter-panel-header"
                role="button"
                tabindex="0"
                aria-expanded=move || is_expanded.get().to_string()
                on:click=move |_| toggle()
                on:keydown=on_key
            >
                <span
                    class="filter-panel__chevron"
                    class:filter-panel__chevron--expanded=move || is_expanded.get()
                >
                    {icon("chevron-down")}
                </span>
                {icon("filter")}
                <span class="filter-panel__title">"Filtros"</span>
                <Show when=move || { active_filters_count.get() > 0 }>
                    <span class="badge badge--primary" title="Filtros aplicados">
                        {move || active_filters_count.get()}
                    </span>
                </Show>
            </div>

            <div
                class="filter-panel__collapsible"
                class:filter-panel__collapsible--expanded=move || is_expanded.get()
                class:filter-panel__collapsible--collapsed=move || !is_expanded.get()
            >
                <div class="filter-panel-content">{children()}</div>
            </div>
        </section>
    }
}
