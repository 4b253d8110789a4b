//! Sidebar with collapsible menu groups. Folded groups are remembered
//! across pages in localStorage.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (href, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "condominio",
            label: "Condominio",
            icon: "building",
            items: vec![
                ("/viviendas/edificios/", "Edificios", "building"),
                ("/viviendas/", "Viviendas", "home"),
                ("/viviendas/residentes/", "Residentes", "residents"),
            ],
        },
        MenuGroup {
            id: "personal",
            label: "Personal",
            icon: "tasks",
            items: vec![
                ("/personal/empleados/", "Empleados", "users"),
                ("/personal/asignaciones/", "Asignaciones", "tasks"),
            ],
        },
        MenuGroup {
            id: "accesos",
            label: "Accesos",
            icon: "door",
            items: vec![
                ("/accesos/visitas/", "Visitas", "door"),
                ("/accesos/visitas/nueva/", "Registrar visita", "door"),
            ],
        },
        MenuGroup {
            id: "administracion",
            label: "Administración",
            icon: "lock",
            items: vec![("/usuarios/", "Usuarios", "users")],
        },
    ]
}

/// A link is active on its own path and below it, except that a deeper
/// menu entry wins over its ancestor
pub fn is_active_link(path: &str, href: &str, all_hrefs: &[&str]) -> bool {
    if !path.starts_with(href) {
        return false;
    }
    !all_hrefs
        .iter()
        .any(|other| other.len() > href.len() && other.starts_with(href) && path.starts_with(other))
}

/// Groups reduced to the links whose label contains `term`, ignoring case.
/// Groups left without links are dropped; an empty term keeps everything.
fn filter_menu(groups: &[MenuGroup], term: &str) -> Vec<MenuGroup> {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return groups.to_vec();
    }
    groups
        .iter()
        .filter_map(|group| {
            let items: Vec<_> = group
                .items
                .iter()
                .filter(|(_, label, _)| label.to_lowercase().contains(&term))
                .copied()
                .collect();
            (!items.is_empty()).then(|| MenuGroup {
                items,
                ..group.clone()
            })
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let path = StoredValue::new(ctx.path.get_value());

    let groups = get_menu_groups();
    let all_hrefs: Vec<&'static str> = groups
        .iter()
        .flat_map(|g| g.items.iter().map(|(href, _, _)| *href))
        .collect();
    let groups = StoredValue::new(groups);
    let all_hrefs = StoredValue::new(all_hrefs);
    let search = RwSignal::new(String::new());
    // Matching groups are shown open while searching, without touching
    // the remembered collapsed state
    let searching = move || !search.with(|s| s.trim().is_empty());

    let render_group = move |group: MenuGroup| {
        let group_id = group.id;
        let links: Vec<(&'static str, &'static str, &'static str, bool)> = group
            .items
            .iter()
            .map(|(href, label, icon_name)| {
                let active = path.with_value(|p| {
                    all_hrefs.with_value(|all| is_active_link(p, href, all))
                });
                (*href, *label, *icon_name, active)
            })
            .collect();
        let links = StoredValue::new(links);
        let is_open = move || searching() || !ctx.is_collapsed(group_id);
        view! {
            <div class="app-sidebar__group">
                <div
                    class="app-sidebar__item"
                    style:padding-left="12px"
                    on:click=move |_| ctx.toggle_section(group_id)
                >
                    <div class="app-sidebar__item-content">
                        {icon(group.icon)}
                        <span>{group.label}</span>
                    </div>
                    <div
                        class="app-sidebar__chevron"
                        class:app-sidebar__chevron--expanded=is_open
                    >
                        {icon("chevron-right")}
                    </div>
                </div>

                <Show when=is_open>
                    <div class="app-sidebar__children">
                        {links.get_value().into_iter().map(|(href, label, icon_name, active)| {
                            view! {
                                <a
                                    href=href
                                    class="app-sidebar__item"
                                    class:app-sidebar__item--active=active
                                    class:app-sidebar__item--match=searching
                                    aria-current=active.then_some("page")
                                    style:padding-left="10px"
                                    on:click=move |_| ctx.link_followed()
                                >
                                    <div class="app-sidebar__item-content">
                                        {icon(icon_name)}
                                        <span>{label}</span>
                                    </div>
                                </a>
                            }
                        }).collect_view()}
                    </div>
                </Show>
            </div>
        }
    };

    view! {
        <nav class="app-sidebar__content">
            <div class="app-sidebar__search">
                <input
                    id="sidebarSearch"
                    type="search"
                    placeholder="Buscar en el menú..."
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            {move || {
                let visible = groups.with_value(|g| search.with(|term| filter_menu(g, term)));
                if visible.is_empty() {
                    view! { <div class="app-sidebar__empty">"Sin resultados"</div> }.into_any()
                } else {
                    visible.into_iter().map(render_group).collect_view().into_any()
                }
            }}
        </nav>
    }
}
