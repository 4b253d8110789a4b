use contracts::domain::common::AggregateId;
use contracts::system::users::UsuarioId;
use leptos::prelude::*;

use crate::domain::a002_vivienda::ui::list::ViviendaListFilter;
use crate::domain::a003_residente::ui::list::ResidenteListFilter;
use crate::domain::a004_asignacion::ui::list::AsignacionListFilter;
use crate::domain::a005_acceso::ui::RegistroAccesoForm;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::sidebar::Sidebar;
use crate::layout::Shell;
use crate::system::users::ui::{UsuarioDetails, UsuariosList};

/// Enhanced page selected from `location.pathname`. Every page is a full
/// server navigation, so this is resolved once at mount.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Page {
    Viviendas,
    Residentes,
    Asignaciones,
    RegistroAcceso,
    Usuarios,
    UsuarioNuevo,
    UsuarioEditar(UsuarioId),
    Other,
}

impl Page {
    pub fn from_path(path: &str) -> Self {
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            ["viviendas"] => Page::Viviendas,
            ["viviendas", "residentes"] => Page::Residentes,
            ["personal", "asignaciones"] => Page::Asignaciones,
            ["accesos", "visitas", "nueva"] => Page::RegistroAcceso,
            ["usuarios"] => Page::Usuarios,
            ["usuarios", "nuevo"] => Page::UsuarioNuevo,
            ["usuarios", id, "editar"] => UsuarioId::from_string(id)
                .map(Page::UsuarioEditar)
                .unwrap_or(Page::Other),
            _ => Page::Other,
        }
    }
}

fn render_page(page: Page) -> AnyView {
    match page {
        Page::Viviendas => view! { <ViviendaListFilter /> }.into_any(),
        Page::Residentes => view! { <ResidenteListFilter /> }.into_any(),
        Page::Asignaciones => view! { <AsignacionListFilter /> }.into_any(),
        Page::RegistroAcceso => view! { <RegistroAccesoForm /> }.into_any(),
        Page::Usuarios => view! { <UsuariosList /> }.into_any(),
        Page::UsuarioNuevo => view! { <UsuarioDetails id=None /> }.into_any(),
        Page::UsuarioEditar(id) => view! { <UsuarioDetails id=Some(id) /> }.into_any(),
        Page::Other => view! {
            <div class="page-placeholder">
                <p>"Seleccione una opción del menú."</p>
            </div>
        }
        .into_any(),
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let page = Page::from_path(&ctx.path.get_value());
    log::debug!("mounting page {:?}", page);

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || render_page(page)
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_resolve() {
        assert_eq!(Page::from_path("/viviendas/"), Page::Viviendas);
        assert_eq!(Page::from_path("/viviendas/residentes/"), Page::Residentes);
        assert_eq!(Page::from_path("/personal/asignaciones"), Page::Asignaciones);
        assert_eq!(Page::from_path("/accesos/visitas/nueva/"), Page::RegistroAcceso);
        assert_eq!(Page::from_path("/usuarios/"), Page::Usuarios);
        assert_eq!(Page::from_path("/usuarios/nuevo/"), Page::UsuarioNuevo);
    }

    #[test]
    fn edit_path_carries_the_id() {
        assert_eq!(
            Page::from_path("/usuarios/12/editar/"),
            Page::UsuarioEditar(UsuarioId(12))
        );
        assert_eq!(Page::from_path("/usuarios/abc/editar/"), Page::Other);
    }

    #[test]
    fn unknown_paths_fall_through() {
        assert_eq!(Page::from_path("/"), Page::Other);
        assert_eq!(Page::from_path("/viviendas/edificios/"), Page::Other);
    }
}
