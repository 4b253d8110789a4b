use contracts::system::users::{UsuarioId, UsuarioRow};
use leptos::prelude::*;

use crate::shared::components::inactive_toggle::visible_rows;
use crate::shared::protection::{compute_protections, RowActions};

#[derive(Clone, Debug, Default)]
pub struct UsuariosListState {
    pub rows: Vec<UsuarioRow>,
    pub protections: Vec<RowActions>,
    pub search_query: String,
    pub show_inactive: bool,
    pub is_loaded: bool,
}

impl UsuariosListState {
    /// Swaps in a freshly loaded row set; protections always follow it
    pub fn replace_rows(&mut self, rows: Vec<UsuarioRow>) {
        self.protections = compute_protections(&rows);
        self.rows = rows;
        self.is_loaded = true;
    }

    pub fn actions_for(&self, id: UsuarioId) -> Option<&RowActions> {
        self.protections.iter().find(|p| p.id == id)
    }

    /// Rows after the inactive toggle and the search box
    pub fn visible(&self) -> Vec<UsuarioRow> {
        let query = self.search_query.trim().to_lowercase();
        let mut rows = visible_rows(&self.rows, self.show_inactive, |r| r.activo);
        if !query.is_empty() {
            rows.retain(|u| {
                u.username.to_lowercase().contains(&query)
                    || u.nombre_completo.to_lowercase().contains(&query)
                    || u
                        .email
                        .as_deref()
                        .unwrap_or("")
                        .to_lowercase()
                        .contains(&query)
            });
        }
        rows
    }
}

pub fn create_state() -> RwSignal<UsuariosListState> {
    RwSignal::new(UsuariosListState::default())
}
