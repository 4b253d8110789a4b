use contracts::domain::a001_edificio::aggregate::EdificioOption;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::shared::api_utils::{api_url, get_json, FetchError};
use crate::shared::cascade::SelectOption;
use crate::shared::notify::Notifier;

const EDIFICIOS_PATH: &str = "/viviendas/api/edificios/";

/// Fetch all buildings visible to the current user
pub async fn fetch_edificios() -> Result<Vec<EdificioOption>, FetchError> {
    get_json(&api_url(EDIFICIOS_PATH)).await
}

/// Active buildings after an empty-valued first entry
pub fn edificio_options(items: &[EdificioOption], first: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", first))
        .chain(
            items
                .iter()
                .filter(|e| e.activo)
                .map(|e| SelectOption::new(e.id.as_string(), e.nombre.clone())),
        )
        .collect()
}

/// Fills `target` with the building list once it arrives
pub fn load_edificio_options(target: RwSignal<Vec<SelectOption>>, first: &'static str) {
    let notifier = Notifier::from_context();
    target.set(vec![SelectOption::new("", first)]);
    spawn_local(async move {
        match fetch_edificios().await {
            Ok(items) => {
                target.try_set(edificio_options(&items, first));
            }
            Err(e) => {
                log::error!("failed to load buildings: {}", e);
                notifier.error("No se pudieron cargar los edificios.");
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_edificio::aggregate::EdificioId;

    #[test]
    fn inactive_buildings_are_not_offered() {
        let items = vec![
            EdificioOption {
                id: EdificioId(1),
                nombre: "Torre Norte".into(),
                activo: true,
            },
            EdificioOption {
                id: EdificioId(2),
                nombre: "Torre Sur".into(),
                activo: false,
            },
        ];
        let opts = edificio_options(&items, "Todos los edificios");
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[1], SelectOption::new("1", "Torre Norte"));
    }
}
