use contracts::domain::a002_vivienda::aggregate::{PisoOption, ViviendaOption};

use crate::shared::api_utils::{api_url, get_json, FetchError};
use crate::shared::cascade::{Endpoint, HttpOptionSource, OptionItem, SelectOption};

pub const PISOS_POR_EDIFICIO: Endpoint = Endpoint::new("/viviendas/api/edificio/{id}/pisos/");
pub const VIVIENDAS_POR_EDIFICIO: Endpoint =
    Endpoint::new("/viviendas/api/edificio/{id}/viviendas/");

const VIVIENDAS_PATH: &str = "/viviendas/api/viviendas/";

/// Fetch every dwelling, used where no building narrows the choice
pub async fn fetch_viviendas() -> Result<Vec<ViviendaOption>, FetchError> {
    get_json(&api_url(VIVIENDAS_PATH)).await
}

/// Active dwellings after an empty-valued first entry
pub fn vivienda_options(items: &[ViviendaOption], first: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", first))
        .chain(
            items
                .iter()
                .filter(|v| v.is_active())
                .map(|v| SelectOption::new(v.option_value(), v.option_label())),
        )
        .collect()
}

pub fn pisos_source() -> HttpOptionSource<PisoOption> {
    HttpOptionSource::new(PISOS_POR_EDIFICIO)
}

pub fn viviendas_source() -> HttpOptionSource<ViviendaOption> {
    HttpOptionSource::new(VIVIENDAS_POR_EDIFICIO)
}
