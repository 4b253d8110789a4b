use contracts::domain::a002_vivienda::aggregate::ViviendaFilter;
use contracts::enums::estado_vivienda::EstadoVivienda;

use crate::shared::cascade::SelectOption;
use crate::shared::components::active_filters::entry;
use crate::shared::components::option_select::options_with_all;

pub const PREFS_KEY: &str = "viviendas_filtros_preferencias";

pub fn estado_options() -> Vec<SelectOption> {
    options_with_all(
        "Todos los estados",
        EstadoVivienda::all()
            .into_iter()
            .map(|e| (e.code(), e.display_name())),
    )
}

pub fn activo_options() -> Vec<SelectOption> {
    vec![
        SelectOption::new("true", "Solo activas"),
        SelectOption::new("false", "Solo inactivas"),
        SelectOption::new("", "Todas"),
    ]
}

fn activo_text(activo: &str) -> &'static str {
    match activo {
        "false" => "Solo inactivas",
        _ => "Todas",
    }
}

/// Lines of the "Filtros activos" banner. `activo=true` is the default and
/// is not reported.
pub fn active_filter_entries(f: &ViviendaFilter, piso: &str, edificio_text: &str) -> Vec<String> {
    let estado_text = || {
        EstadoVivienda::from_code(&f.estado)
            .map(|e| e.display_name().to_string())
            .unwrap_or_else(|| f.estado.clone())
    };
    let situacion = (f.activo != "true").then(|| format!("Situación: {}", activo_text(&f.activo)));

    [
        entry("Edificio", &f.edificio, || edificio_text.to_string()),
        entry("Piso", piso, || piso.to_string()),
        entry("Estado", &f.estado, estado_text),
        situacion,
    ]
    .into_iter()
    .flatten()
    .collect()
}
