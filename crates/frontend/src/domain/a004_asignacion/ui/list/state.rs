use contracts::enums::estado_asignacion::EstadoAsignacion;
use contracts::enums::tipo_asignacion::TipoAsignacion;

use contracts::domain::a004_asignacion::aggregate::AsignacionFilter;

use crate::shared::cascade::SelectOption;
use crate::shared::components::active_filters::{entry, option_text};
use crate::shared::components::option_select::options_with_all;
use crate::shared::date_utils::format_date;

pub const PREFS_KEY: &str = "asignacion_filters";

/// Delay between a building change and the dwelling request
pub const VIVIENDAS_DEBOUNCE_MS: u32 = 300;

/// The submit button re-enables itself after this long in case navigation
/// never happens
pub const SUBMIT_FALLBACK_MS: u32 = 3_000;

pub const RESET_CONFIRMATION: &str = "¿Estás seguro de que quieres limpiar todos los filtros?";

pub fn tipo_options() -> Vec<SelectOption> {
    options_with_all(
        "Todos los tipos",
        TipoAsignacion::all()
            .into_iter()
            .map(|t| (t.code(), t.display_name())),
    )
}

pub fn estado_options() -> Vec<SelectOption> {
    options_with_all(
        "Todos los estados",
        EstadoAsignacion::all()
            .into_iter()
            .map(|e| (e.code(), e.display_name())),
    )
}

pub fn submit_label(submitting: bool) -> &'static str {
    if submitting {
        "Filtrando..."
    } else {
        "Filtrar"
    }
}

/// Option lists the summary resolves labels from
pub struct FilterLabels<'a> {
    pub edificios: &'a [SelectOption],
    pub viviendas: &'a [SelectOption],
    pub empleados: &'a [SelectOption],
}

pub fn active_filter_entries(f: &AsignacionFilter, labels: &FilterLabels<'_>) -> Vec<String> {
    let tipos = tipo_options();
    let estados = estado_options();
    [
        entry("Edificio", &f.edificio, || option_text(labels.edificios, &f.edificio)),
        entry("Vivienda", &f.vivienda, || option_text(labels.viviendas, &f.vivienda)),
        entry("Empleado", &f.empleado, || option_text(labels.empleados, &f.empleado)),
        entry("Tipo", &f.tipo, || option_text(&tipos, &f.tipo)),
        entry("Estado", &f.estado, || option_text(&estados, &f.estado)),
        entry("Desde", &f.fecha_desde, || format_date(&f.fecha_desde)),
        entry("Hasta", &f.fecha_hasta, || format_date(&f.fecha_hasta)),
    ]
    .into_iter()
    .flatten()
    .collect()
}
