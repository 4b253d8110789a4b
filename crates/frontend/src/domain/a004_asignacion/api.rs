use contracts::domain::a002_vivienda::aggregate::ViviendaOption;
use contracts::domain::a004_asignacion::aggregate::EmpleadoOption;
use contracts::domain::common::AggregateId;

use crate::shared::api_utils::{api_url, get_json, FetchError};
use crate::shared::cascade::{Endpoint, HttpOptionSource, SelectOption};

pub const VIVIENDAS_POR_EDIFICIO: Endpoint =
    Endpoint::new("/personal/api/viviendas-por-edificio/?edificio_id={id}");

const EMPLEADOS_PATH: &str = "/personal/api/empleados/";

pub fn viviendas_source() -> HttpOptionSource<ViviendaOption> {
    HttpOptionSource::new(VIVIENDAS_POR_EDIFICIO)
}

pub async fn fetch_empleados() -> Result<Vec<EmpleadoOption>, FetchError> {
    get_json(&api_url(EMPLEADOS_PATH)).await
}

pub fn empleado_options(items: &[EmpleadoOption]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::new("", "Todos los empleados"))
        .chain(
            items
                .iter()
                .map(|e| SelectOption::new(e.id.as_string(), e.nombre.clone())),
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn query_parameter_template() {
        assert_eq!(
            VIVIENDAS_POR_EDIFICIO.path_for("4"),
            "/personal/api/viviendas-por-edificio/?edificio_id=4"
        );
    }

    #[test]
    fn employees_follow_all_entry() {
        let items: Vec<EmpleadoOption> =
            serde_json::from_str(r#"[{"id": 2, "nombre_completo": "Luis Rojas"}]"#).unwrap();
        let opts = empleado_options(&items);
        assert_eq!(opts.len(), 2);
        assert_eq!(opts[1], SelectOption::new("2", "Luis Rojas"));
    }
}
