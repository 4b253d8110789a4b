use contracts::domain::a003_residente::aggregate::ResidenteOption;

use crate::shared::cascade::{CascadeLabels, Endpoint, HttpOptionSource};

pub const RESIDENTES_POR_VIVIENDA: Endpoint = Endpoint::new("/api/viviendas/{id}/residentes/");

pub fn residentes_source() -> HttpOptionSource<ResidenteOption> {
    HttpOptionSource::new(RESIDENTES_POR_VIVIENDA)
}

/// Sentinels of the "authorising resident" select
pub fn residente_labels() -> CascadeLabels {
    CascadeLabels::new(
        "---------",
        "Cargando residentes...",
        "Error al cargar residentes",
        "No hay residentes activos",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residents_hang_off_the_dwelling() {
        assert_eq!(RESIDENTES_POR_VIVIENDA.path_for("31"), "/api/viviendas/31/residentes/");
        assert_eq!(residente_labels().empty, "No hay residentes activos");
    }
}
