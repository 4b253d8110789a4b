use serde::{Deserialize, Serialize};

use crate::domain::a001_edificio::aggregate::EdificioId;

crate::int_id!(
    /// Employee identifier
    EmpleadoId
);

/// Employee entry for the assignment filter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmpleadoOption {
    pub id: EmpleadoId,
    #[serde(alias = "nombre_completo")]
    pub nombre: String,
}

/// Query of the assignment list page. Dates are `yyyy-mm-dd` as produced by
/// `<input type="date">`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AsignacionFilter {
    #[serde(default)]
    pub edificio: String,
    #[serde(default)]
    pub vivienda: String,
    #[serde(default)]
    pub empleado: String,
    #[serde(default)]
    pub tipo: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default)]
    pub fecha_desde: String,
    #[serde(default)]
    pub fecha_hasta: String,
}

impl AsignacionFilter {
    pub fn edificio_id(&self) -> Option<EdificioId> {
        self.edificio.trim().parse().ok().map(EdificioId)
    }

    pub fn has_any(&self) -> bool {
        [
            &self.edificio,
            &self.vivienda,
            &self.empleado,
            &self.tipo,
            &self.estado,
            &self.fecha_desde,
            &self.fecha_hasta,
        ]
        .iter()
        .any(|v| !v.is_empty())
    }
}
