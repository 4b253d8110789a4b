use serde::{Deserialize, Serialize};

use crate::domain::a001_edificio::aggregate::EdificioId;

crate::int_id!(
    /// Resident identifier
    ResidenteId
);

/// Resident as returned by `/api/viviendas/{id}/residentes/`.
/// Older endpoints send `nombre_completo` instead of `nombre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidenteOption {
    pub id: ResidenteId,
    #[serde(alias = "nombre_completo")]
    pub nombre: String,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

/// Query of the resident list page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResidenteFilter {
    #[serde(default)]
    pub edificio: String,
    #[serde(default)]
    pub vivienda: String,
    #[serde(default)]
    pub es_propietario: String,
    #[serde(default)]
    pub estado: String,
}

impl ResidenteFilter {
    pub fn edificio_id(&self) -> Option<EdificioId> {
        self.edificio.trim().parse().ok().map(EdificioId)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_nombre_completo() {
        let r: ResidenteOption = serde_json::from_str(
            r#"{"id": 9, "nombre_completo": "Ana Pérez", "username": "ana"}"#,
        )
        .unwrap();
        assert_eq!(r.nombre, "Ana Pérez");
        assert!(r.activo);
    }
}
