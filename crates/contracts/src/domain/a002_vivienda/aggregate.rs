use serde::{Deserialize, Serialize};

use crate::domain::a001_edificio::aggregate::EdificioId;
use crate::enums::estado_vivienda::EstadoVivienda;

crate::int_id!(
    /// Dwelling identifier
    ViviendaId
);

/// Dwelling as returned by `/viviendas/api/edificio/{id}/viviendas/`
/// and `/personal/api/viviendas-por-edificio/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViviendaOption {
    pub id: ViviendaId,
    pub numero: String,
    pub piso: i32,
    /// Some endpoints omit the flag; absent means active
    #[serde(default)]
    pub activo: Option<bool>,
    #[serde(default)]
    pub estado_code: Option<String>,
}

/// Floor number; the floors endpoint returns a bare JSON array of integers
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PisoOption(pub i32);

/// Dwelling as returned by `/usuarios/ajax/cargar-viviendas/`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViviendaNombreOption {
    pub id: ViviendaId,
    pub nombre: String,
}

/// Query of the dwelling list page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViviendaFilter {
    #[serde(default)]
    pub edificio: String,
    #[serde(default)]
    pub piso: String,
    #[serde(default)]
    pub estado: String,
    #[serde(default = "default_activo")]
    pub activo: String,
}

fn default_activo() -> String {
    "true".to_string()
}

impl Default for ViviendaFilter {
    fn default() -> Self {
        Self {
            edificio: String::new(),
            piso: String::new(),
            estado: String::new(),
            activo: default_activo(),
        }
    }
}

/// Which of the two linked controls the user touched last
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoActivoSource {
    Estado,
    Activo,
}

impl ViviendaFilter {
    pub fn edificio_id(&self) -> Option<EdificioId> {
        self.edificio.trim().parse().ok().map(EdificioId)
    }

    /// Keeps `estado` and `activo` consistent: a dwelling "dado de baja" is
    /// never active, and an inactive dwelling can only be in `BAJA`.
    /// The control the user just changed wins.
    pub fn sync_estado_activo(&mut self, source: EstadoActivoSource) {
        let baja = EstadoVivienda::Baja.code();
        match source {
            EstadoActivoSource::Estado => {
                if self.estado == baja {
                    self.activo = "false".to_string();
                } else if !self.estado.is_empty() && self.activo == "false" {
                    self.activo = "true".to_string();
                }
            }
            EstadoActivoSource::Activo => {
                if self.activo == "false" && !self.estado.is_empty() && self.estado != baja {
                    self.estado = baja.to_string();
                } else if self.activo == "true" && self.estado == baja {
                    self.estado.clear();
                }
            }
        }
    }

    /// Number of filters differing from the defaults
    pub fn active_count(&self) -> usize {
        [
            !self.edificio.is_empty(),
            !self.piso.is_empty(),
            !self.estado.is_empty(),
            !self.activo.is_empty() && self.activo != "true",
        ]
        .iter()
        .filter(|set| **set)
        .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_dwelling_without_flags() {
        let items: Vec<ViviendaOption> =
            serde_json::from_str(r#"[{"id":5,"numero":"3B","piso":2}]"#).unwrap();
        assert_eq!(items[0].id, ViviendaId(5));
        assert_eq!(items[0].activo, None);
    }

    #[test]
    fn floors_are_bare_integers() {
        let floors: Vec<PisoOption> = serde_json::from_str("[1, 2, 5]").unwrap();
        assert_eq!(floors, vec![PisoOption(1), PisoOption(2), PisoOption(5)]);
    }

    #[test]
    fn baja_forces_inactive() {
        let mut f = ViviendaFilter {
            estado: "BAJA".into(),
            ..Default::default()
        };
        f.sync_estado_activo(EstadoActivoSource::Estado);
        assert_eq!(f.activo, "false");
    }

    #[test]
    fn inactive_forces_baja_unless_estado_empty() {
        let mut f = ViviendaFilter {
            estado: "OCUPADO".into(),
            activo: "false".into(),
            ..Default::default()
        };
        f.sync_estado_activo(EstadoActivoSource::Activo);
        assert_eq!(f.estado, "BAJA");

        let mut empty = ViviendaFilter {
            activo: "false".into(),
            ..Default::default()
        };
        empty.sync_estado_activo(EstadoActivoSource::Activo);
        assert_eq!(empty.estado, "");
    }

    #[test]
    fn leaving_baja_reactivates() {
        let mut f = ViviendaFilter {
            estado: "OCUPADO".into(),
            activo: "false".into(),
            ..Default::default()
        };
        f.sync_estado_activo(EstadoActivoSource::Estado);
        assert_eq!(f.activo, "true");

        let mut g = ViviendaFilter {
            estado: "BAJA".into(),
            activo: "true".into(),
            ..Default::default()
        };
        g.sync_estado_activo(EstadoActivoSource::Activo);
        assert_eq!(g.estado, "");
    }

    #[test]
    fn default_activo_is_not_counted() {
        assert_eq!(ViviendaFilter::default().active_count(), 0);
        let f = ViviendaFilter {
            edificio: "2".into(),
            activo: "false".into(),
            ..Default::default()
        };
        assert_eq!(f.active_count(), 2);
    }
}
