use serde::{Deserialize, Serialize};

/// Occupancy state of a dwelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoVivienda {
    Ocupado,
    Desocupado,
    Mantenimiento,
    Baja,
}

impl EstadoVivienda {
    pub fn code(&self) -> &'static str {
        match self {
            EstadoVivienda::Ocupado => "OCUPADO",
            EstadoVivienda::Desocupado => "DESOCUPADO",
            EstadoVivienda::Mantenimiento => "MANTENIMIENTO",
            EstadoVivienda::Baja => "BAJA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EstadoVivienda::Ocupado => "Ocupado",
            EstadoVivienda::Desocupado => "Desocupado",
            EstadoVivienda::Mantenimiento => "En mantenimiento",
            EstadoVivienda::Baja => "Dado de baja",
        }
    }

    pub fn all() -> Vec<EstadoVivienda> {
        vec![
            EstadoVivienda::Ocupado,
            EstadoVivienda::Desocupado,
            EstadoVivienda::Mantenimiento,
            EstadoVivienda::Baja,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "OCUPADO" => Some(EstadoVivienda::Ocupado),
            "DESOCUPADO" => Some(EstadoVivienda::Desocupado),
            "MANTENIMIENTO" => Some(EstadoVivienda::Mantenimiento),
            "BAJA" => Some(EstadoVivienda::Baja),
            _ => None,
        }
    }
}

impl std::fmt::Display for EstadoVivienda {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}
