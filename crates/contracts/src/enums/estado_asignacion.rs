use serde::{Deserialize, Serialize};

/// Progress of an assignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EstadoAsignacion {
    Pendiente,
    EnProgreso,
    Completada,
    Cancelada,
}

impl EstadoAsignacion {
    pub fn code(&self) -> &'static str {
        match self {
            EstadoAsignacion::Pendiente => "PENDIENTE",
            EstadoAsignacion::EnProgreso => "EN_PROGRESO",
            EstadoAsignacion::Completada => "COMPLETADA",
            EstadoAsignacion::Cancelada => "CANCELADA",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EstadoAsignacion::Pendiente => "Pendiente",
            EstadoAsignacion::EnProgreso => "En progreso",
            EstadoAsignacion::Completada => "Completada",
            EstadoAsignacion::Cancelada => "Cancelada",
        }
    }

    pub fn all() -> Vec<EstadoAsignacion> {
        vec![
            EstadoAsignacion::Pendiente,
            EstadoAsignacion::EnProgreso,
            EstadoAsignacion::Completada,
            EstadoAsignacion::Cancelada,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn en_progreso_uses_underscore() {
        assert_eq!(
            serde_json::to_string(&EstadoAsignacion::EnProgreso).unwrap(),
            "\"EN_PROGRESO\""
        );
    }
}
