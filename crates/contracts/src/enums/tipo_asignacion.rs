use serde::{Deserialize, Serialize};

/// Kind of work assigned to an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoAsignacion {
    Tarea,
    Responsabilidad,
}

impl TipoAsignacion {
    pub fn code(&self) -> &'static str {
        match self {
            TipoAsignacion::Tarea => "TAREA",
            TipoAsignacion::Responsabilidad => "RESPONSABILIDAD",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TipoAsignacion::Tarea => "Tarea puntual",
            TipoAsignacion::Responsabilidad => "Responsabilidad recurrente",
        }
    }

    pub fn all() -> Vec<TipoAsignacion> {
        vec![TipoAsignacion::Tarea, TipoAsignacion::Responsabilidad]
    }
}
