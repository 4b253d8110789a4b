use serde::{Deserialize, Serialize};

use crate::domain::a001_edificio::aggregate::EdificioId;
use crate::domain::a002_vivienda::aggregate::ViviendaId;

crate::int_id!(
    /// User identifier
    UsuarioId
);

/// Role whose members can never be deleted or deactivated from the UI
pub const PROTECTED_ROLE: &str = "Administrador";

/// Roles whose active state the server refuses to toggle
pub const STATE_LOCKED_ROLES: [&str; 2] = ["Administrador", "Gerente"];

/// Every role a user can be given
pub const ROLES: [&str; 5] = ["Administrador", "Gerente", "Vigilante", "Residente", "Personal"];

/// Staff without a login: username, e-mail and password are optional
pub const ROLE_PERSONAL: &str = "Personal";

/// Role tied to a dwelling
pub const ROLE_RESIDENTE: &str = "Residente";

/// Roles tied to a building
pub const BUILDING_ROLES: [&str; 2] = ["Gerente", "Vigilante"];

/// Row of the user list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsuarioRow {
    pub id: UsuarioId,
    pub username: String,
    #[serde(default)]
    pub nombre_completo: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub rol: Option<String>,
    pub activo: bool,
}

impl UsuarioRow {
    pub fn is_protected(&self) -> bool {
        self.rol.as_deref() == Some(PROTECTED_ROLE)
    }

    /// Activation and deactivation are refused for these rows
    pub fn is_state_locked(&self) -> bool {
        self.rol
            .as_deref()
            .is_some_and(|rol| STATE_LOCKED_ROLES.contains(&rol))
    }
}

/// Create/update form of a user. Passwords are optional in edit mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UsuarioFormDto {
    pub id: Option<UsuarioId>,
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telefono: String,
    pub numero_documento: String,
    pub rol: String,
    pub edificio: Option<EdificioId>,
    pub vivienda: Option<ViviendaId>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password1: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub password2: String,
}

impl UsuarioFormDto {
    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(rol: Option<&str>) -> UsuarioRow {
        UsuarioRow {
            id: UsuarioId(1),
            username: "u".into(),
            nombre_completo: String::new(),
            email: None,
            rol: rol.map(str::to_string),
            activo: true,
        }
    }

    #[test]
    fn only_administrador_is_protected() {
        assert!(row(Some("Administrador")).is_protected());
        assert!(!row(Some("Gerente")).is_protected());
        assert!(!row(Some("administrador")).is_protected());
        assert!(!row(None).is_protected());
    }

    #[test]
    fn gerente_state_is_locked_but_not_protected() {
        let gerente = row(Some("Gerente"));
        assert!(gerente.is_state_locked());
        assert!(!gerente.is_protected());
        assert!(row(Some("Administrador")).is_state_locked());
        assert!(!row(Some("Vigilante")).is_state_locked());
        assert!(!row(None).is_state_locked());
    }

    #[test]
    fn empty_passwords_are_not_sent() {
        let dto = UsuarioFormDto {
            id: Some(UsuarioId(4)),
            username: "ana".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(&dto).unwrap();
        assert!(json.get("password1").is_none());
        assert!(dto.is_edit_mode());
    }
}
