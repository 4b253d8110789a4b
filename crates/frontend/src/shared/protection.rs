//! Guards on row actions of the user list.
//!
//! The server refuses to toggle the active state of administrators and
//! managers, so that action is blocked on their rows; deactivating anyone
//! else asks for confirmation first. The permitted actions of every row are
//! recomputed whenever the row set is replaced.

use contracts::system::users::{UsuarioId, UsuarioRow};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RowAction {
    Edit,
    Activate,
    Deactivate,
}

impl RowAction {
    pub fn label(&self) -> &'static str {
        match self {
            RowAction::Edit => "Editar",
            RowAction::Activate => "Activar",
            RowAction::Deactivate => "Desactivar",
        }
    }

    pub fn is_destructive(&self) -> bool {
        matches!(self, RowAction::Deactivate)
    }

    /// Sent to the server as a POST rather than followed as a link
    pub fn is_state_toggle(&self) -> bool {
        matches!(self, RowAction::Activate | RowAction::Deactivate)
    }
}

/// Outcome of asking to run an action on a row
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionGate {
    Proceed,
    Confirm(String),
    Blocked(String),
}

pub const PROTECTED_MESSAGE: &str = "Los usuarios administradores no pueden ser desactivados.";

/// Why the state of `row` cannot be toggled, if it cannot
pub fn locked_reason(row: &UsuarioRow) -> Option<String> {
    if row.is_protected() {
        return Some(PROTECTED_MESSAGE.to_string());
    }
    if row.is_state_locked() {
        let rol = row.rol.as_deref().unwrap_or_default();
        return Some(format!(
            "No se puede cambiar el estado de un usuario con rol '{}'.",
            rol
        ));
    }
    None
}

pub fn gate(row: &UsuarioRow, action: RowAction) -> ActionGate {
    if !action.is_state_toggle() {
        return ActionGate::Proceed;
    }
    if let Some(reason) = locked_reason(row) {
        return ActionGate::Blocked(reason);
    }
    if !action.is_destructive() {
        return ActionGate::Proceed;
    }
    let verb = action.label().to_lowercase();
    ActionGate::Confirm(format!(
        "¿Está seguro de que desea {} al usuario {}?",
        verb, row.username
    ))
}

/// Actions rendered for one row, with disabled ones kept visible
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowActions {
    pub id: UsuarioId,
    pub protected: bool,
    pub locked_reason: Option<String>,
    pub actions: Vec<(RowAction, bool)>,
}

impl RowActions {
    pub fn is_enabled(&self, action: RowAction) -> bool {
        self.actions
            .iter()
            .any(|(a, enabled)| *a == action && *enabled)
    }
}

pub fn row_actions(row: &UsuarioRow) -> RowActions {
    let toggle = if row.activo {
        RowAction::Deactivate
    } else {
        RowAction::Activate
    };
    let actions = [RowAction::Edit, toggle]
        .into_iter()
        .map(|a| (a, !matches!(gate(row, a), ActionGate::Blocked(_))))
        .collect();
    RowActions {
        id: row.id,
        protected: row.is_protected(),
        locked_reason: locked_reason(row),
        actions,
    }
}

/// Called with every freshly loaded row set
pub fn compute_protections(rows: &[UsuarioRow]) -> Vec<RowActions> {
    let out: Vec<RowActions> = rows.iter().map(row_actions).collect();
    log::debug!(
        "protections recomputed: {} rows, {} locked",
        out.len(),
        out.iter().filter(|r| r.locked_reason.is_some()).count()
    );
    out
}

/// Resolves a gate against the user; true when the action may run
pub fn confirm_gate(gate: &ActionGate) -> bool {
    match gate {
        ActionGate::Proceed => true,
        ActionGate::Confirm(message) => crate::shared::notify::confirm(message),
        ActionGate::Blocked(_) => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: i64, rol: &str, activo: bool) -> UsuarioRow {
        UsuarioRow {
            id: UsuarioId(id),
            username: format!("user{}", id),
            nombre_completo: String::new(),
            email: None,
            rol: Some(rol.to_string()),
            activo,
        }
    }

    #[test]
    fn protected_row_cannot_be_deactivated() {
        let admin = row(1, "Administrador", true);
        assert_eq!(
            gate(&admin, RowAction::Deactivate),
            ActionGate::Blocked(PROTECTED_MESSAGE.to_string())
        );
        assert_eq!(gate(&admin, RowAction::Edit), ActionGate::Proceed);

        let actions = row_actions(&admin);
        assert!(actions.protected);
        assert!(actions.is_enabled(RowAction::Edit));
        assert!(!actions.is_enabled(RowAction::Deactivate));
    }

    #[test]
    fn gerente_state_cannot_be_toggled_either_way() {
        let active = row(6, "Gerente", true);
        match gate(&active, RowAction::Deactivate) {
            ActionGate::Blocked(msg) => assert!(msg.contains("'Gerente'")),
            other => panic!("unexpected gate {:?}", other),
        }
        assert!(matches!(
            gate(&row(7, "Gerente", false), RowAction::Activate),
            ActionGate::Blocked(_)
        ));

        let actions = row_actions(&active);
        assert!(!actions.protected);
        assert!(actions.locked_reason.is_some());
        assert!(actions.is_enabled(RowAction::Edit));
        assert!(!actions.is_enabled(RowAction::Deactivate));
    }

    #[test]
    fn deactivation_needs_confirmation() {
        let r = row(2, "Residente", true);
        match gate(&r, RowAction::Deactivate) {
            ActionGate::Confirm(msg) => assert!(msg.contains("desactivar al usuario user2")),
            other => panic!("unexpected gate {:?}", other),
        }
        assert_eq!(gate(&row(3, "Residente", false), RowAction::Activate), ActionGate::Proceed);
    }

    #[test]
    fn rows_offer_no_delete_action() {
        let actions = row_actions(&row(2, "Residente", true));
        let offered: Vec<RowAction> = actions.actions.iter().map(|(a, _)| *a).collect();
        assert_eq!(offered, vec![RowAction::Edit, RowAction::Deactivate]);
    }

    #[test]
    fn inactive_rows_offer_activation() {
        let actions = row_actions(&row(4, "Personal", false));
        assert!(actions.is_enabled(RowAction::Activate));
        assert!(!actions.actions.iter().any(|(a, _)| *a == RowAction::Deactivate));
    }

    #[test]
    fn recomputation_follows_the_new_row_set() {
        let first = compute_protections(&[row(1, "Administrador", true), row(2, "Residente", true)]);
        assert_eq!(first.iter().filter(|r| r.protected).count(), 1);
        let second = compute_protections(&[row(2, "Residente", true), row(5, "Administrador", true)]);
        assert_eq!(second[1].id, UsuarioId(5));
        assert!(second[1].protected);
    }
}
