use serde::{Deserialize, Serialize};

crate::int_id!(
    /// Building identifier
    EdificioId
);

/// Building entry used to populate parent controls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdificioOption {
    pub id: EdificioId,
    pub nombre: String,
    #[serde(default = "default_true")]
    pub activo: bool,
}

fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_activo_defaults_to_active() {
        let item: EdificioOption =
            serde_json::from_str(r#"{"id": 3, "nombre": "Torre Norte"}"#).unwrap();
        assert_eq!(item.id, EdificioId(3));
        assert!(item.activo);
    }
}
