use contracts::domain::a002_vivienda::aggregate::{PisoOption, ViviendaNombreOption, ViviendaOption};
use contracts::domain::a003_residente::aggregate::ResidenteOption;
use contracts::domain::common::AggregateId;

use super::model::OptionItem;

impl OptionItem for ViviendaOption {
    fn option_value(&self) -> String {
        self.id.as_string()
    }

    fn option_label(&self) -> String {
        format!("{} (Piso {})", self.numero, self.piso)
    }

    fn is_active(&self) -> bool {
        self.activo.unwrap_or(true)
    }
}

impl OptionItem for PisoOption {
    fn option_value(&self) -> String {
        self.0.to_string()
    }

    fn option_label(&self) -> String {
        format!("Piso {}", self.0)
    }
}

impl OptionItem for ViviendaNombreOption {
    fn option_value(&self) -> String {
        self.id.as_string()
    }

    fn option_label(&self) -> String {
        self.nombre.clone()
    }
}

impl OptionItem for ResidenteOption {
    fn option_value(&self) -> String {
        self.id.as_string()
    }

    fn option_label(&self) -> String {
        self.nombre.clone()
    }

    fn is_active(&self) -> bool {
        self.activo
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vivienda_label_shows_floor() {
        let v: ViviendaOption =
            serde_json::from_str(r#"{"id":5,"numero":"3B","piso":2}"#).unwrap();
        assert_eq!(v.option_value(), "5");
        assert_eq!(v.option_label(), "3B (Piso 2)");
        assert!(v.is_active());
    }

    #[test]
    fn explicit_inactive_flag_is_honoured() {
        let v: ViviendaOption =
            serde_json::from_str(r#"{"id":5,"numero":"3B","piso":2,"activo":false}"#).unwrap();
        assert!(!v.is_active());
    }

    #[test]
    fn piso_value_is_the_number() {
        assert_eq!(PisoOption(4).option_value(), "4");
        assert_eq!(PisoOption(4).option_label(), "Piso 4");
    }
}
