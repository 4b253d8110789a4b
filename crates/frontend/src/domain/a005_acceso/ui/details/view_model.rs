use contracts::domain::a005_acceso::aggregate::RegistroAccesoDto;
use leptos::prelude::*;

use crate::shared::validation::{
    validate_document_number, validate_person_name, validate_required, FieldErrors,
    REQUIRED_MESSAGE,
};

const MIN_DOCUMENT_LEN: usize = 6;

/// State of the visitor registration form
#[derive(Clone, Copy)]
pub struct RegistroAccesoViewModel {
    pub nombre_visitante: RwSignal<String>,
    pub documento_visitante: RwSignal<String>,
    pub vivienda_destino: RwSignal<String>,
    pub vehiculo: RwSignal<bool>,
    pub placa_vehiculo: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
}

impl RegistroAccesoViewModel {
    pub fn new() -> Self {
        Self {
            nombre_visitante: RwSignal::new(String::new()),
            documento_visitante: RwSignal::new(String::new()),
            vivienda_destino: RwSignal::new(String::new()),
            vehiculo: RwSignal::new(false),
            placa_vehiculo: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
        }
    }

    /// Checking the box shows the plate field; unchecking hides and clears it
    pub fn set_vehiculo(&self, checked: bool) {
        let mut dto = RegistroAccesoDto {
            vehiculo: self.vehiculo.get_untracked(),
            placa_vehiculo: self.placa_vehiculo.get_untracked(),
            ..Default::default()
        };
        dto.set_vehiculo(checked);
        self.vehiculo.set(dto.vehiculo);
        self.placa_vehiculo.set(dto.placa_vehiculo);
        if !checked {
            self.errors.update(|e| {
                e.remove("placa_vehiculo");
            });
        }
    }

    pub fn snapshot(&self, residente_autoriza: String) -> RegistroAccesoDto {
        RegistroAccesoDto {
            nombre_visitante: self.nombre_visitante.get_untracked(),
            documento_visitante: self.documento_visitante.get_untracked(),
            vivienda_destino: self.vivienda_destino.get_untracked(),
            residente_autoriza,
            vehiculo: self.vehiculo.get_untracked(),
            placa_vehiculo: self.placa_vehiculo.get_untracked(),
        }
    }

    /// Re-checks one field after it was edited
    pub fn revalidate(&self, field: &'static str, dto: &RegistroAccesoDto) {
        let found = validate_registro(dto).remove(field);
        self.errors.update(|e| match found {
            Some(message) => {
                e.insert(field, message);
            }
            None => {
                e.remove(field);
            }
        });
    }

    /// Validates everything; true when the form may be sent
    pub fn validate_all(&self, dto: &RegistroAccesoDto) -> bool {
        let errors = validate_registro(dto);
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    }
}

impl Default for RegistroAccesoViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn validate_registro(dto: &RegistroAccesoDto) -> FieldErrors {
    let mut errors = FieldErrors::new();

    let nombre = dto.nombre_visitante.trim();
    if !validate_required(nombre) {
        errors.insert("nombre_visitante", REQUIRED_MESSAGE.to_string());
    } else if !validate_person_name(nombre) {
        errors.insert(
            "nombre_visitante",
            "El nombre solo puede contener letras y espacios.".to_string(),
        );
    } else if nombre.split_whitespace().count() < 2 {
        errors.insert(
            "nombre_visitante",
            "Ingrese nombre y apellido completos".to_string(),
        );
    }

    let documento = dto.documento_visitante.trim();
    if !validate_required(documento) {
        errors.insert("documento_visitante", REQUIRED_MESSAGE.to_string());
    } else if !validate_document_number(documento) {
        errors.insert(
            "documento_visitante",
            "El documento solo puede contener números.".to_string(),
        );
    } else if documento.len() < MIN_DOCUMENT_LEN {
        errors.insert(
            "documento_visitante",
            "El documento debe tener al menos 6 caracteres".to_string(),
        );
    }

    if !validate_required(&dto.vivienda_destino) {
        errors.insert("vivienda_destino", "Seleccione la vivienda destino.".to_string());
    }
    if !validate_required(&dto.residente_autoriza) {
        errors.insert(
            "residente_autoriza",
            "Seleccione el residente que autoriza la visita.".to_string(),
        );
    }
    if dto.vehiculo && !validate_required(&dto.placa_vehiculo) {
        errors.insert(
            "placa_vehiculo",
            "Si ingresa con vehículo, debe especificar la placa".to_string(),
        );
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> RegistroAccesoDto {
        RegistroAccesoDto {
            nombre_visitante: "María Núñez".into(),
            documento_visitante: "12345678".into(),
            vivienda_destino: "4".into(),
            residente_autoriza: "9".into(),
            vehiculo: false,
            placa_vehiculo: String::new(),
        }
    }

    #[test]
    fn complete_registration_passes() {
        assert!(validate_registro(&valid()).is_empty());
    }

    #[test]
    fn single_word_name_is_rejected() {
        let dto = RegistroAccesoDto {
            nombre_visitante: "María".into(),
            ..valid()
        };
        let errors = validate_registro(&dto);
        assert_eq!(
            errors.get("nombre_visitante").map(String::as_str),
            Some("Ingrese nombre y apellido completos")
        );
    }

    #[test]
    fn document_must_be_numeric_and_long_enough() {
        let letters = RegistroAccesoDto {
            documento_visitante: "12AB5678".into(),
            ..valid()
        };
        assert!(validate_registro(&letters).contains_key("documento_visitante"));

        let short = RegistroAccesoDto {
            documento_visitante: "12345".into(),
            ..valid()
        };
        assert_eq!(
            validate_registro(&short).get("documento_visitante").map(String::as_str),
            Some("El documento debe tener al menos 6 caracteres")
        );
    }

    #[test]
    fn vehicle_requires_plate() {
        let dto = RegistroAccesoDto {
            vehiculo: true,
            ..valid()
        };
        assert!(validate_registro(&dto).contains_key("placa_vehiculo"));
    }

    #[test]
    fn missing_selections_are_reported() {
        let dto = RegistroAccesoDto {
            vivienda_destino: String::new(),
            residente_autoriza: String::new(),
            ..valid()
        };
        let errors = validate_registro(&dto);
        assert_eq!(errors.len(), 2);
    }
}
