use contracts::domain::common::AggregateId;
use contracts::system::users::{
    UsuarioFormDto, UsuarioId, BUILDING_ROLES, ROLE_PERSONAL, ROLE_RESIDENTE,
};
use leptos::prelude::*;

use crate::shared::validation::{
    validate_document_number, validate_email, validate_password_confirmation,
    validate_person_name, validate_phone, validate_required, FieldErrors, REQUIRED_MESSAGE,
};
use crate::system::users::api;

const MAX_USERNAME_LEN: usize = 150;

/// Plain text values of the user form, as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UsuarioFormValues {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub telefono: String,
    pub numero_documento: String,
    pub rol: String,
    pub edificio: String,
    pub vivienda: String,
    pub password1: String,
    pub password2: String,
}

impl From<&UsuarioFormDto> for UsuarioFormValues {
    fn from(dto: &UsuarioFormDto) -> Self {
        Self {
            username: dto.username.clone(),
            first_name: dto.first_name.clone(),
            last_name: dto.last_name.clone(),
            email: dto.email.clone(),
            telefono: dto.telefono.clone(),
            numero_documento: dto.numero_documento.clone(),
            rol: dto.rol.clone(),
            edificio: dto.edificio.map(|e| e.as_string()).unwrap_or_default(),
            vivienda: dto.vivienda.map(|v| v.as_string()).unwrap_or_default(),
            password1: String::new(),
            password2: String::new(),
        }
    }
}

pub fn validate_usuario(v: &UsuarioFormValues, edit_mode: bool) -> FieldErrors {
    let mut errors = FieldErrors::new();
    let personal = v.rol == ROLE_PERSONAL;

    let username = v.username.trim();
    if username.is_empty() {
        if !personal {
            errors.insert("username", REQUIRED_MESSAGE.to_string());
        }
    } else if username.chars().any(char::is_whitespace) {
        errors.insert(
            "username",
            "El nombre de usuario no debe contener espacios.".to_string(),
        );
    } else if username.chars().count() > MAX_USERNAME_LEN {
        errors.insert(
            "username",
            "El nombre de usuario no debe tener más de 150 caracteres.".to_string(),
        );
    }

    if v.email.trim().is_empty() {
        if !personal {
            errors.insert("email", REQUIRED_MESSAGE.to_string());
        }
    } else if !validate_email(&v.email) {
        errors.insert("email", "Ingrese un correo electrónico válido.".to_string());
    }

    if validate_required(&v.first_name) && !validate_person_name(&v.first_name) {
        errors.insert(
            "first_name",
            "El nombre solo debe contener letras y espacios.".to_string(),
        );
    }
    if validate_required(&v.last_name) && !validate_person_name(&v.last_name) {
        errors.insert(
            "last_name",
            "El apellido solo debe contener letras y espacios.".to_string(),
        );
    }
    if validate_required(&v.telefono) && !validate_phone(&v.telefono) {
        errors.insert(
            "telefono",
            "El teléfono solo debe contener números.".to_string(),
        );
    }
    if validate_required(&v.numero_documento) && !validate_document_number(&v.numero_documento) {
        errors.insert(
            "numero_documento",
            "La Cédula solo debe contener números.".to_string(),
        );
    }

    if !validate_required(&v.rol) {
        errors.insert("rol", REQUIRED_MESSAGE.to_string());
    } else if v.rol == ROLE_RESIDENTE {
        if !validate_required(&v.edificio) {
            errors.insert(
                "edificio",
                "Debes seleccionar un edificio para asignar al Residente.".to_string(),
            );
        }
        if !validate_required(&v.vivienda) {
            errors.insert(
                "vivienda",
                "Debes seleccionar una vivienda para asignar al Residente.".to_string(),
            );
        }
    } else if BUILDING_ROLES.contains(&v.rol.as_str()) && !validate_required(&v.edificio) {
        errors.insert(
            "edificio",
            format!("Debes seleccionar un edificio para asignar al rol {}.", v.rol),
        );
    }

    if !edit_mode && !personal {
        if v.password1.is_empty() {
            errors.insert("password1", REQUIRED_MESSAGE.to_string());
        }
        if v.password2.is_empty() {
            errors.insert("password2", REQUIRED_MESSAGE.to_string());
        }
    }
    if let Some(message) = validate_password_confirmation(&v.password1, &v.password2) {
        errors.insert("password2", message.to_string());
    }

    errors
}

/// State of the create/edit user form
#[derive(Clone, Copy)]
pub struct UsuarioDetailsViewModel {
    pub id: Option<UsuarioId>,
    pub username: RwSignal<String>,
    pub first_name: RwSignal<String>,
    pub last_name: RwSignal<String>,
    pub email: RwSignal<String>,
    pub telefono: RwSignal<String>,
    pub numero_documento: RwSignal<String>,
    pub rol: RwSignal<String>,
    pub edificio: RwSignal<String>,
    pub password1: RwSignal<String>,
    pub password2: RwSignal<String>,
    pub errors: RwSignal<FieldErrors>,
    pub load_error: RwSignal<Option<String>>,
}

impl UsuarioDetailsViewModel {
    pub fn new(id: Option<UsuarioId>) -> Self {
        Self {
            id,
            username: RwSignal::new(String::new()),
            first_name: RwSignal::new(String::new()),
            last_name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            telefono: RwSignal::new(String::new()),
            numero_documento: RwSignal::new(String::new()),
            rol: RwSignal::new(String::new()),
            edificio: RwSignal::new(String::new()),
            password1: RwSignal::new(String::new()),
            password2: RwSignal::new(String::new()),
            errors: RwSignal::new(FieldErrors::new()),
            load_error: RwSignal::new(None),
        }
    }

    pub fn is_edit_mode(&self) -> bool {
        self.id.is_some()
    }

    fn apply(&self, v: &UsuarioFormValues) {
        self.username.set(v.username.clone());
        self.first_name.set(v.first_name.clone());
        self.last_name.set(v.last_name.clone());
        self.email.set(v.email.clone());
        self.telefono.set(v.telefono.clone());
        self.numero_documento.set(v.numero_documento.clone());
        self.rol.set(v.rol.clone());
        self.edificio.set(v.edificio.clone());
    }

    /// Loads the stored values in edit mode; `on_loaded` receives them so
    /// the dwelling list can be restored
    pub fn load_if_needed(&self, on_loaded: Callback<UsuarioFormValues>) {
        let Some(id) = self.id else {
            return;
        };
        let this = *self;
        wasm_bindgen_futures::spawn_local(async move {
            match api::fetch_usuario(id).await {
                Ok(dto) => {
                    let values = UsuarioFormValues::from(&dto);
                    this.apply(&values);
                    on_loaded.run(values);
                }
                Err(e) => {
                    log::error!("failed to load user {}: {}", id, e);
                    this.load_error
                        .set(Some(format!("No se pudo cargar el usuario: {}", e)));
                }
            }
        });
    }

    pub fn snapshot(&self, vivienda: String) -> UsuarioFormValues {
        UsuarioFormValues {
            username: self.username.get_untracked(),
            first_name: self.first_name.get_untracked(),
            last_name: self.last_name.get_untracked(),
            email: self.email.get_untracked(),
            telefono: self.telefono.get_untracked(),
            numero_documento: self.numero_documento.get_untracked(),
            rol: self.rol.get_untracked(),
            edificio: self.edificio.get_untracked(),
            vivienda,
            password1: self.password1.get_untracked(),
            password2: self.password2.get_untracked(),
        }
    }

    pub fn revalidate(&self, field: &'static str, values: &UsuarioFormValues) {
        let found = validate_usuario(values, self.is_edit_mode()).remove(field);
        self.errors.update(|e| match found {
            Some(message) => {
                e.insert(field, message);
            }
            None => {
                e.remove(field);
            }
        });
    }

    pub fn validate_all(&self, values: &UsuarioFormValues) -> bool {
        let errors = validate_usuario(values, self.is_edit_mode());
        let ok = errors.is_empty();
        self.errors.set(errors);
        ok
    }

    pub fn error_for(&self, field: &'static str) -> Signal<Option<String>> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.get(field).cloned()))
    }

    pub fn has_error(&self, field: &'static str) -> Signal<bool> {
        let errors = self.errors;
        Signal::derive(move || errors.with(|e| e.contains_key(field)))
    }
}
