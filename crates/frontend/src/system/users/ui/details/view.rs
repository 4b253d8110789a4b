use contracts::system::users::{UsuarioId, ROLES};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::view_model::{UsuarioDetailsViewModel, UsuarioFormValues};
use crate::domain::a001_edificio::api::load_edificio_options;
use crate::shared::cascade::{CascadeConfig, CascadeHandle, CascadeLabels};
use crate::shared::components::option_select::options_with_all;
use crate::shared::components::{OptionSelect, TextField};
use crate::shared::csrf::CsrfField;
use crate::shared::notify::Notifier;
use crate::shared::validation::validate_password_confirmation;
use crate::system::users::api;

fn vivienda_labels() -> CascadeLabels {
    CascadeLabels::new(
        "---------",
        "Cargando...",
        "Error al cargar viviendas",
        "No hay viviendas disponibles",
    )
}

/// Create form when `id` is `None`, edit form otherwise
#[component]
pub fn UsuarioDetails(id: Option<UsuarioId>) -> impl IntoView {
    let notifier = Notifier::from_context();
    let vm = UsuarioDetailsViewModel::new(id);

    let edificios = RwSignal::new(Vec::new());
    load_edificio_options(edificios, "---------");

    let viviendas = CascadeHandle::new(
        api::viviendas_source(),
        CascadeConfig::new(vivienda_labels())
            .error_message("Error al cargar las viviendas. Por favor, recarga la página."),
        "",
        "",
    );

    vm.load_if_needed(Callback::new(move |values: UsuarioFormValues| {
        viviendas.dependent_changed(values.vivienda);
        viviendas.parent_changed(values.edificio);
    }));

    let values = move || vm.snapshot(viviendas.selected_untracked());

    let revalidate = move |field: &'static str| {
        Callback::new(move |_: String| vm.revalidate(field, &values()))
    };

    // Confirmation is checked on every keystroke of either field
    let check_passwords = Callback::new(move |_: String| {
        let mismatch =
            validate_password_confirmation(&vm.password1.get_untracked(), &vm.password2.get_untracked());
        vm.errors.update(|e| match mismatch {
            Some(message) => {
                e.insert("password2", message.to_string());
            }
            None => {
                e.remove("password2");
            }
        });
    });

    let on_edificio = Callback::new(move |value: String| {
        vm.edificio.set(value.clone());
        viviendas.parent_changed(value);
        vm.revalidate("edificio", &values());
    });

    let on_vivienda = Callback::new(move |value: String| {
        viviendas.dependent_changed(value);
        vm.revalidate("vivienda", &values());
    });

    let on_rol = Callback::new(move |value: String| {
        vm.rol.set(value);
        let current = values();
        for field in ["rol", "edificio", "vivienda", "username", "email"] {
            vm.revalidate(field, &current);
        }
    });

    let on_submit = move |ev: SubmitEvent| {
        if !vm.validate_all(&values()) {
            ev.prevent_default();
            notifier.warning("Corrija los errores del formulario antes de guardar.");
        }
    };

    let role_options = Signal::stored(options_with_all(
        "---------",
        ROLES.iter().map(|r| (*r, *r)),
    ));
    let password_help = vm
        .is_edit_mode()
        .then(|| "Déjelo en blanco para mantener la contraseña actual.".to_string());

    view! {
        <div class="details-container">
            <div class="details-header">
                <h3>
                    {if vm.is_edit_mode() { "Editar usuario" } else { "Nuevo usuario" }}
                </h3>
            </div>

            {move || vm.load_error.get().map(|e| view! { <div class="alert alert--error">{e}</div> })}

            <form method="post" class="form" novalidate=true on:submit=on_submit>
                <CsrfField />
                <TextField
                    label="Nombre de usuario"
                    name="username"
                    value=vm.username
                    error=vm.error_for("username")
                    on_change=revalidate("username")
                />
                <TextField
                    label="Nombre"
                    name="first_name"
                    value=vm.first_name
                    error=vm.error_for("first_name")
                    on_change=revalidate("first_name")
                />
                <TextField
                    label="Apellido"
                    name="last_name"
                    value=vm.last_name
                    error=vm.error_for("last_name")
                    on_change=revalidate("last_name")
                />
                <TextField
                    label="Correo electrónico"
                    name="email"
                    input_type="email"
                    value=vm.email
                    error=vm.error_for("email")
                    on_change=revalidate("email")
                />
                <TextField
                    label="Teléfono"
                    name="telefono"
                    input_type="tel"
                    value=vm.telefono
                    error=vm.error_for("telefono")
                    on_change=revalidate("telefono")
                />
                <TextField
                    label="Cédula"
                    name="numero_documento"
                    value=vm.numero_documento
                    error=vm.error_for("numero_documento")
                    on_change=revalidate("numero_documento")
                />
                <OptionSelect
                    label="Rol"
                    name="rol"
                    value=vm.rol
                    options=role_options
                    on_change=on_rol
                    invalid=vm.has_error("rol")
                    required=true
                />
                <OptionSelect
                    label="Edificio"
                    name="edificio"
                    value=vm.edificio
                    options=edificios
                    on_change=on_edificio
                    invalid=vm.has_error("edificio")
                />
                {move || vm.errors.with(|e| e.get("edificio").cloned()).map(|e| view! { <div class="form__error">{e}</div> })}
                <OptionSelect
                    label="Vivienda (solo para Residente)"
                    name="vivienda"
                    value=viviendas.selected()
                    options=viviendas.options()
                    disabled=viviendas.disabled()
                    on_change=on_vivienda
                    invalid=vm.has_error("vivienda")
                />
                {move || vm.errors.with(|e| e.get("vivienda").cloned()).map(|e| view! { <div class="form__error">{e}</div> })}
                <TextField
                    label="Contraseña"
                    name="password1"
                    input_type="password"
                    value=vm.password1
                    error=vm.error_for("password1")
                    on_input=check_passwords
                    help=password_help
                    required=!vm.is_edit_mode()
                />
                <TextField
                    label="Confirmar contraseña"
                    name="password2"
                    input_type="password"
                    value=vm.password2
                    error=vm.error_for("password2")
                    on_input=check_passwords
                    required=!vm.is_edit_mode()
                />
                <div class="form__actions">
                    <a class="button button--secondary" href="/usuarios/">"Cancelar"</a>
                    <button type="submit" class="button button--primary">"Guardar"</button>
                </div>
            </form>
        </div>
    }
}
