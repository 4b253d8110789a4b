use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::view_model::RegistroAccesoViewModel;
use crate::domain::a002_vivienda::api::{fetch_viviendas, vivienda_options};
use crate::domain::a003_residente::api::{residente_labels, residentes_source};
use crate::shared::cascade::{CascadeConfig, CascadeHandle, SelectOption};
use crate::shared::components::{OptionSelect, TextField};
use crate::shared::csrf::CsrfField;
use crate::shared::notify::Notifier;

/// Visitor registration. The authorising resident list follows the chosen
/// dwelling and only offers active residents.
#[component]
pub fn RegistroAccesoForm() -> impl IntoView {
    let notifier = Notifier::from_context();
    let vm = RegistroAccesoViewModel::new();

    let viviendas = RwSignal::new(vec![SelectOption::new("", "---------")]);
    spawn_local(async move {
        match fetch_viviendas().await {
            Ok(items) => {
                viviendas.try_set(vivienda_options(&items, "---------"));
            }
            Err(e) => {
                log::error!("failed to load dwellings: {}", e);
                notifier.error("No se pudieron cargar las viviendas.");
            }
        }
    });

    let residentes = CascadeHandle::new(
        residentes_source(),
        CascadeConfig::new(residente_labels())
            .exclude_inactive()
            .error_message("Error al cargar residentes. Por favor, inténtelo de nuevo."),
        "",
        "",
    );

    let on_vivienda = Callback::new(move |value: String| {
        vm.vivienda_destino.set(value.clone());
        residentes.parent_changed(value);
        vm.revalidate("vivienda_destino", &vm.snapshot(String::new()));
    });

    let on_residente = Callback::new(move |value: String| {
        residentes.dependent_changed(value.clone());
        vm.revalidate("residente_autoriza", &vm.snapshot(value));
    });

    let revalidate = move |field: &'static str| {
        Callback::new(move |_: String| {
            vm.revalidate(field, &vm.snapshot(residentes.selected_untracked()));
        })
    };

    let on_submit = move |ev: SubmitEvent| {
        let dto = vm.snapshot(residentes.selected_untracked());
        if !vm.validate_all(&dto) {
            ev.prevent_default();
            notifier.warning("Revise los campos marcados antes de registrar la visita.");
            return;
        }
        log::info!("registering visit to dwelling {}", dto.vivienda_destino);
    };

    view! {
        <form method="post" class="form" novalidate=true on:submit=on_submit>
            <CsrfField />
            <TextField
                label="Nombre del visitante"
                name="nombre_visitante"
                value=vm.nombre_visitante
                placeholder="Nombre completo del visitante"
                error=vm.error_for("nombre_visitante")
                on_change=revalidate("nombre_visitante")
                required=true
            />
            <TextField
                label="Documento"
                name="documento_visitante"
                value=vm.documento_visitante
                placeholder="Número de documento"
                error=vm.error_for("documento_visitante")
                on_change=revalidate("documento_visitante")
                required=true
            />
            <OptionSelect
                label="Vivienda destino"
                name="vivienda_destino"
                value=vm.vivienda_destino
                options=viviendas
                on_change=on_vivienda
                invalid=Signal::derive(move || vm.errors.with(|e| e.contains_key("vivienda_destino")))
                required=true
            />
            <OptionSelect
                label="Residente que autoriza"
                name="residente_autoriza"
                value=residentes.selected()
                options=residentes.options()
                disabled=residentes.disabled()
                on_change=on_residente
                invalid=Signal::derive(move || vm.errors.with(|e| e.contains_key("residente_autoriza")))
                required=true
            />
            {move || vm.errors.with(|e| e.get("residente_autoriza").cloned()).map(|e| view! {
                <div class="form__error">{e}</div>
            })}
            <div class="form__group form__group--check">
                <input
                    type="checkbox"
                    id="id_vehiculo"
                    name="vehiculo"
                    class="form__check"
                    prop:checked=move || vm.vehiculo.get()
                    on:change=move |ev| vm.set_vehiculo(event_target_checked(&ev))
                />
                <label class="form__label" for="id_vehiculo">"Ingresa con vehículo"</label>
            </div>
            <Show when=move || vm.vehiculo.get()>
                <div id="div_id_placa_vehiculo">
                    <TextField
                        label="Placa del vehículo"
                        name="placa_vehiculo"
                        value=vm.placa_vehiculo
                        placeholder="Ej: ABC-123"
                        error=vm.error_for("placa_vehiculo")
                        on_change=revalidate("placa_vehiculo")
                        required=true
                    />
                </div>
            </Show>
            <div class="form__actions">
                <button type="submit" class="button button--primary">
                    "Registrar visita"
                </button>
            </div>
        </form>
    }
}
