use contracts::domain::a003_residente::aggregate::ResidenteFilter;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_edificio::api::load_edificio_options;
use crate::domain::a002_vivienda::api::viviendas_source;
use crate::shared::cascade::{CascadeConfig, CascadeHandle, CascadeLabels, SelectOption};
use crate::shared::components::option_select::options_with_all;
use crate::shared::components::{FilterPanel, OptionSelect};
use crate::shared::host_form;
use crate::shared::viewport::auto_submit_for_viewport;

fn tipo_options() -> Vec<SelectOption> {
    options_with_all("Todos", [("true", "Propietarios"), ("false", "Inquilinos")])
}

fn estado_options() -> Vec<SelectOption> {
    options_with_all("Todos", [("activo", "Activos"), ("inactivo", "Inactivos")])
}

/// Filter form of the resident list. Changing dwelling, type or state
/// reloads the list right away on wide screens.
#[component]
pub fn ResidenteListFilter() -> impl IntoView {
    let initial: ResidenteFilter = host_form::read_query();
    let filter = RwSignal::new(initial.clone());
    let is_expanded = RwSignal::new(true);
    let auto_submit = auto_submit_for_viewport(true);

    let edificios = RwSignal::new(Vec::new());
    load_edificio_options(edificios, "Todos los edificios");

    let viviendas = CascadeHandle::new(
        viviendas_source(),
        CascadeConfig::new(CascadeLabels::viviendas())
            .exclude_inactive()
            .auto_submit(auto_submit),
        &initial.edificio,
        &initial.vivienda,
    );

    let submit = Callback::new(move |_: ()| {
        let mut f = filter.get_untracked();
        f.vivienda = viviendas.selected_untracked();
        host_form::submit_filter(&f);
    });

    let on_edificio = Callback::new(move |value: String| {
        filter.update(|f| f.edificio = value.clone());
        viviendas.parent_changed(value);
    });

    let on_select = move |apply: fn(&mut ResidenteFilter, String)| {
        Callback::new(move |value: String| {
            filter.update(|f| apply(f, value));
            if auto_submit {
                submit.run(());
            }
        })
    };

    let vivienda_selected = viviendas.selected();
    let active_count = Signal::derive(move || {
        let f = filter.get();
        let vivienda = vivienda_selected.get();
        [&f.edificio, &vivienda, &f.es_propietario, &f.estado]
            .iter()
            .filter(|v| !v.is_empty())
            .count()
    });

    view! {
        <FilterPanel is_expanded=is_expanded active_filters_count=active_count>
            <div id="filtroForm">
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <OptionSelect
                        label="Edificio"
                        name="edificio"
                        value=Signal::derive(move || filter.with(|f| f.edificio.clone()))
                        options=edificios
                        on_change=on_edificio
                    />
                    <OptionSelect
                        label="Vivienda"
                        name="vivienda"
                        value=viviendas.selected()
                        options=viviendas.options()
                        disabled=viviendas.disabled()
                        on_change=viviendas.on_change_then(submit)
                    />
                    <OptionSelect
                        label="Tipo"
                        name="es_propietario"
                        value=Signal::derive(move || filter.with(|f| f.es_propietario.clone()))
                        options=Signal::stored(tipo_options())
                        on_change=on_select(|f, v| f.es_propietario = v)
                    />
                    <OptionSelect
                        label="Estado"
                        name="estado"
                        value=Signal::derive(move || filter.with(|f| f.estado.clone()))
                        options=Signal::stored(estado_options())
                        on_change=on_select(|f, v| f.estado = v)
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| submit.run(())>
                        "Filtrar"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| host_form::clear_filters()
                    >
                        "Limpiar"
                    </Button>
                </Flex>
            </div>
        </FilterPanel>
    }
}
