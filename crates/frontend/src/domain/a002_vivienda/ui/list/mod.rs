mod state;

use contracts::domain::a002_vivienda::aggregate::{EstadoActivoSource, ViviendaFilter};
use leptos::ev;
use leptos::prelude::*;
use thaw::*;

use crate::domain::a001_edificio::api::load_edificio_options;
use crate::domain::a002_vivienda::api;
use crate::shared::cascade::{CascadeConfig, CascadeHandle, CascadeLabels};
use crate::shared::components::active_filters::option_text;
use crate::shared::components::{ActiveFiltersIndicator, FilterPanel, OptionSelect};
use crate::shared::{filter_prefs, host_form};
use state::{active_filter_entries, activo_options, estado_options, PREFS_KEY};

/// Filter form of the dwelling list. Nothing is submitted until
/// "Aplicar filtros" is pressed; Escape drops every filter.
///
/// The controls mirror the query the list was rendered with. Preferences
/// are written on apply but never read back here.
#[component]
pub fn ViviendaListFilter() -> impl IntoView {
    let initial: ViviendaFilter = host_form::read_query();
    let filter = RwSignal::new(initial.clone());
    let is_expanded = RwSignal::new(true);

    let edificios = RwSignal::new(Vec::new());
    load_edificio_options(edificios, "Todos los edificios");

    let pisos = CascadeHandle::new(
        api::pisos_source(),
        CascadeConfig::new(CascadeLabels::pisos()),
        &initial.edificio,
        &initial.piso,
    );

    let on_edificio = Callback::new(move |value: String| {
        filter.update(|f| f.edificio = value.clone());
        pisos.parent_changed(value);
    });

    let on_estado = Callback::new(move |value: String| {
        filter.update(|f| {
            f.estado = value;
            f.sync_estado_activo(EstadoActivoSource::Estado);
        });
    });

    let on_activo = Callback::new(move |value: String| {
        filter.update(|f| {
            f.activo = value;
            f.sync_estado_activo(EstadoActivoSource::Activo);
        });
    });

    let current = move || {
        let mut f = filter.get_untracked();
        f.piso = pisos.selected_untracked();
        f
    };

    let apply = move || {
        let f = current();
        filter_prefs::save(PREFS_KEY, &f);
        host_form::submit_filter(&f);
    };

    let escape = window_event_listener(ev::keydown, move |e| {
        if e.key() == "Escape" {
            host_form::clear_filters();
        }
    });
    on_cleanup(move || escape.remove());

    let piso_selected = pisos.selected();
    let entries = Signal::derive(move || {
        let f = filter.get();
        let piso = piso_selected.get();
        let edificio_text = edificios.with(|opts| option_text(opts, &f.edificio));
        active_filter_entries(&f, &piso, &edificio_text)
    });
    let active_count = Signal::derive(move || entries.with(|e| e.len()));

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
                        label="Piso"
                        name="piso"
                        value=pisos.selected()
                        options=pisos.options()
                        disabled=pisos.disabled()
                        on_change=pisos.on_change()
                    />
                    <OptionSelect
                        label="Estado"
                        name="estado"
                        value=Signal::derive(move || filter.with(|f| f.estado.clone()))
                        options=Signal::stored(estado_options())
                        on_change=on_estado
                    />
                    <OptionSelect
                        label="Situación"
                        name="activo"
                        value=Signal::derive(move || filter.with(|f| f.activo.clone()))
                        options=Signal::stored(activo_options())
                        on_change=on_activo
                    />
                    <Button appearance=ButtonAppearance::Primary on_click=move |_| apply()>
                        "Aplicar filtros"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| host_form::clear_filters()
                    >
                        "Limpiar"
                    </Button>
                </Flex>
                <ActiveFiltersIndicator entries=entries />
            </div>
        </FilterPanel>
    }
}
