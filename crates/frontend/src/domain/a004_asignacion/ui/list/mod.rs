mod state;

use contracts::domain::a004_asignacion::aggregate::AsignacionFilter;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_edificio::api::load_edificio_options;
use crate::domain::a004_asignacion::api;
use crate::shared::cascade::{CascadeConfig, CascadeHandle, CascadeLabels, SelectOption};
use crate::shared::components::{ActiveFiltersIndicator, FilterPanel, OptionSelect, TextField};
use crate::shared::notify::{confirm, Notifier};
use crate::shared::validation::{validate_date_range_today, DateField, DateRangeError};
use crate::shared::viewport::auto_submit_for_viewport;
use crate::shared::{filter_prefs, host_form};
use state::{
    active_filter_entries, estado_options, submit_label, tipo_options, FilterLabels, PREFS_KEY,
    RESET_CONFIRMATION, SUBMIT_FALLBACK_MS, VIVIENDAS_DEBOUNCE_MS,
};

/// Filter form of the assignment list
#[component]
pub fn AsignacionListFilter() -> impl IntoView {
    let notifier = Notifier::from_context();
    let initial: AsignacionFilter = filter_prefs::restore(PREFS_KEY);
    let filter = RwSignal::new(initial.clone());
    let fecha_desde = RwSignal::new(initial.fecha_desde.clone());
    let fecha_hasta = RwSignal::new(initial.fecha_hasta.clone());
    let date_error = RwSignal::new(None::<DateRangeError>);
    let submitting = RwSignal::new(false);
    let is_expanded = RwSignal::new(true);
    let auto_submit = auto_submit_for_viewport(true);

    let edificios = RwSignal::new(Vec::new());
    load_edificio_options(edificios, "Todos los edificios");

    let empleados = RwSignal::new(vec![SelectOption::new("", "Todos los empleados")]);
    spawn_local(async move {
        match api::fetch_empleados().await {
            Ok(items) => {
                empleados.try_set(api::empleado_options(&items));
            }
            Err(e) => {
                log::error!("failed to load employees: {}", e);
                notifier.error("No se pudieron cargar los empleados.");
            }
        }
    });

    let viviendas = CascadeHandle::new(
        api::viviendas_source(),
        CascadeConfig::new(CascadeLabels::viviendas())
            .exclude_inactive()
            .debounce(VIVIENDAS_DEBOUNCE_MS)
            .auto_submit(auto_submit),
        &initial.edificio,
        &initial.vivienda,
    );

    let vivienda_selected = viviendas.selected();
    let current = move || {
        let mut f = filter.get();
        f.vivienda = vivienda_selected.get();
        f.fecha_desde = fecha_desde.get();
        f.fecha_hasta = fecha_hasta.get();
        f
    };

    // Saved from the change handlers only; a dwelling list still loading
    // contributes the dwelling the user intended
    let remember = move || {
        let mut f = filter.get_untracked();
        f.vivienda = viviendas.intended_untracked();
        f.fecha_desde = fecha_desde.get_untracked();
        f.fecha_hasta = fecha_hasta.get_untracked();
        filter_prefs::save(PREFS_KEY, &f);
    };

    let validate_dates = move || -> bool {
        let result = validate_date_range_today(
            &fecha_desde.get_untracked(),
            &fecha_hasta.get_untracked(),
        );
        match result {
            Ok(()) => {
                date_error.set(None);
                true
            }
            Err(e) => {
                notifier.warning(e.to_string());
                date_error.set(Some(e));
                false
            }
        }
    };

    let submit = Callback::new(move |_: ()| {
        if submitting.get_untracked() || !validate_dates() {
            return;
        }
        submitting.set(true);
        let f = untrack(current);
        host_form::submit_filter(&f);
        spawn_local(async move {
            TimeoutFuture::new(SUBMIT_FALLBACK_MS).await;
            submitting.try_set(false);
        });
    });

    let reset = move |_| {
        if untrack(current).has_any() && !confirm(RESET_CONFIRMATION) {
            return;
        }
        filter_prefs::clear(PREFS_KEY);
        host_form::clear_filters();
    };

    let on_edificio = Callback::new(move |value: String| {
        filter.update(|f| f.edificio = value.clone());
        viviendas.parent_changed(value);
        remember();
    });

    let on_vivienda = Callback::new(move |value: String| {
        let submit_now = viviendas.dependent_changed(value);
        remember();
        if submit_now {
            submit.run(());
        }
    });

    let on_select = move |apply: fn(&mut AsignacionFilter, String)| {
        Callback::new(move |value: String| {
            filter.update(|f| apply(f, value));
            remember();
            if auto_submit {
                submit.run(());
            }
        })
    };

    let on_date = Callback::new(move |_: String| {
        remember();
        validate_dates();
    });

    let date_message = move |field: DateField| {
        Signal::derive(move || {
            date_error
                .get()
                .filter(|e| e.marks(field))
                .map(|e| e.to_string())
        })
    };

    let vivienda_options = viviendas.options();
    let entries = Signal::derive(move || {
        let f = current();
        let viviendas_opts = vivienda_options.get();
        edificios.with(|edificios| {
            empleados.with(|empleados| {
                let labels = FilterLabels {
                    edificios,
                    viviendas: &viviendas_opts,
                    empleados,
                };
                active_filter_entries(&f, &labels)
            })
        })
    });
    let active_count = Signal::derive(move || entries.with(|e| e.len()));

    view! {
        <FilterPanel is_expanded=is_expanded active_filters_count=active_count>
            <ActiveFiltersIndicator entries=entries />
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
                        value=vivienda_selected
                        options=vivienda_options
                        disabled=viviendas.disabled()
                        on_change=on_vivienda
                    />
                    <OptionSelect
                        label="Empleado"
                        name="empleado"
                        value=Signal::derive(move || filter.with(|f| f.empleado.clone()))
                        options=empleados
                        on_change=on_select(|f, v| f.empleado = v)
                    />
                    <OptionSelect
                        label="Tipo"
                        name="tipo"
                        value=Signal::derive(move || filter.with(|f| f.tipo.clone()))
                        options=Signal::stored(tipo_options())
                        on_change=on_select(|f, v| f.tipo = v)
                    />
                    <OptionSelect
                        label="Estado"
                        name="estado"
                        value=Signal::derive(move || filter.with(|f| f.estado.clone()))
                        options=Signal::stored(estado_options())
                        on_change=on_select(|f, v| f.estado = v)
                    />
                </Flex>
                <Flex gap=FlexGap::Small align=FlexAlign::End>
                    <TextField
                        label="Desde"
                        name="fecha_desde"
                        input_type="date"
                        value=fecha_desde
                        error=date_message(DateField::Desde)
                        on_change=on_date
                    />
                    <TextField
                        label="Hasta"
                        name="fecha_hasta"
                        input_type="date"
                        value=fecha_hasta
                        error=date_message(DateField::Hasta)
                        on_change=on_date
                    />
                    <Button
                        appearance=ButtonAppearance::Primary
                        disabled=Signal::derive(move || submitting.get())
                        on_click=move |_| submit.run(())
                    >
                        {move || {
                            if submitting.get() {
                                view! { <Spinner size=SpinnerSize::Tiny /> }.into_any()
                            } else {
                                ().into_any()
                            }
                        }}
                        {move || submit_label(submitting.get())}
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=reset>
                        "Limpiar filtros"
                    </Button>
                </Flex>
            </div>
        </FilterPanel>
    }
}
