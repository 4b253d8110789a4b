use leptos::prelude::*;

use crate::shared::cascade::SelectOption;
use crate::shared::icons::icon;

/// Label of the option holding `value`, or the value itself
pub fn option_text(options: &[SelectOption], value: &str) -> String {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label.clone())
        .unwrap_or_else(|| value.to_string())
}

/// `"Campo: texto"` entry when `value` is set
pub fn entry(field: &str, value: &str, text: impl FnOnce() -> String) -> Option<String> {
    (!value.is_empty()).then(|| format!("{}: {}", field, text()))
}

pub fn summary(entries: &[String]) -> Option<String> {
    (!entries.is_empty()).then(|| entries.join(", "))
}

/// Banner listing the filters currently applied to a list
#[component]
pub fn ActiveFiltersIndicator(#[prop(into)] entries: Signal<Vec<String>>) -> impl IntoView {
    view! {
        {move || {
            entries.with(|e| summary(e)).map(|text| view! {
                <div class="active-filters" id="filtros-activos-indicador">
                    {icon("filter")}
                    <strong>"Filtros activos:"</strong>
                    " "
                    <span>{text}</span>
                </div>
            })
        }}
    }
}
