use leptos::prelude::*;

use crate::shared::cascade::SelectOption;

/// `<select>` over [`SelectOption`]s with label and invalid state
#[component]
pub fn OptionSelect(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Form field name, also used as element id
    #[prop(into)]
    name: String,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional, into)]
    disabled: Signal<bool>,
    #[prop(optional, into)]
    invalid: Signal<bool>,
    #[prop(optional)]
    required: bool,
) -> impl IntoView {
    let id = format!("id_{}", name);
    let label_for = id.clone();
    let select_class = move || {
        if invalid.get() {
            "form__select is-invalid"
        } else {
            "form__select"
        }
    };

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=label_for.clone()>
                    {l}
                </label>
            })}
            <select
                id=id
                name=name
                class=select_class
                disabled=move || disabled.get()
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                // Sentinels share the empty value, so rows are keyed by position
                <For
                    each=move || options.get().into_iter().enumerate()
                    key=|(i, opt)| (*i, opt.value.clone(), opt.label.clone())
                    children=move |(_, opt)| {
                        let current = opt.value.clone();
                        view! {
                            <option
                                value=opt.value
                                disabled=opt.disabled
                                prop:selected=move || value.get() == current
                            >
                                {opt.label}
                            </option>
                        }
                    }
                />
            </select>
        </div>
    }
}

/// Fixed options with an empty "all" entry first
pub fn options_with_all<I, V, L>(all: &str, items: I) -> Vec<SelectOption>
where
    I: IntoIterator<Item = (V, L)>,
    V: Into<String>,
    L: Into<String>,
{
    std::iter::once(SelectOption::new("", all))
        .chain(items.into_iter().map(|(v, l)| SelectOption::new(v, l)))
        .collect()
}
