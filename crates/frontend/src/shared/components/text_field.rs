use leptos::prelude::*;

/// Labelled `<input>` bound to a signal, with an optional error message
/// rendered under it
#[component]
pub fn TextField(
    #[prop(into)]
    label: String,
    /// Form field name, also used as element id
    #[prop(into)]
    name: String,
    value: RwSignal<String>,
    /// `text`, `email`, `password`, `date`...
    #[prop(optional, into)]
    input_type: MaybeProp<String>,
    #[prop(optional, into)]
    placeholder: MaybeProp<String>,
    /// Message shown when the value is rejected
    #[prop(optional, into)]
    error: MaybeProp<String>,
    /// Called after every keystroke with the new value
    #[prop(optional)]
    on_input: Option<Callback<String>>,
    /// Called when the value is committed (blur, date picked)
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    #[prop(optional)]
    required: bool,
    #[prop(optional, into)]
    help: MaybeProp<String>,
) -> impl IntoView {
    let id = format!("id_{}", name);
    let input_class = move || {
        if error.get().is_some() {
            "form__input is-invalid"
        } else {
            "form__input"
        }
    };

    view! {
        <div class="form__group">
            <label class="form__label" for=id.clone()>
                {label}
                {required.then_some(" *")}
            </label>
            <input
                id=id
                name=name
                class=input_class
                type=move || input_type.get().unwrap_or_else(|| "text".to_string())
                placeholder=move || placeholder.get().unwrap_or_default()
                required=required
                prop:value=move || value.get()
                on:input=move |ev| {
                    let v = event_target_value(&ev);
                    value.set(v.clone());
                    if let Some(handler) = on_input {
                        handler.run(v);
                    }
                }
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            />
            {move || help.get().map(|h| view! { <small class="form__help">{h}</small> })}
            {move || error.get().map(|e| view! { <div class="form__error">{e}</div> })}
        </div>
    }
}
