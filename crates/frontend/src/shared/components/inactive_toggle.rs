use leptos::prelude::*;

pub fn toggle_label(showing: bool) -> &'static str {
    if showing {
        "Ocultar inactivos"
    } else {
        "Mostrar inactivos"
    }
}

/// Switch that shows or hides inactive rows of a list
#[component]
pub fn InactiveToggle(
    /// Element id of the checkbox
    #[prop(into)]
    id: String,
    show_inactive: RwSignal<bool>,
) -> impl IntoView {
    let label_for = id.clone();

    view! {
        <div class="form__switch">
            <input
                id=id
                type="checkbox"
                role="switch"
                class="form__checkbox"
                prop:checked=move || show_inactive.get()
                on:change=move |ev| show_inactive.set(event_target_checked(&ev))
            />
            <label class="form__checkbox-label" for=label_for>
                {move || toggle_label(show_inactive.get())}
            </label>
        </div>
    }
}

/// Rows to render given the toggle state
pub fn visible_rows<T, F>(rows: &[T], show_inactive: bool, is_active: F) -> Vec<T>
where
    T: Clone,
    F: Fn(&T) -> bool,
{
    rows.iter()
        .filter(|r| show_inactive || is_active(r))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_describes_next_action() {
        assert_eq!(toggle_label(false), "Mostrar inactivos");
        assert_eq!(toggle_label(true), "Ocultar inactivos");
    }

    #[test]
    fn hidden_inactive_rows() {
        let rows = [(1, true), (2, false), (3, true)];
        assert_eq!(visible_rows(&rows, false, |r| r.1).len(), 2);
        assert_eq!(visible_rows(&rows, true, |r| r.1).len(), 3);
    }
}
