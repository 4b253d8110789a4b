use leptos::ev;
use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::shared::icons::icon;

/// Scroll offset after which the button appears
pub const SHOW_AFTER_PX: f64 = 300.0;

pub fn is_past_threshold(scroll_y: f64) -> bool {
    scroll_y > SHOW_AFTER_PX
}

fn scroll_to_top() {
    let Some(w) = web_sys::window() else { return };
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    w.scroll_to_with_scroll_to_options(&opts);
}

/// Floating "back to top" button for long lists
#[component]
pub fn BackToTop() -> impl IntoView {
    let visible = RwSignal::new(false);

    let handle = window_event_listener(ev::scroll, move |_| {
        let y = web_sys::window()
            .and_then(|w| w.scroll_y().ok())
            .unwrap_or(0.0);
        let show = is_past_threshold(y);
        if visible.get_untracked() != show {
            visible.set(show);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || visible.get()>
            <button
                class="back-to-top"
                title="Volver arriba"
                on:click=move |_| scroll_to_top()
            >
                {icon("arrow-up")}
            </button>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appears_only_past_threshold() {
        assert!(!is_past_threshold(0.0));
        assert!(!is_past_threshold(300.0));
        assert!(is_past_threshold(301.0));
    }
}
