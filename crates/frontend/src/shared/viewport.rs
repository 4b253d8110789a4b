/// Width below which filter selects never auto-submit and the sidebar
/// hides after navigation
pub const MOBILE_BREAKPOINT: f64 = 768.0;

pub fn viewport_width() -> Option<f64> {
    web_sys::window()
        .and_then(|w| w.inner_width().ok())
        .and_then(|v| v.as_f64())
}

pub fn is_small(width: f64) -> bool {
    width < MOBILE_BREAKPOINT
}

/// Reads `window.innerWidth` once. Without a window the viewport counts as wide.
pub fn is_small_viewport() -> bool {
    viewport_width().map(is_small).unwrap_or(false)
}

/// Auto-submit is only honoured on wide viewports
pub fn resolve_auto_submit(requested: bool, width: Option<f64>) -> bool {
    requested && !width.map(is_small).unwrap_or(false)
}

/// [`resolve_auto_submit`] against the current window
pub fn auto_submit_for_viewport(requested: bool) -> bool {
    resolve_auto_submit(requested, viewport_width())
}
