//! CSRF token for forms posted back to the server.
//!
//! The server keeps the token in the `csrftoken` cookie and expects it in a
//! `csrfmiddlewaretoken` field of every POST.

use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlDocument;

const COOKIE_NAME: &str = "csrftoken";
const FIELD_NAME: &str = "csrfmiddlewaretoken";

/// Value of the token cookie in a `document.cookie` string
pub fn token_from_cookies(cookies: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(name, _)| *name == COOKIE_NAME)
        .map(|(_, value)| value.to_string())
        .filter(|value| !value.is_empty())
}

pub fn csrf_token() -> Option<String> {
    let cookies = web_sys::window()?
        .document()?
        .dyn_into::<HtmlDocument>()
        .ok()?
        .cookie()
        .ok()?;
    let token = token_from_cookies(&cookies);
    if token.is_none() {
        log::warn!("no {} cookie; the form will be rejected", COOKIE_NAME);
    }
    token
}

/// Hidden input carrying the token
#[component]
pub fn CsrfField() -> impl IntoView {
    let token = csrf_token().unwrap_or_default();
    view! { <input type="hidden" name=FIELD_NAME value=token /> }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_read_among_other_cookies() {
        assert_eq!(
            token_from_cookies("sessionid=abc; csrftoken=T0k3n; theme=dark"),
            Some("T0k3n".to_string())
        );
        assert_eq!(token_from_cookies("csrftoken=x"), Some("x".to_string()));
    }

    #[test]
    fn missing_or_empty_token_is_none() {
        assert_eq!(token_from_cookies(""), None);
        assert_eq!(token_from_cookies("xcsrftoken=1; csrftokens=2"), None);
        assert_eq!(token_from_cookies("csrftoken="), None);
    }
}
