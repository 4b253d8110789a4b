//! Submission of list filter forms.
//!
//! Lists are rendered by the server, so "applying" a filter means navigating
//! to the same path with the filter encoded in the query string.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

pub fn current_search() -> String {
    window()
        .and_then(|w| w.location().search().ok())
        .unwrap_or_default()
}

pub fn current_path() -> String {
    window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// `serde_qs` encoding without the `key=` pairs of unset fields
pub fn build_query<T: Serialize>(filter: &T) -> String {
    let encoded = match serde_qs::to_string(filter) {
        Ok(encoded) => encoded,
        Err(e) => {
            log::warn!("could not encode filter: {}", e);
            return String::new();
        }
    };
    encoded
        .split('&')
        .filter(|pair| !pair.is_empty() && !pair.ends_with('='))
        .collect::<Vec<_>>()
        .join("&")
}

pub fn url_with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Filter encoded in `search` (with or without the leading `?`); the
/// default filter when it is empty or unreadable
pub fn parse_query<T: DeserializeOwned + Default>(search: &str) -> T {
    serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_else(|e| {
        log::warn!("unreadable filter query {}: {}", search, e);
        T::default()
    })
}

/// Filter the server applied to the list now on screen
pub fn read_query<T: DeserializeOwned + Default>() -> T {
    parse_query(&current_search())
}

pub fn navigate(url: &str) {
    log::debug!("navigating to {}", url);
    if let Some(w) = window() {
        if w.location().set_href(url).is_err() {
            log::error!("navigation to {} failed", url);
        }
    }
}

/// Reloads the current list with `filter` applied
pub fn submit_filter<T: Serialize>(filter: &T) {
    navigate(&url_with_query(&current_path(), &build_query(filter)));
}

/// Reloads the current list without any filter
pub fn clear_filters() {
    navigate(&current_path());
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_asignacion::aggregate::AsignacionFilter;
    use contracts::domain::a002_vivienda::aggregate::ViviendaFilter;

    #[test]
    fn empty_fields_are_left_out() {
        let filter = AsignacionFilter {
            edificio: "12".into(),
            estado: "PENDIENTE".into(),
            ..Default::default()
        };
        assert_eq!(build_query(&filter), "edificio=12&estado=PENDIENTE");
    }

    #[test]
    fn default_filter_keeps_its_defaults() {
        assert_eq!(build_query(&ViviendaFilter::default()), "activo=true");
    }

    #[test]
    fn list_state_comes_from_the_query_only() {
        let bare: ViviendaFilter = parse_query("");
        assert_eq!(bare, ViviendaFilter::default());

        let f: ViviendaFilter = parse_query("?edificio=3&activo=false");
        assert_eq!(f.edificio, "3");
        assert_eq!(f.activo, "false");
        assert!(f.piso.is_empty());
    }

    #[test]
    fn url_without_query_is_the_bare_path() {
        assert_eq!(url_with_query("/viviendas/", ""), "/viviendas/");
        assert_eq!(url_with_query("/viviendas/", "piso=2"), "/viviendas/?piso=2");
    }
}
