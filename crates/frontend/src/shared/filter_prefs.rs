//! Per-browser memory of filter forms.
//!
//! A filter is saved to localStorage under a stable key and offered back
//! only when the page was opened without a query string; an explicit query
//! always wins over remembered values.

use serde::de::DeserializeOwned;
use serde::Serialize;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = storage()?.get_item(key).ok().flatten()?;
    match serde_json::from_str::<T>(&raw) {
        Ok(value) => Some(value),
        Err(e) => {
            log::warn!("ignoring unreadable preferences under {}: {}", key, e);
            None
        }
    }
}

pub fn save<T: Serialize>(key: &str, value: &T) {
    let Some(storage) = storage() else { return };
    let raw = match serde_json::to_string(value) {
        Ok(raw) => raw,
        Err(e) => {
            log::warn!("could not serialise preferences for {}: {}", key, e);
            return;
        }
    };
    if storage.set_item(key, &raw).is_err() {
        log::warn!("could not write preferences for {}", key);
    }
}

pub fn clear(key: &str) {
    if let Some(storage) = storage() {
        let _ = storage.remove_item(key);
    }
}

/// True when `search` (with or without the leading `?`) carries no parameters
pub fn has_no_query(search: &str) -> bool {
    search.trim_start_matches('?').trim().is_empty()
}

/// Filter to show at page load: the query string when present, otherwise
/// the remembered value, otherwise the default.
pub fn initial_filter<T>(search: &str, stored: Option<T>) -> T
where
    T: DeserializeOwned + Default,
{
    if has_no_query(search) {
        return stored.unwrap_or_default();
    }
    crate::shared::host_form::parse_query(search)
}

/// [`initial_filter`] against the current location and storage
pub fn restore<T>(key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let search = crate::shared::host_form::current_search();
    let stored = if has_no_query(&search) { load(key) } else { None };
    initial_filter(&search, stored)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Deserialize)]
    #[serde(default)]
    struct Filter {
        edificio: String,
        piso: String,
    }

    fn stored() -> Option<Filter> {
        Some(Filter {
            edificio: "3".into(),
            piso: "2".into(),
        })
    }

    #[test]
    fn remembered_values_apply_without_query() {
        assert_eq!(initial_filter("", stored()), stored().unwrap());
        assert_eq!(initial_filter("?", stored()), stored().unwrap());
    }

    #[test]
    fn query_string_wins_over_remembered_values() {
        let f: Filter = initial_filter("?edificio=12", stored());
        assert_eq!(
            f,
            Filter {
                edificio: "12".into(),
                piso: String::new()
            }
        );
    }

    #[test]
    fn nothing_remembered_gives_default() {
        assert_eq!(initial_filter::<Filter>("", None), Filter::default());
    }
}
