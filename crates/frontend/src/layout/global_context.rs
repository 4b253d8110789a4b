use leptos::prelude::*;

use crate::shared::filter_prefs;
use crate::shared::viewport::is_small_viewport;

/// localStorage key holding the ids of folded sidebar sections
pub const COLLAPSED_SECTIONS_KEY: &str = "collapsedSections";

/// Adds `id` when absent, removes it when present
pub fn toggle_in(list: &mut Vec<String>, id: &str) {
    if let Some(pos) = list.iter().position(|x| x == id) {
        list.remove(pos);
    } else {
        list.push(id.to_string());
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub left_open: RwSignal<bool>,
    pub collapsed_sections: RwSignal<Vec<String>>,
    /// `location.pathname` at page load; every page is a full navigation
    pub path: StoredValue<String>,
}

impl AppGlobalContext {
    pub fn new(path: String) -> Self {
        let collapsed: Vec<String> =
            filter_prefs::load(COLLAPSED_SECTIONS_KEY).unwrap_or_default();
        Self {
            left_open: RwSignal::new(!is_small_viewport()),
            collapsed_sections: RwSignal::new(collapsed),
            path: StoredValue::new(path),
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|open| *open = !*open);
    }

    /// Link clicked in the sidebar; on small screens it gets out of the way
    pub fn link_followed(&self) {
        if is_small_viewport() {
            self.left_open.set(false);
        }
    }

    pub fn toggle_section(&self, id: &str) {
        self.collapsed_sections.update(|list| toggle_in(list, id));
        self.collapsed_sections
            .with_untracked(|list| filter_prefs::save(COLLAPSED_SECTIONS_KEY, list));
    }

    pub fn is_collapsed(&self, id: &str) -> bool {
        self.collapsed_sections.with(|list| list.iter().any(|x| x == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggling_twice_restores_the_list() {
        let mut list = vec!["condominio".to_string()];
        toggle_in(&mut list, "personal");
        assert_eq!(list, vec!["condominio", "personal"]);
        toggle_in(&mut list, "condominio");
        assert_eq!(list, vec!["personal"]);
        toggle_in(&mut list, "condominio");
        assert_eq!(list, vec!["personal", "condominio"]);
    }
}
