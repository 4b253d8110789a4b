pub mod api_utils;
pub mod cascade;
pub mod components;
pub mod csrf;
pub mod date_utils;
pub mod filter_prefs;
pub mod format;
pub mod host_form;
pub mod icons;
pub mod notify;
pub mod protection;
pub mod validation;
pub mod viewport;
