pub mod active_filters;
pub mod back_to_top;
pub mod filter_panel;
pub mod inactive_toggle;
pub mod option_select;
pub mod text_field;

pub use active_filters::ActiveFiltersIndicator;
pub use back_to_top::BackToTop;
pub use filter_panel::FilterPanel;
pub use inactive_toggle::InactiveToggle;
pub use option_select::OptionSelect;
pub use text_field::TextField;
