//! Visitor access registration form
//!
//! - view_model.rs: field signals and validation rules
//! - view.rs: the form component

mod view;
mod view_model;

pub use view::RegistroAccesoForm;
pub use view_model::{validate_registro, RegistroAccesoViewModel};
