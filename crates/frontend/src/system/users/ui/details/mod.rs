//! User create/edit form
//!
//! - view_model.rs: field signals, loading in edit mode and validation
//! - view.rs: the form component

mod view;
mod view_model;

pub use view::UsuarioDetails;
pub use view_model::{validate_usuario, UsuarioDetailsViewModel, UsuarioFormValues};
