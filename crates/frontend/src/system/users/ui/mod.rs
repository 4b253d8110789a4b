pub mod list;
pub mod details;

pub use details::UsuarioDetails;
pub use list::UsuariosList;
