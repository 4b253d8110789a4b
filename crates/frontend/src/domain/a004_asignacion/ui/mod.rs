pub mod list;

pub use list::AsignacionListFilter;
