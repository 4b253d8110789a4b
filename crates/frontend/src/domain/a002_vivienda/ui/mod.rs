pub mod list;

pub use list::ViviendaListFilter;
