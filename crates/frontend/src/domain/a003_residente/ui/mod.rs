pub mod list;

pub use list::ResidenteListFilter;
