pub mod details;

pub use details::RegistroAccesoForm;
