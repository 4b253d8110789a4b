pub mod a001_edificio;
pub mod a002_vivienda;
pub mod a003_residente;
pub mod a004_asignacion;
pub mod a005_acceso;
