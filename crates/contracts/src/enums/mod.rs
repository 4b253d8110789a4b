pub mod estado_asignacion;
pub mod estado_vivienda;
pub mod tipo_asignacion;
