use serde::{Deserialize, Serialize};

/// Visitor access registration form
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistroAccesoDto {
    pub nombre_visitante: String,
    pub documento_visitante: String,
    pub vivienda_destino: String,
    pub residente_autoriza: String,
    pub vehiculo: bool,
    #[serde(default)]
    pub placa_vehiculo: String,
}

impl RegistroAccesoDto {
    /// The plate is only meaningful while the vehicle box is checked
    pub fn set_vehiculo(&mut self, vehiculo: bool) {
        self.vehiculo = vehiculo;
        if !vehiculo {
            self.placa_vehiculo.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchecking_vehicle_clears_plate() {
        let mut dto = RegistroAccesoDto {
            vehiculo: true,
            placa_vehiculo: "ABCD12".into(),
            ..Default::default()
        };
        dto.set_vehiculo(false);
        assert!(dto.placa_vehiculo.is_empty());
    }
}
