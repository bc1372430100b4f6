//! Modelo de Vehicle
//!
//! Mapea la tabla `vehicles`; la patente es única en toda la flota.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Vehicle {
    pub id: i32,
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub odometer: i32,
}

/// Todos los campos editables de un vehículo. Una actualización
/// reemplaza el registro completo con estos valores.
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleData {
    pub plate: String,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub odometer: i32,
}

impl VehicleData {
    pub fn into_vehicle(self, id: i32) -> Vehicle {
        Vehicle {
            id,
            plate: self.plate,
            make: self.make,
            model: self.model,
            year: self.year,
            odometer: self.odometer,
        }
    }
}
