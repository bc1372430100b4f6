//! Modelo de Address

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Dirección postal, referenciada por proveedores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Address {
    pub id: i32,
    pub street: String,
    pub municipality: String,
    pub region: String,
}

/// Datos de una dirección aún no persistida
#[derive(Debug, Clone, PartialEq)]
pub struct NewAddress {
    pub street: String,
    pub municipality: String,
    pub region: String,
}

impl NewAddress {
    pub fn into_address(self, id: i32) -> Address {
        Address {
            id,
            street: self.street,
            municipality: self.municipality,
            region: self.region,
        }
    }
}
