//! Modelo de Supplier

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::address::{Address, NewAddress};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Supplier {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address_id: Option<i32>,
}

/// Proveedor con su dirección resuelta
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupplierWithAddress {
    pub id: i32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: Option<Address>,
}

impl SupplierWithAddress {
    pub fn new(supplier: Supplier, address: Option<Address>) -> Self {
        Self {
            id: supplier.id,
            name: supplier.name,
            phone: supplier.phone,
            email: supplier.email,
            address,
        }
    }
}

/// Qué hacer con la dirección enlazada al guardar un proveedor
#[derive(Debug, Clone, PartialEq)]
pub enum AddressAssignment {
    /// Mantener el enlace actual (en una creación: sin dirección)
    Keep,
    /// Enlazar una dirección existente
    Link(i32),
    /// Persistir una dirección nueva y enlazarla
    Create(NewAddress),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SupplierData {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: AddressAssignment,
}
