use serde::Deserialize;
use validator::Validate;

use super::address_dto::AddressRequest;
use crate::models::{AddressAssignment, SupplierData};

// Payload para crear o actualizar un proveedor
#[derive(Debug, Deserialize, Validate)]
pub struct SupplierRequest {
    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub name: String,

    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub phone: String,

    #[validate(email)]
    pub email: String,

    pub address_id: Option<i32>,

    #[validate]
    pub new_address: Option<AddressRequest>,
}

impl From<SupplierRequest> for SupplierData {
    fn from(request: SupplierRequest) -> Self {
        // La dirección nueva tiene prioridad sobre un id existente
        let address = match (request.new_address, request.address_id) {
            (Some(new_address), _) => AddressAssignment::Create(new_address.into()),
            (None, Some(id)) => AddressAssignment::Link(id),
            (None, None) => AddressAssignment::Keep,
        };

        Self {
            name: request.name,
            phone: request.phone,
            email: request.email,
            address,
        }
    }
}
