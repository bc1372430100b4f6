use serde::Deserialize;
use validator::Validate;

use crate::models::NewAddress;

// Payload de una dirección (standalone o inline en un proveedor)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct AddressRequest {
    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub street: String,

    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub municipality: String,

    #[validate(custom = "crate::utils::validation::validate_not_blank")]
    pub region: String,
}

impl From<AddressRequest> for NewAddress {
    fn from(request: AddressRequest) -> Self {
        Self {
            street: request.street,
            municipality: request.municipality,
            region: request.region,
        }
    }
}
