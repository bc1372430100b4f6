use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::address_dto::AddressRequest;
use crate::models::Address;
use crate::repositories::AddressRepository;
use crate::utils::errors::{not_found_error, AppResult};

pub struct AddressController {
    repository: Arc<dyn AddressRepository>,
}

impl AddressController {
    pub fn new(repository: Arc<dyn AddressRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Address>> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<Address> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Dirección", id))
    }

    pub async fn create(&self, request: AddressRequest) -> AppResult<Address> {
        request.validate()?;
        let address = self.repository.create(request.into()).await?;
        info!("📍 Dirección guardada (id {})", address.id);
        Ok(address)
    }
}
