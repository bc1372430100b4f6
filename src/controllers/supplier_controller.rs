use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::dto::supplier_dto::SupplierRequest;
use crate::models::{SupplierData, SupplierWithAddress};
use crate::repositories::SupplierRepository;
use crate::utils::errors::{conflict_error, not_found_error, AppError, AppResult};

pub struct SupplierController {
    repository: Arc<dyn SupplierRepository>,
}

impl SupplierController {
    pub fn new(repository: Arc<dyn SupplierRepository>) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<SupplierWithAddress>> {
        self.repository.list().await
    }

    pub async fn get_by_id(&self, id: i32) -> AppResult<SupplierWithAddress> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Proveedor", id))
    }

    pub async fn create(&self, request: SupplierRequest) -> AppResult<SupplierWithAddress> {
        request.validate()?;
        let data = SupplierData::from(request);

        if self.repository.find_by_name(&data.name).await?.is_some() {
            return Err(conflict_error("Proveedor", "nombre", &data.name));
        }

        let supplier = self.repository.create(data).await?;
        info!("🏭 Proveedor creado: {} (id {})", supplier.name, supplier.id);
        Ok(supplier)
    }

    /// Sobrescribe nombre, teléfono y email. La dirección solo cambia si
    /// el payload trae una dirección nueva o un id de dirección.
    pub async fn update(&self, id: i32, request: SupplierRequest) -> AppResult<SupplierWithAddress> {
        request.validate()?;
        let data = SupplierData::from(request);

        let current = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Proveedor", id))?;

        if data.name != current.name {
            if let Some(other) = self.repository.find_by_name(&data.name).await? {
                if other.id != id {
                    return Err(conflict_error("Proveedor", "nombre", &data.name));
                }
            }
        }

        let supplier = self
            .repository
            .update(id, data)
            .await?
            .ok_or_else(|| not_found_error("Proveedor", id))?;

        info!("🏭 Proveedor actualizado: {} (id {})", supplier.name, supplier.id);
        Ok(supplier)
    }

    /// Solo se elimina si no tiene mantenciones asociadas
    pub async fn delete(&self, id: i32) -> AppResult<()> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found_error("Proveedor", id));
        }

        let events = self.repository.count_events(id).await?;
        if events > 0 {
            return Err(AppError::Conflict(format!(
                "No se puede eliminar el proveedor: tiene {} mantenciones asociadas",
                events
            )));
        }

        if !self.repository.delete(id).await? {
            return Err(not_found_error("Proveedor", id));
        }
        info!("🗑️ Proveedor eliminado (id {})", id);
        Ok(())
    }
}
