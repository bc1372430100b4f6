use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::AddressRepository;
use crate::models::{Address, NewAddress};
use crate::utils::errors::{database_error, AppResult};

pub struct PgAddressRepository {
    pool: PgPool,
}

impl PgAddressRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Inserta una dirección dentro de una transacción abierta
pub(crate) async fn insert_address(
    tx: &mut Transaction<'_, Postgres>,
    data: NewAddress,
) -> AppResult<Address> {
    sqlx::query_as::<_, Address>(
        r#"
        INSERT INTO addresses (street, municipality, region)
        VALUES ($1, $2, $3)
        RETURNING id, street, municipality, region
        "#,
    )
    .bind(data.street)
    .bind(data.municipality)
    .bind(data.region)
    .fetch_one(&mut **tx)
    .await
    .map_err(|e| database_error("Error creando dirección", e))
}

#[async_trait]
impl AddressRepository for PgAddressRepository {
    async fn list(&self) -> AppResult<Vec<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT id, street, municipality, region FROM addresses ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| database_error("Error listando direcciones", e))
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<Address>> {
        sqlx::query_as::<_, Address>(
            "SELECT id, street, municipality, region FROM addresses WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando dirección", e))
    }

    async fn create(&self, data: NewAddress) -> AppResult<Address> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| database_error("Error iniciando transacción", e))?;

        let address = insert_address(&mut tx, data).await?;

        tx.commit()
            .await
            .map_err(|e| database_error("Error confirmando transacción", e))?;

        Ok(address)
    }
}
