use async_trait::async_trait;
use sqlx::{PgPool, Postgres, Transaction};

use super::address_repository::insert_address;
use super::SupplierRepository;
use crate::models::{Address, AddressAssignment, Supplier, SupplierData, SupplierWithAddress};
use crate::utils::errors::{database_error, AppResult};

const SUPPLIER_WITH_ADDRESS: &str = r#"
    SELECT s.id, s.name, s.phone, s.email,
           a.id AS address_id, a.street, a.municipality, a.region
    FROM suppliers s
    LEFT JOIN addresses a ON a.id = s.address_id
"#;

pub struct PgSupplierRepository {
    pool: PgPool,
}

impl PgSupplierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn begin(&self) -> AppResult<Transaction<'static, Postgres>> {
        self.pool
            .begin()
            .await
            .map_err(|e| database_error("Error iniciando transacción", e))
    }

    async fn fetch_with_address(
        tx: &mut Transaction<'_, Postgres>,
        id: i32,
    ) -> AppResult<Option<SupplierWithAddress>> {
        let row = sqlx::query_as::<_, SupplierRow>(&format!("{} WHERE s.id = $1", SUPPLIER_WITH_ADDRESS))
            .bind(id)
            .fetch_optional(&mut **tx)
            .await
            .map_err(|e| database_error("Error buscando proveedor", e))?;

        Ok(row.map(Into::into))
    }
}

// Fila del join proveedor + dirección
#[derive(sqlx::FromRow)]
struct SupplierRow {
    id: i32,
    name: String,
    phone: String,
    email: String,
    address_id: Option<i32>,
    street: Option<String>,
    municipality: Option<String>,
    region: Option<String>,
}

impl From<SupplierRow> for SupplierWithAddress {
    fn from(row: SupplierRow) -> Self {
        let address = match (row.address_id, row.street, row.municipality, row.region) {
            (Some(id), Some(street), Some(municipality), Some(region)) => Some(Address {
                id,
                street,
                municipality,
                region,
            }),
            _ => None,
        };

        Self {
            id: row.id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            address,
        }
    }
}

/// Resuelve el id de dirección final para el proveedor
async fn resolve_address(
    tx: &mut Transaction<'_, Postgres>,
    assignment: AddressAssignment,
    current: Option<i32>,
) -> AppResult<Option<i32>> {
    match assignment {
        AddressAssignment::Keep => Ok(current),
        AddressAssignment::Link(id) => Ok(Some(id)),
        AddressAssignment::Create(new_address) => {
            let address = insert_address(tx, new_address).await?;
            Ok(Some(address.id))
        }
    }
}

#[async_trait]
impl SupplierRepository for PgSupplierRepository {
    async fn list(&self) -> AppResult<Vec<SupplierWithAddress>> {
        let rows = sqlx::query_as::<_, SupplierRow>(&format!("{} ORDER BY s.id", SUPPLIER_WITH_ADDRESS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| database_error("Error listando proveedores", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: i32) -> AppResult<Option<SupplierWithAddress>> {
        let row = sqlx::query_as::<_, SupplierRow>(&format!("{} WHERE s.id = $1", SUPPLIER_WITH_ADDRESS))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| database_error("Error buscando proveedor", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_name(&self, name: &str) -> AppResult<Option<Supplier>> {
        sqlx::query_as::<_, Supplier>(
            "SELECT id, name, phone, email, address_id FROM suppliers WHERE name = $1",
        )
        .bind(name)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| database_error("Error buscando proveedor por nombre", e))
    }

    async fn create(&self, data: SupplierData) -> AppResult<SupplierWithAddress> {
        let mut tx = self.begin().await?;

        let address_id = resolve_address(&mut tx, data.address, None).await?;

        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO suppliers (name, phone, email, address_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(data.name)
        .bind(data.phone)
        .bind(data.email)
        .bind(address_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| database_error("Error creando proveedor", e))?;

        let supplier = Self::fetch_with_address(&mut tx, id)
            .await?
            .ok_or(sqlx::Error::RowNotFound)?;

        tx.commit()
            .await
            .map_err(|e| database_error("Error confirmando transacción", e))?;

        Ok(supplier)
    }

    async fn update(&self, id: i32, data: SupplierData) -> AppResult<Option<SupplierWithAddress>> {
        let mut tx = self.begin().await?;

        let current: Option<Option<i32>> =
            sqlx::query_scalar("SELECT address_id FROM suppliers WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(|e| database_error("Error buscando proveedor", e))?;

        let Some(current_address) = current else {
            return Ok(None);
        };

        let address_id = resolve_address(&mut tx, data.address, current_address).await?;

        sqlx::query(
            r#"
            UPDATE suppliers
            SET name = $2, phone = $3, email = $4, address_id = $5
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(data.name)
        .bind(data.phone)
        .bind(data.email)
        .bind(address_id)
        .execute(&mut *tx)
        .await
        .map_err(|e| database_error("Error actualizando proveedor", e))?;

        let supplier = Self::fetch_with_address(&mut tx, id).await?;

        tx.commit()
            .await
            .map_err(|e| database_error("Error confirmando transacción", e))?;

        Ok(supplier)
    }

    async fn count_events(&self, id: i32) -> AppResult<i64> {
        sqlx::query_scalar("SELECT COUNT(*) FROM maintenance_events WHERE supplier_id = $1")
            .bind(id)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| database_error("Error contando mantenciones del proveedor", e))
    }

    async fn delete(&self, id: i32) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM suppliers WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| database_error("Error eliminando proveedor", e))?;

        Ok(result.rows_affected() > 0)
    }
}
