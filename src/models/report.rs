//! Modelos del reporte de mantenciones

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Texto usado cuando la mantención no tiene proveedor
pub const NO_SUPPLIER: &str = "Sin proveedor";

/// Nombres de columna del reporte, en el orden de `ReportRow`
pub const REPORT_COLUMNS: [&str; 6] = [
    "id",
    "vehiclePlate",
    "maintenanceType",
    "supplier",
    "date",
    "cost",
];

/// Filtros del reporte; todos opcionales y combinados con AND
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ReportFilters {
    pub date_from: Option<NaiveDate>,
    pub date_to: Option<NaiveDate>,
    pub plate: Option<String>,
    pub maintenance_type: Option<String>,
    pub supplier: Option<String>,
}

/// Fila tal como sale del join entre mantenciones, vehículos, tipos y proveedores
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct ReportRecord {
    pub id: i32,
    pub plate: String,
    pub type_name: String,
    pub supplier_name: Option<String>,
    pub date: NaiveDate,
    pub cost: Option<Decimal>,
}

/// Fila aplanada del reporte
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub id: i32,
    pub vehicle_plate: String,
    pub maintenance_type: String,
    pub supplier: String,
    pub date: NaiveDate,
    pub cost: Decimal,
}

impl From<ReportRecord> for ReportRow {
    fn from(record: ReportRecord) -> Self {
        Self {
            id: record.id,
            vehicle_plate: record.plate,
            maintenance_type: record.type_name,
            supplier: record
                .supplier_name
                .unwrap_or_else(|| NO_SUPPLIER.to_string()),
            date: record.date,
            cost: record.cost.unwrap_or(Decimal::ZERO),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_row_defaults() {
        let record = ReportRecord {
            id: 1,
            plate: "AA11".to_string(),
            type_name: "Frenos".to_string(),
            supplier_name: None,
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cost: None,
        };

        let row = ReportRow::from(record);
        assert_eq!(row.supplier, NO_SUPPLIER);
        assert_eq!(row.cost, Decimal::ZERO);
    }

    #[test]
    fn test_report_row_field_names_match_columns() {
        let row = ReportRow {
            id: 1,
            vehicle_plate: "AA11".to_string(),
            maintenance_type: "Frenos".to_string(),
            supplier: "Taller".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cost: Decimal::new(1500, 0),
        };

        let value = serde_json::to_value(&row).unwrap();
        let object = value.as_object().unwrap();
        for column in REPORT_COLUMNS {
            assert!(object.contains_key(column), "falta la columna {}", column);
        }
        assert_eq!(object.len(), REPORT_COLUMNS.len());
    }
}
