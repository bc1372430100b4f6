//! Exportación del reporte a planilla Excel
//!
//! Una hoja "Reporte" con una fila de encabezados igual a los nombres
//! de campo del reporte y una fila por mantención.

use chrono::NaiveDateTime;
use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use crate::models::report::REPORT_COLUMNS;
use crate::models::ReportRow;
use crate::utils::errors::AppResult;

pub const SPREADSHEET_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

const SHEET_NAME: &str = "Reporte";

/// Nombre de archivo con marca de tiempo al segundo
pub fn spreadsheet_filename(now: NaiveDateTime) -> String {
    format!("reporte_mantenciones_{}.xlsx", now.format("%Y%m%d_%H%M%S"))
}

pub fn write_spreadsheet(rows: &[ReportRow]) -> AppResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();

    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    for (col, name) in REPORT_COLUMNS.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *name, &header)?;
    }

    for (index, row) in rows.iter().enumerate() {
        let line = index as u32 + 1;
        worksheet.write_number(line, 0, row.id)?;
        worksheet.write_string(line, 1, row.vehicle_plate.as_str())?;
        worksheet.write_string(line, 2, row.maintenance_type.as_str())?;
        worksheet.write_string(line, 3, row.supplier.as_str())?;
        worksheet.write_string(line, 4, row.date.format("%Y-%m-%d").to_string())?;
        worksheet.write_number(line, 5, row.cost.to_f64().unwrap_or_default())?;
    }

    Ok(workbook.save_to_buffer()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use rust_decimal::Decimal;

    #[test]
    fn test_filename_has_timestamp_to_the_second() {
        let now = NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(14, 7, 9)
            .unwrap();
        assert_eq!(
            spreadsheet_filename(now),
            "reporte_mantenciones_20240305_140709.xlsx"
        );
    }

    #[test]
    fn test_write_spreadsheet_produces_xlsx() {
        let rows = vec![ReportRow {
            id: 1,
            vehicle_plate: "AA11".to_string(),
            maintenance_type: "Frenos".to_string(),
            supplier: "Taller Sur".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cost: Decimal::new(1500, 0),
        }];

        let bytes = write_spreadsheet(&rows).unwrap();
        // Un .xlsx es un archivo zip
        assert_eq!(&bytes[..4], b"PK\x03\x04");
    }
}
