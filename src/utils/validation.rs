//! Utilidades de validación
//!
//! Reglas de negocio compartidas por los controladores: campos
//! obligatorios, fechas futuras y kilometraje no decreciente.

use chrono::{Local, NaiveDate};

use crate::utils::errors::{AppError, AppResult};

/// Fecha local actual
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Exigir que un campo opcional venga informado
pub fn require<T>(value: Option<T>, field: &str) -> AppResult<T> {
    value.ok_or_else(|| AppError::Validation(format!("El campo '{}' es obligatorio.", field)))
}

/// Rechazar fechas posteriores a `today`
pub fn ensure_not_future(date: NaiveDate, today: NaiveDate) -> AppResult<()> {
    if date > today {
        return Err(AppError::Validation(
            "La fecha no puede ser futura.".to_string(),
        ));
    }
    Ok(())
}

/// Validador para `#[validate(custom = ...)]`: strings no vacíos tras trim
pub fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        return Err(validator::ValidationError::new("not_blank"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require() {
        assert_eq!(require(Some(3), "odometer").unwrap(), 3);

        let err = require::<i32>(None, "odometer").unwrap_err();
        assert!(err.to_string().contains("'odometer'"));
    }

    #[test]
    fn test_ensure_not_future() {
        let today = NaiveDate::from_ymd_opt(2024, 5, 10).unwrap();
        assert!(ensure_not_future(today, today).is_ok());
        assert!(ensure_not_future(today.pred_opt().unwrap(), today).is_ok());
        assert!(matches!(
            ensure_not_future(today.succ_opt().unwrap(), today),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_validate_not_blank() {
        assert!(validate_not_blank("AA11").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
