//! Servicios
//!
//! Renderizado de reportes: planilla Excel y gráfico de costos.

pub mod report_chart;
pub mod report_export;
