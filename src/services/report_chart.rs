//! Gráfico de costos por tipo de mantención
//!
//! Agrupa las filas del reporte por tipo, suma el costo y dibuja un
//! gráfico de barras en SVG.

use std::collections::BTreeMap;

use plotters::coord::Shift;
use plotters::prelude::*;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::models::ReportRow;
use crate::utils::errors::{AppError, AppResult};

pub const CHART_CONTENT_TYPE: &str = "image/svg+xml";

const CHART_SIZE: (u32, u32) = (800, 600);
const BAR_COLOR: RGBColor = RGBColor(135, 206, 235);

/// Costo total por tipo, ordenado por nombre de tipo
pub fn cost_by_type(rows: &[ReportRow]) -> Vec<(String, Decimal)> {
    let mut totals: BTreeMap<&str, Decimal> = BTreeMap::new();
    for row in rows {
        *totals.entry(row.maintenance_type.as_str()).or_default() += row.cost;
    }
    totals
        .into_iter()
        .map(|(name, total)| (name.to_string(), total))
        .collect()
}

pub fn render_bar_chart(totals: &[(String, Decimal)]) -> AppResult<String> {
    let bars: Vec<(String, f64)> = totals
        .iter()
        .map(|(name, total)| (name.clone(), total.to_f64().unwrap_or_default()))
        .collect();

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw_bars(&root, &bars)
            .map_err(|e| AppError::Internal(format!("Error generando gráfico: {}", e)))?;
    }
    Ok(svg)
}

fn draw_bars(
    root: &DrawingArea<SVGBackend<'_>, Shift>,
    bars: &[(String, f64)],
) -> Result<(), DrawingAreaErrorKind<std::io::Error>> {
    root.fill(&WHITE)?;

    let max = bars.iter().map(|(_, total)| *total).fold(0.0, f64::max);
    let y_top = if max > 0.0 { max * 1.1 } else { 1.0 };

    let mut chart = ChartBuilder::on(root)
        .caption("Costos por Tipo de Mantención", ("sans-serif", 24))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(90)
        .build_cartesian_2d((0..bars.len()).into_segmented(), 0f64..y_top)?;

    let label = |value: &SegmentValue<usize>| match value {
        SegmentValue::CenterOf(index) => bars
            .get(*index)
            .map(|(name, _)| name.clone())
            .unwrap_or_default(),
        _ => String::new(),
    };

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(bars.len())
        .x_label_formatter(&label)
        .x_desc("Tipo de Mantención")
        .y_desc("Costo Total")
        .draw()?;

    chart.draw_series(
        Histogram::vertical(&chart)
            .style(BAR_COLOR.filled())
            .margin(10)
            .data(bars.iter().enumerate().map(|(index, (_, total))| (index, *total))),
    )?;

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(id: i32, kind: &str, cost: i64) -> ReportRow {
        ReportRow {
            id,
            vehicle_plate: "AA11".to_string(),
            maintenance_type: kind.to_string(),
            supplier: "Taller Sur".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            cost: Decimal::new(cost, 0),
        }
    }

    #[test]
    fn test_cost_by_type_sums_per_group() {
        let rows = vec![
            row(1, "Frenos", 100),
            row(2, "Cambio de aceite", 30),
            row(3, "Frenos", 50),
        ];

        let totals = cost_by_type(&rows);
        assert_eq!(
            totals,
            vec![
                ("Cambio de aceite".to_string(), Decimal::new(30, 0)),
                ("Frenos".to_string(), Decimal::new(150, 0)),
            ]
        );
    }

    #[test]
    fn test_render_bar_chart_labels_types() {
        let totals = vec![
            ("Cambio de aceite".to_string(), Decimal::new(30, 0)),
            ("Frenos".to_string(), Decimal::new(150, 0)),
        ];

        let svg = render_bar_chart(&totals).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("Frenos"));
        assert!(svg.contains("Cambio de aceite"));
    }
}
