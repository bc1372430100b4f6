use serde::Deserialize;

// Flags de query del endpoint de reportes
#[derive(Debug, Default, Deserialize)]
pub struct ReportQuery {
    #[serde(default)]
    pub export_excel: bool,
    #[serde(default)]
    pub generate_chart: bool,
}
