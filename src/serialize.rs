//! [`CompareReport`] → JSON / YAML serialization.

use crate::enums::ReportFormat;
use crate::error::SerializeError;
use crate::types::CompareReport;

/// Serialize a report to pretty-printed JSON.
pub fn report_to_json(report: &CompareReport) -> Result<String, SerializeError> {
    serde_json::to_string_pretty(report).map_err(|e| SerializeError {
        message: format!("failed to serialize report to JSON: {}", e),
    })
}

/// Serialize a report to YAML.
pub fn report_to_yaml(report: &CompareReport) -> Result<String, SerializeError> {
    // Go through serde_json::Value so optional fields are dropped consistently
    let value = serde_json::to_value(report).map_err(|e| SerializeError {
        message: format!("failed to convert report to JSON value: {}", e),
    })?;

    serde_saphyr::to_string(&value).map_err(|e| SerializeError {
        message: format!("failed to serialize report to YAML: {}", e),
    })
}

/// Render a report in the requested format. `Text` yields `true` or `false`.
pub fn render_report(
    report: &CompareReport,
    format: ReportFormat,
) -> Result<String, SerializeError> {
    match format {
        ReportFormat::Text => Ok(report.matched.to_string()),
        ReportFormat::Json => report_to_json(report),
        ReportFormat::Yaml => report_to_yaml(report),
    }
}
