//! JSON Export functionality
//!
//! Writes a full assessment, or just the input scenario, as JSON.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use tracing::debug;

use crate::error::{AffordError, AffordResult};
use crate::models::AffordabilityInputs;
use crate::services::Assessment;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Assessment export document
#[derive(Debug, Clone, Serialize)]
pub struct AssessmentExport<'a> {
    /// Schema version for compatibility checking
    pub schema_version: &'static str,

    /// Export timestamp
    pub generated_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: &'static str,

    #[serde(flatten)]
    pub assessment: &'a Assessment,
}

impl<'a> AssessmentExport<'a> {
    pub fn new(assessment: &'a Assessment) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION,
            generated_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION"),
            assessment,
        }
    }
}

/// Export an assessment as pretty-printed JSON
pub fn export_assessment_json<W: Write>(assessment: &Assessment, writer: &mut W) -> AffordResult<()> {
    let export = AssessmentExport::new(assessment);

    serde_json::to_writer_pretty(&mut *writer, &export)
        .map_err(|e| AffordError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AffordError::Export(e.to_string()))?;

    debug!("wrote JSON assessment export");
    Ok(())
}

/// Write the input record as a JSON scenario
pub fn export_scenario_json<W: Write>(
    inputs: &AffordabilityInputs,
    writer: &mut W,
) -> AffordResult<()> {
    serde_json::to_writer_pretty(&mut *writer, inputs)
        .map_err(|e| AffordError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AffordError::Export(e.to_string()))?;
    Ok(())
}

/// Read an input record from a JSON scenario
pub fn import_scenario_json(json_str: &str) -> AffordResult<AffordabilityInputs> {
    serde_json::from_str(json_str).map_err(|e| AffordError::Import(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::AffordabilityService;

    #[test]
    fn test_assessment_export() {
        let inputs = AffordabilityInputs::baseline();
        let assessment = AffordabilityService::new(&inputs).assess();

        let mut output = Vec::new();
        export_assessment_json(&assessment, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["schema_version"], EXPORT_SCHEMA_VERSION);
        assert_eq!(value["inputs"]["currency"], "SAR");
        assert_eq!(value["totals"]["remaining"], -636.67);
        assert_eq!(value["totals"]["risk"], "very_high");
        assert_eq!(value["recommendations"][1]["kind"], "monthly_deficit");
        assert_eq!(value["breakdown"].as_array().unwrap().len(), 7);
    }

    #[test]
    fn test_zero_salary_ratios_are_null() {
        let inputs = AffordabilityInputs {
            salary: crate::models::Money::zero(),
            ..AffordabilityInputs::baseline()
        };
        let assessment = AffordabilityService::new(&inputs).assess();

        let mut output = Vec::new();
        export_assessment_json(&assessment, &mut output).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert!(value["totals"]["dti"].is_null());
        assert!(value["totals"]["mortgage_percent"].is_null());
    }

    #[test]
    fn test_scenario_roundtrip() {
        let inputs = AffordabilityInputs::baseline();

        let mut output = Vec::new();
        export_scenario_json(&inputs, &mut output).unwrap();
        let json = String::from_utf8(output).unwrap();
        assert!(json.contains("1916.67"));

        let imported = import_scenario_json(&json).unwrap();
        assert_eq!(imported, inputs);
    }

    #[test]
    fn test_import_rejects_malformed() {
        let err = import_scenario_json("{\"salary\": \"lots\"}").unwrap_err();
        assert!(matches!(err, AffordError::Import(_)));
    }
}
