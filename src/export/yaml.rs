//! YAML Export functionality
//!
//! Human-readable form of the assessment and scenario documents.

use std::io::Write;

use crate::error::{AffordError, AffordResult};
use crate::export::json::AssessmentExport;
use crate::models::AffordabilityInputs;
use crate::services::Assessment;

/// Export an assessment to YAML with a commented header
pub fn export_assessment_yaml<W: Write>(assessment: &Assessment, writer: &mut W) -> AffordResult<()> {
    let export = AssessmentExport::new(assessment);

    writeln!(writer, "# Mortgage Affordability Assessment")
        .map_err(|e| AffordError::Export(e.to_string()))?;
    writeln!(writer, "# Generated: {}", export.generated_at)
        .map_err(|e| AffordError::Export(e.to_string()))?;
    writeln!(writer, "# App Version: {}", export.app_version)
        .map_err(|e| AffordError::Export(e.to_string()))?;
    writeln!(writer).map_err(|e| AffordError::Export(e.to_string()))?;

    serde_yaml::to_writer(writer, &export).map_err(|e| AffordError::Export(e.to_string()))?;

    Ok(())
}

/// Write the input record as a YAML scenario
pub fn export_scenario_yaml<W: Write>(
    inputs: &AffordabilityInputs,
    writer: &mut W,
) -> AffordResult<()> {
    writeln!(writer, "# Monthly figures in {}", inputs.currency)
        .map_err(|e| AffordError::Export(e.to_string()))?;
    serde_yaml::to_writer(writer, inputs).map_err(|e| AffordError::Export(e.to_string()))?;
    Ok(())
}

/// Read an input record from a YAML scenario
pub fn import_scenario_yaml(yaml_str: &str) -> AffordResult<AffordabilityInputs> {
    serde_yaml::from_str(yaml_str).map_err(|e| AffordError::Import(e.to_string()))
}
