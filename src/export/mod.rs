//! Export module for afford
//!
//! Provides assessment and scenario export in multiple formats:
//! - CSV: expense breakdown (spreadsheet-compatible)
//! - JSON: machine-readable assessment, and scenario files
//! - YAML: human-readable assessment, and scenario files

pub mod csv;
pub mod json;
pub mod yaml;

use std::io::Write;
use std::path::Path;

use crate::error::{AffordError, AffordResult};
use crate::models::AffordabilityInputs;
use crate::services::Assessment;

pub use self::csv::export_breakdown_csv;
pub use json::{
    export_assessment_json, export_scenario_json, import_scenario_json, AssessmentExport,
    EXPORT_SCHEMA_VERSION,
};
pub use yaml::{export_assessment_yaml, export_scenario_yaml, import_scenario_yaml};

/// Output formats for assessments
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Json,
    Yaml,
    Csv,
}

/// Output formats for scenario files
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScenarioFormat {
    Json,
    Yaml,
}

impl ScenarioFormat {
    /// Pick a format from a file extension (`.json`, `.yaml`, `.yml`)
    pub fn from_path(path: &Path) -> AffordResult<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("yaml") | Some("yml") => Ok(Self::Yaml),
            _ => Err(AffordError::Import(format!(
                "Unsupported scenario file '{}': expected a .json, .yaml or .yml extension",
                path.display()
            ))),
        }
    }
}

/// Write an assessment in the requested format
pub fn export_assessment<W: Write>(
    assessment: &Assessment,
    format: ExportFormat,
    writer: &mut W,
) -> AffordResult<()> {
    match format {
        ExportFormat::Json => export_assessment_json(assessment, writer),
        ExportFormat::Yaml => export_assessment_yaml(assessment, writer),
        ExportFormat::Csv => export_breakdown_csv(assessment, writer),
    }
}

/// Write a scenario in the requested format
pub fn export_scenario<W: Write>(
    inputs: &AffordabilityInputs,
    format: ScenarioFormat,
    writer: &mut W,
) -> AffordResult<()> {
    match format {
        ScenarioFormat::Json => export_scenario_json(inputs, writer),
        ScenarioFormat::Yaml => export_scenario_yaml(inputs, writer),
    }
}

/// Read a scenario file, choosing the parser by extension
pub fn load_scenario(path: &Path) -> AffordResult<AffordabilityInputs> {
    let format = ScenarioFormat::from_path(path)?;
    let contents = std::fs::read_to_string(path).map_err(|e| {
        AffordError::Io(format!("Failed to read scenario {}: {}", path.display(), e))
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading scenario");

    match format {
        ScenarioFormat::Json => import_scenario_json(&contents),
        ScenarioFormat::Yaml => import_scenario_yaml(&contents),
    }
}
