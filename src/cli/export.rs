//! Export CLI commands
//!
//! Writes assessments and scenario templates to a file or stdout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::{AffordError, AffordResult};
use crate::export::{export_assessment, export_scenario, ExportFormat, ScenarioFormat};
use crate::models::AffordabilityInputs;
use crate::services::Assessment;

fn create_output(path: &Path) -> AffordResult<BufWriter<File>> {
    let file = File::create(path).map_err(|e| {
        AffordError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}

/// Handle `export`
pub fn handle_export_command(
    assessment: &Assessment,
    format: ExportFormat,
    output: Option<PathBuf>,
) -> AffordResult<()> {
    if let Some(path) = output {
        let mut writer = create_output(&path)?;
        export_assessment(assessment, format, &mut writer)?;
        writer
            .flush()
            .map_err(|e| AffordError::Export(e.to_string()))?;
        println!("Assessment exported to: {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_assessment(assessment, format, &mut handle)?;
    }

    Ok(())
}

/// Handle `template`
///
/// With an output path and no explicit format, the format follows the file
/// extension.
pub fn handle_template_command(
    inputs: &AffordabilityInputs,
    format: Option<ScenarioFormat>,
    output: Option<PathBuf>,
) -> AffordResult<()> {
    if let Some(path) = output {
        let format = match format {
            Some(format) => format,
            None => ScenarioFormat::from_path(&path)?,
        };
        let mut writer = create_output(&path)?;
        export_scenario(inputs, format, &mut writer)?;
        writer
            .flush()
            .map_err(|e| AffordError::Export(e.to_string()))?;
        println!("Scenario written to: {}", path.display());
    } else {
        let stdout = std::io::stdout();
        let mut handle = stdout.lock();
        export_scenario(inputs, format.unwrap_or(ScenarioFormat::Json), &mut handle)?;
    }

    Ok(())
}
