mod csv;
mod fs_utils;
mod json;

use crate::errors::AppResult;
use crate::models::plan::PlanResponse;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

#[derive(Clone, Debug, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Export the duty segments of a planning response to the given file.
pub fn export_segments(
    response: &PlanResponse,
    format: &ExportFormat,
    file: &str,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(Path::new(file), force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(file, response)?,
        ExportFormat::Json => json::write_json(file, response)?,
    }

    success(format!(
        "{} export completed: {}",
        format.as_str().to_uppercase(),
        file
    ));
    Ok(())
}
