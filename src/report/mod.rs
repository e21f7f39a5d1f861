pub mod json;
pub mod md;

use crate::error::StrengthsError;
use crate::types::results::{
    AccommodationsResults, AllResults, EnvironmentResults, PreferencesResults,
};

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Md,
    Json,
}

pub fn render_preferences(
    results: &PreferencesResults,
    format: OutputFormat,
) -> Result<String, StrengthsError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(StrengthsError::Json),
        OutputFormat::Md => Ok(md::preferences_markdown(results)),
    }
}

pub fn render_environment(
    results: &EnvironmentResults,
    format: OutputFormat,
) -> Result<String, StrengthsError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(StrengthsError::Json),
        OutputFormat::Md => Ok(md::environment_markdown(results)),
    }
}

pub fn render_accommodations(
    results: &AccommodationsResults,
    format: OutputFormat,
) -> Result<String, StrengthsError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(StrengthsError::Json),
        OutputFormat::Md => Ok(md::accommodations_markdown(results)),
    }
}

pub fn render_all(results: &AllResults, format: OutputFormat) -> Result<String, StrengthsError> {
    match format {
        OutputFormat::Json => json::to_json(results).map_err(StrengthsError::Json),
        OutputFormat::Md => Ok(md::all_markdown(results)),
    }
}
