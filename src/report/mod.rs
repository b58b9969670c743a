pub mod json;
pub mod md;

use crate::error::OrganizerError;
use serde::Serialize;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub trait ToMarkdown {
    fn to_markdown(&self) -> String;
}

pub fn render<T>(report: &T, format: OutputFormat) -> Result<String, OrganizerError>
where
    T: Serialize + ToMarkdown,
{
    match format {
        OutputFormat::Json => json::to_json(report).map_err(OrganizerError::Json),
        OutputFormat::Md => Ok(report.to_markdown()),
    }
}
