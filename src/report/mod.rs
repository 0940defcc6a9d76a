pub mod json;
pub mod md;

use crate::error::AiReadyError;
use crate::types::report::AnalysisResult;

#[derive(Debug, Clone, Copy)]
pub enum OutputFormat {
    Json,
    Md,
}

pub fn render(result: &AnalysisResult, format: OutputFormat) -> Result<String, AiReadyError> {
    match format {
        OutputFormat::Json => json::to_json(result).map_err(AiReadyError::Json),
        OutputFormat::Md => Ok(md::to_markdown(result)),
    }
}
