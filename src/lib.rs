pub mod analyzer;
pub mod checks;
pub mod config;
pub mod error;
pub mod fetch;
pub mod report;
pub mod scoring;
pub mod text;
pub mod types;
pub mod urls;

pub use analyzer::{analyze_website, AnalyzerInput};
pub use error::{AiReadyError, Result};
pub use types::report::{AnalysisResult, CheckResult, PageMetadata, Status};
