use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiReadyError {
    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("no html content to analyze: {0}")]
    EmptyContent(String),

    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("request timed out: {0}")]
    Timeout(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AiReadyError>;
