use thiserror::Error;

/// Errors surfaced by the chart and its buffer.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid chart configuration: {0}")]
    Configuration(String),

    #[error("sample transform failed: {0}")]
    Transform(#[source] eyre::Report),

    #[error("renderer failed to load series: {0}")]
    Render(#[source] eyre::Report),

    #[error("failed to parse chart options: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type ChartResult<T> = std::result::Result<T, ChartError>;
