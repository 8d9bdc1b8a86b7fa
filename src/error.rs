use thiserror::Error;

#[derive(Debug, Error)]
pub enum RangeStatsError {
    #[error("Invalid chart: {0}")]
    InvalidChart(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
