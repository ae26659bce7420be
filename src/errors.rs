use thiserror::Error;

/// Failures from the layers around the engine: scenario files and settings.
/// The forecasting functions themselves never fail.
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid scenario: {0}")]
    InvalidScenario(String),
    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CashflowError>;
