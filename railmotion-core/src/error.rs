use thiserror::Error;

#[derive(Debug, Error)]
pub enum RailmotionError {
    #[error("SerdeAPI::init failed: {0}")]
    Init(String),
    #[error("Simulation failed: {0}")]
    Simulation(String),
    #[error("{0}")]
    Other(String),
}

pub type RailmotionResult<T> = Result<T, RailmotionError>;
