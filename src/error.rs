use crate::{Continuous, Discrete};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MdpError {
    #[error("Grid dimensions must be positive, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },

    #[error("Exit ({x}, {y}) has a non-finite reward: {reward}")]
    NonFiniteReward {
        x: Discrete,
        y: Discrete,
        reward: Continuous,
    },

    #[error("Invalid solver configuration: {0}")]
    InvalidConfig(String),

    #[error("Cannot solve with zero steps")]
    NoIterations,

    #[error("Config parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, MdpError>;
