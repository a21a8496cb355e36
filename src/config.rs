use crate::{error::*, mdps::convergence::VALUE_TOLERANCE, Continuous};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};

/// Parameters of a value iteration run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Reward of moving from one cell to another.
    pub living_reward: Continuous,

    /// Discount coefficient applied to the successor value.
    pub discount: Continuous,

    /// Depth of computation, i.e. how many turns the agent can play.
    pub steps: usize,

    /// Values are converged once every cell moved strictly less than this.
    pub tolerance: Continuous,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            living_reward: -0.01,
            discount: 1.,
            steps: 10,
            tolerance: VALUE_TOLERANCE,
        }
    }
}

impl SolverConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config = serde_json::from_str::<Self>(json)?;
        config.validate()?;

        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json(&fs::read_to_string(path)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.living_reward.is_finite() {
            return Err(MdpError::InvalidConfig(format!(
                "living reward must be finite, got {}",
                self.living_reward
            )));
        }

        if !(0. ..=1.).contains(&self.discount) {
            return Err(MdpError::InvalidConfig(format!(
                "discount must be within [0, 1], got {}",
                self.discount
            )));
        }

        if !self.tolerance.is_finite() || self.tolerance <= 0. {
            return Err(MdpError::InvalidConfig(format!(
                "tolerance must be positive, got {}",
                self.tolerance
            )));
        }

        Ok(())
    }
}
