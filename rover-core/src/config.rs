use crate::coordinates::Position;
use crate::grid::GridBounds;
use crate::rover::{MoveStrategy, RoverState};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoverConfig {
    pub grid: GridBounds,
    pub start: RoverState,
    pub move_strategy: MoveStrategy,
    pub allow_backward: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    Parse(String),
    StartOutsideGrid(Position),
}

impl RoverConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.grid.contains(self.start.position) {
            return Err(ConfigError::StartOutsideGrid(self.start.position));
        }
        Ok(())
    }
}

impl Default for RoverConfig {
    fn default() -> Self {
        Self {
            grid: GridBounds::default(),
            start: RoverState::default(),
            move_strategy: MoveStrategy::default(),
            allow_backward: false,
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(message) => write!(f, "invalid rover config: {}", message),
            ConfigError::StartOutsideGrid(position) => write!(
                f,
                "start position ({}, {}) is not on the grid",
                position.x, position.y
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
