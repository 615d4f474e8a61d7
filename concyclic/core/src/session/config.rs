//! Board configuration

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Smallest accepted board side
pub const MIN_BOUND: i32 = 4;

/// Largest accepted board side
pub const MAX_BOUND: i32 = 19;

/// Errors raised by configuration validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("bound {bound} outside {min}..={max}")]
    BoundOutOfRange { bound: i32, min: i32, max: i32 },
}

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Board side; only points with `x < bound` and `y > -bound` are searched
    pub bound: i32,

    /// Whether the current circle and count are shown
    #[serde(default = "default_display")]
    pub display_computation: bool,
}

fn default_display() -> bool {
    true
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            bound: 10,
            display_computation: true,
        }
    }
}

impl SessionConfig {
    pub fn with_bound(bound: i32) -> Result<Self, ConfigError> {
        let config = Self {
            bound,
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        check_bound(self.bound)
    }
}

pub(crate) fn check_bound(bound: i32) -> Result<(), ConfigError> {
    if !(MIN_BOUND..=MAX_BOUND).contains(&bound) {
        return Err(ConfigError::BoundOutOfRange {
            bound,
            min: MIN_BOUND,
            max: MAX_BOUND,
        });
    }
    Ok(())
}
