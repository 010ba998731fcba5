use thiserror::Error;

/// Evaluation budget used when none is configured.
pub const DEFAULT_MAX_EVALUATIONS: usize = 100;

/// Configuration shared by the root solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawConfig")
)]
pub struct Config {
    max_evaluations: usize,
}

/// Errors that can occur when validating a solver config.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    #[error("max_evaluations must be at least 1")]
    ZeroEvaluations,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_evaluations: DEFAULT_MAX_EVALUATIONS,
        }
    }
}

impl Config {
    /// Creates a new config with a validated evaluation budget.
    ///
    /// # Errors
    ///
    /// Returns an error if `max_evaluations` is zero.
    pub fn new(max_evaluations: usize) -> Result<Self, ConfigError> {
        if max_evaluations == 0 {
            return Err(ConfigError::ZeroEvaluations);
        }
        Ok(Self { max_evaluations })
    }

    /// Returns the maximum number of objective evaluations per solve.
    #[must_use]
    pub fn max_evaluations(&self) -> usize {
        self.max_evaluations
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawConfig {
    #[serde(default = "default_max_evaluations")]
    max_evaluations: usize,
}

#[cfg(feature = "serde")]
fn default_max_evaluations() -> usize {
    DEFAULT_MAX_EVALUATIONS
}

#[cfg(feature = "serde")]
impl TryFrom<RawConfig> for Config {
    type Error = ConfigError;

    fn try_from(raw: RawConfig) -> Result<Self, Self::Error> {
        Self::new(raw.max_evaluations)
    }
}
