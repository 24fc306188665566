//! MCTS configuration parameters.

use crate::error::{Result, SearchError};

/// MCTS configuration parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct MctsConfig {
    /// Number of simulations per search.
    pub num_simulations: usize,

    /// UCB1 exploration constant X.
    /// score(a) = average(a) + X * sqrt(ln(N) / n(a))
    /// 0 = pure exploitation, larger values favor rarely tried actions.
    pub exploration_constant: f64,
}

impl Default for MctsConfig {
    fn default() -> Self {
        Self {
            num_simulations: 1000,
            exploration_constant: std::f64::consts::SQRT_2,
        }
    }
}

impl MctsConfig {
    /// Create a new config with the specified number of simulations.
    pub fn with_simulations(num_simulations: usize) -> Self {
        Self {
            num_simulations,
            ..Default::default()
        }
    }

    /// Replace the exploration constant.
    pub fn with_exploration(mut self, exploration_constant: f64) -> Self {
        self.exploration_constant = exploration_constant;
        self
    }

    /// Check that the parameters can drive a search.
    ///
    /// # Errors
    /// Returns `SearchError::InvalidConfig` if the exploration constant is
    /// negative, NaN or infinite.
    pub fn validate(&self) -> Result<()> {
        if !self.exploration_constant.is_finite() || self.exploration_constant < 0.0 {
            return Err(SearchError::InvalidConfig(format!(
                "exploration constant {} must be finite and non-negative",
                self.exploration_constant
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MctsConfig::default();
        assert_eq!(config.num_simulations, 1000);
        assert!((config.exploration_constant - 2f64.sqrt()).abs() < 1e-12);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_simulations() {
        let config = MctsConfig::with_simulations(100);
        assert_eq!(config.num_simulations, 100);
        // Exploration stays at the default
        assert!((config.exploration_constant - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_with_exploration() {
        let config = MctsConfig::with_simulations(10).with_exploration(1.0);
        assert_eq!(config.num_simulations, 10);
        assert_eq!(config.exploration_constant, 1.0);
    }

    #[test]
    fn test_validate_rejects_bad_exploration() {
        for x in [-0.1, f64::NAN, f64::INFINITY] {
            let config = MctsConfig::default().with_exploration(x);
            assert!(matches!(
                config.validate(),
                Err(SearchError::InvalidConfig(_))
            ));
        }
        assert!(MctsConfig::default().with_exploration(0.0).validate().is_ok());
    }
}
