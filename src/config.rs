//! Benchmark configuration.
//!
//! A single immutable value passed explicitly into the pipeline, so every
//! component's behavior is a pure function of its declared inputs.

use crate::error::{ConfigError, Result};

/// Configuration for a benchmark run.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchConfig {
    /// Seed for the train/eval split shuffle.
    pub seed: u64,
    /// Requested evaluation set size (may shrink for small pools).
    pub eval_size: usize,
    /// Maximum number of training indices to emit.
    pub max_train: usize,
    /// Fusion weight: 1.0 is pure lexical, 0.0 is pure dense.
    pub alpha: f32,
    /// Recall cutoffs to report.
    pub ks: Vec<usize>,
    /// Passed opaquely to the embedding provider.
    pub max_seq_length: usize,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            eval_size: 300,
            max_train: 2000,
            alpha: 0.5,
            ks: vec![1, 5, 10],
            max_seq_length: 512,
        }
    }
}

impl BenchConfig {
    /// Validate the configuration before any computation proceeds.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::AlphaOutOfRange(self.alpha).into());
        }
        if self.ks.is_empty() {
            return Err(ConfigError::EmptyKs.into());
        }
        if self.ks.contains(&0) {
            return Err(ConfigError::NonPositiveK.into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_default_config_is_valid() {
        let config = BenchConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.seed, 42);
        assert_eq!(config.ks, vec![1, 5, 10]);
    }

    #[test]
    fn test_alpha_out_of_range() {
        let config = BenchConfig {
            alpha: 1.2,
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::AlphaOutOfRange(_)))
        ));

        let config = BenchConfig {
            alpha: -0.1,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());

        let config = BenchConfig {
            alpha: f32::NAN,
            ..BenchConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bad_ks_rejected() {
        let config = BenchConfig {
            ks: Vec::new(),
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::EmptyKs))
        ));

        let config = BenchConfig {
            ks: vec![1, 0, 5],
            ..BenchConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::Config(ConfigError::NonPositiveK))
        ));
    }
}
