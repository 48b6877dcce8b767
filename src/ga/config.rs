//! GA run configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{OptimizeError, Result};

/// Default population size.
pub const DEFAULT_POPULATION_SIZE: usize = 50;

/// Default generation count for direct library calls.
pub const DEFAULT_GENERATIONS: usize = 20;

/// Default per-gene mutation probability.
pub const DEFAULT_MUTATION_RATE: f64 = 0.15;

/// Largest accepted population size.
pub const MAX_POPULATION_SIZE: usize = 100_000;

/// Largest accepted generation count.
pub const MAX_GENERATIONS: usize = 1_000_000;

/// Default share of the population carried over unchanged.
pub const DEFAULT_ELITE_RATIO: f64 = 0.10;

/// Genetic algorithm parameters.
///
/// # Example
/// ```
/// use u_maintenance::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(30)
///     .with_max_generations(10)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.elite_count(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GaConfig {
    /// Chromosomes per generation (1..=`MAX_POPULATION_SIZE`).
    pub population_size: usize,
    /// Generations to run (1..=`MAX_GENERATIONS`).
    pub max_generations: usize,
    /// Per-gene mutation probability (0.0..=1.0).
    pub mutation_rate: f64,
    /// Share of the population kept as elite (0.0..=1.0).
    pub elite_ratio: f64,
    /// Fixed RNG seed. `None` seeds from OS entropy.
    pub seed: Option<u64>,
    /// Wall-clock budget in milliseconds, checked once per generation.
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: DEFAULT_POPULATION_SIZE,
            max_generations: DEFAULT_GENERATIONS,
            mutation_rate: DEFAULT_MUTATION_RATE,
            elite_ratio: DEFAULT_ELITE_RATIO,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, size: usize) -> Self {
        self.population_size = size;
        self
    }

    /// Sets the number of generations.
    pub fn with_max_generations(mut self, generations: usize) -> Self {
        self.max_generations = generations;
        self
    }

    /// Sets the per-gene mutation probability.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the elite share.
    pub fn with_elite_ratio(mut self, ratio: f64) -> Self {
        self.elite_ratio = ratio;
        self
    }

    /// Fixes the RNG seed for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets a wall-clock budget for the run.
    pub fn with_time_limit(mut self, limit: Duration) -> Self {
        self.time_limit_ms = Some(limit.as_millis().min(u64::MAX as u128) as u64);
        self
    }

    /// Wall-clock budget, if any.
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit_ms.map(Duration::from_millis)
    }

    /// Number of elite chromosomes: `ceil(population_size * elite_ratio)`,
    /// never more than the population.
    pub fn elite_count(&self) -> usize {
        ((self.population_size as f64 * self.elite_ratio).ceil() as usize).min(self.population_size)
    }

    /// Rejects out-of-bounds parameters.
    pub fn validate(&self) -> Result<()> {
        if self.population_size == 0 {
            return Err(OptimizeError::InvalidConfiguration(
                "population_size must be at least 1".into(),
            ));
        }
        if self.population_size > MAX_POPULATION_SIZE {
            return Err(OptimizeError::InvalidConfiguration(format!(
                "population_size must be at most {MAX_POPULATION_SIZE}, got: {}",
                self.population_size
            )));
        }
        if self.max_generations == 0 {
            return Err(OptimizeError::InvalidConfiguration(
                "max_generations must be at least 1".into(),
            ));
        }
        if self.max_generations > MAX_GENERATIONS {
            return Err(OptimizeError::InvalidConfiguration(format!(
                "max_generations must be at most {MAX_GENERATIONS}, got: {}",
                self.max_generations
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(OptimizeError::InvalidConfiguration(format!(
                "mutation_rate must be between 0.0 and 1.0, got: {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.elite_ratio) {
            return Err(OptimizeError::InvalidConfiguration(format!(
                "elite_ratio must be between 0.0 and 1.0, got: {}",
                self.elite_ratio
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GaConfig::default();
        assert_eq!(config.population_size, 50);
        assert_eq!(config.max_generations, 20);
        assert!((config.mutation_rate - 0.15).abs() < 1e-12);
        assert_eq!(config.elite_count(), 5);
        assert!(config.seed.is_none());
        assert!(config.time_limit().is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_elite_count_rounds_up() {
        assert_eq!(GaConfig::default().with_population_size(1).elite_count(), 1);
        assert_eq!(GaConfig::default().with_population_size(5).elite_count(), 1);
        assert_eq!(GaConfig::default().with_population_size(11).elite_count(), 2);
        assert_eq!(
            GaConfig::default()
                .with_population_size(4)
                .with_elite_ratio(0.0)
                .elite_count(),
            0
        );
    }

    #[test]
    fn test_rejects_zero_population() {
        let err = GaConfig::default()
            .with_population_size(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_rejects_zero_generations() {
        assert!(GaConfig::default().with_max_generations(0).validate().is_err());
    }

    #[test]
    fn test_rejects_oversized_population_and_generations() {
        assert!(GaConfig::default()
            .with_population_size(MAX_POPULATION_SIZE)
            .validate()
            .is_ok());
        assert!(matches!(
            GaConfig::default()
                .with_population_size(MAX_POPULATION_SIZE + 1)
                .validate(),
            Err(OptimizeError::InvalidConfiguration(_))
        ));
        assert!(matches!(
            GaConfig::default().with_max_generations(usize::MAX).validate(),
            Err(OptimizeError::InvalidConfiguration(_))
        ));
        assert!(GaConfig::default()
            .with_max_generations(MAX_GENERATIONS)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_rejects_mutation_rate_out_of_range() {
        assert!(GaConfig::default().with_mutation_rate(1.5).validate().is_err());
        assert!(GaConfig::default().with_mutation_rate(-0.1).validate().is_err());
        assert!(GaConfig::default()
            .with_mutation_rate(f64::NAN)
            .validate()
            .is_err());
        assert!(GaConfig::default().with_mutation_rate(0.0).validate().is_ok());
        assert!(GaConfig::default().with_mutation_rate(1.0).validate().is_ok());
    }

    #[test]
    fn test_rejects_elite_ratio_out_of_range() {
        assert!(GaConfig::default().with_elite_ratio(1.01).validate().is_err());
    }

    #[test]
    fn test_time_limit_round_trip() {
        let config = GaConfig::default().with_time_limit(Duration::from_millis(250));
        assert_eq!(config.time_limit(), Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_deserialize_partial_config() {
        let config: GaConfig =
            serde_json::from_str(r#"{"population_size": 12, "seed": 3}"#).unwrap();
        assert_eq!(config.population_size, 12);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.max_generations, DEFAULT_GENERATIONS);
    }
}
