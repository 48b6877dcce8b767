//! Maintenance optimizer entry points, result assembly and KPIs.
//!
//! # Flow
//!
//! 1. Validate the fleet and configuration (nothing runs on failure).
//! 2. Evolve schedules with [`GaRunner`](crate::ga::GaRunner).
//! 3. Assemble the best-ever chromosome into an [`OptimizationResult`].
//!
//! Every call allocates its own population; concurrent calls on different
//! fleets share nothing.

mod kpi;
mod report;

pub use kpi::{DEFERRED_DAYS, DUE_SOON_DAYS, MaintenanceKpi};
pub use report::build_result;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use tracing::instrument;

use crate::error::Result;
use crate::ga::{CancelToken, EvolutionOutcome, GaConfig, GaRunner, MaintenanceProblem};
use crate::models::{Machine, OptimizationResult};
use crate::validation::validate_machines;

/// Optimizes a maintenance schedule with entropy-seeded randomness.
///
/// # Errors
/// `InvalidInput` for an empty or malformed fleet, `InvalidConfiguration`
/// for out-of-range parameters.
///
/// # Example
/// ```
/// use u_maintenance::models::Machine;
/// use u_maintenance::scheduler::optimize;
///
/// let fleet = vec![Machine::new("M1").with_health(90.0).with_failure_risk(10.0)];
/// let result = optimize(&fleet, 5, 3, 0.1).unwrap();
/// assert_eq!(result.schedules.len(), 1);
/// assert_eq!(result.schedules[0].estimated_cost, 600);
/// ```
pub fn optimize(
    machines: &[Machine],
    population_size: usize,
    generations: usize,
    mutation_rate: f64,
) -> Result<OptimizationResult> {
    let config = GaConfig::default()
        .with_population_size(population_size)
        .with_max_generations(generations)
        .with_mutation_rate(mutation_rate);
    MaintenanceOptimizer::new(config).optimize(machines)
}

/// Optimizes a maintenance schedule using a caller-supplied generator.
pub fn optimize_with_rng<R: Rng>(
    machines: &[Machine],
    config: &GaConfig,
    rng: &mut R,
) -> Result<OptimizationResult> {
    MaintenanceOptimizer::new(config.clone()).optimize_with_rng(machines, rng)
}

/// Configured maintenance optimizer.
///
/// # Example
///
/// ```
/// use u_maintenance::ga::{CancelToken, GaConfig};
/// use u_maintenance::models::Machine;
/// use u_maintenance::scheduler::MaintenanceOptimizer;
///
/// let fleet = vec![
///     Machine::new("M1").with_health(90.0).with_failure_risk(10.0),
///     Machine::new("M2").with_health(30.0).with_failure_risk(90.0),
/// ];
/// let token = CancelToken::new();
/// let optimizer = MaintenanceOptimizer::new(GaConfig::default().with_seed(42))
///     .with_cancel_token(token.clone());
///
/// let result = optimizer.optimize(&fleet).unwrap();
/// assert_eq!(result.schedules.len(), 2);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MaintenanceOptimizer {
    config: GaConfig,
    cancel: Option<CancelToken>,
}

impl MaintenanceOptimizer {
    /// Creates an optimizer with the given configuration.
    pub fn new(config: GaConfig) -> Self {
        Self {
            config,
            cancel: None,
        }
    }

    /// Attaches a cancellation token checked once per generation.
    pub fn with_cancel_token(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    /// The active configuration.
    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    /// Optimizes using the configured seed, or OS entropy when unset.
    pub fn optimize(&self, machines: &[Machine]) -> Result<OptimizationResult> {
        let mut rng = match self.config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_os_rng(),
        };
        self.optimize_with_rng(machines, &mut rng)
    }

    /// Optimizes using `rng` for every random draw.
    pub fn optimize_with_rng<R: Rng>(
        &self,
        machines: &[Machine],
        rng: &mut R,
    ) -> Result<OptimizationResult> {
        let outcome = self.evolve(machines, rng)?;
        Ok(build_result(
            machines,
            &outcome.best,
            outcome.best_fitness,
            outcome.generations,
        ))
    }

    /// Validates inputs and runs the GA, returning the raw outcome.
    #[instrument(level = "debug", skip_all, fields(machines = machines.len()))]
    pub fn evolve<R: Rng>(&self, machines: &[Machine], rng: &mut R) -> Result<EvolutionOutcome> {
        validate_machines(machines)?;
        self.config.validate()?;

        let problem = MaintenanceProblem::new(machines);
        GaRunner::run(&problem, &self.config, rng, self.cancel.as_ref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OptimizeError;
    use crate::models::Priority;

    fn sample_fleet() -> Vec<Machine> {
        vec![
            Machine::new("M1").with_health(90.0).with_failure_risk(10.0),
            Machine::new("M2").with_health(30.0).with_failure_risk(90.0),
            Machine::new("M3").with_health(65.0).with_failure_risk(55.0),
        ]
    }

    #[test]
    fn test_optimize_shape() {
        let fleet = sample_fleet();
        let result = optimize(&fleet, 20, 10, 0.15).unwrap();
        assert_eq!(result.schedules.len(), 3);
        assert_eq!(result.generation, 10);
        for (entry, machine) in result.schedules.iter().zip(&fleet) {
            assert_eq!(entry.machine_id, machine.id);
            assert!(entry.days_till_maintenance <= 30);
        }
        assert_eq!(result.schedules[1].priority, Priority::High);
    }

    #[test]
    fn test_seeded_optimizer_is_reproducible() {
        let fleet = sample_fleet();
        let optimizer = MaintenanceOptimizer::new(GaConfig::default().with_seed(11));
        assert_eq!(
            optimizer.optimize(&fleet).unwrap(),
            optimizer.optimize(&fleet).unwrap()
        );
    }

    #[test]
    fn test_empty_fleet_rejected() {
        let err = optimize(&[], 50, 20, 0.15).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn test_validation_precedes_configuration() {
        let err = optimize(&[], 0, 0, 5.0).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidInput(_)));
    }

    #[test]
    fn test_zero_population_rejected() {
        let err = optimize(&sample_fleet(), 0, 20, 0.15).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_oversized_generations_rejected_before_running() {
        let optimizer = MaintenanceOptimizer::new(
            GaConfig::default()
                .with_max_generations(usize::MAX)
                .with_time_limit(std::time::Duration::from_millis(20))
                .with_seed(1),
        );
        assert_eq!(optimizer.config().max_generations, usize::MAX);
        let err = optimizer.optimize(&sample_fleet()).unwrap_err();
        assert!(matches!(err, OptimizeError::InvalidConfiguration(_)));
    }

    #[test]
    fn test_cancelled_run_reports_executed_generations() {
        let token = CancelToken::new();
        token.cancel();
        let optimizer = MaintenanceOptimizer::new(GaConfig::default().with_seed(5))
            .with_cancel_token(token);

        let result = optimizer.optimize(&sample_fleet()).unwrap();
        assert_eq!(result.generation, 1);
        assert_eq!(result.schedules.len(), 3);
    }
}
