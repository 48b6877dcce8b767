//! Maintenance GA problem definition.
//!
//! Scores a candidate schedule against a fixed machine fleet. The score
//! rewards modeled uptime gain and risk reduction and penalizes cost
//! weighted toward early visits.
//!
//! # Fitness
//!
//! For machine `m` serviced in `d` days:
//!
//! | Term | Value |
//! |------|-------|
//! | cost | `m.maintenance_cost()` if `d == 0`, else `cost / (d + 1)` |
//! | risk reduction | 30 if `m` is high-risk and `d < 15`, else 5 |
//! | uptime gain | 15 if `m` is degraded and `d < 10`, else 5 |
//!
//! `fitness = 10 * Σuptime - 0.5 * Σcost + Σrisk`, floored at `MIN_FITNESS`.

use rand::Rng;

use super::chromosome::{MIN_FITNESS, MaintenanceChromosome};
use crate::models::Machine;

/// Day before which servicing a high-risk machine earns the large risk reduction.
pub const EARLY_RISK_WINDOW: u8 = 15;

/// Day before which servicing a degraded machine earns the large uptime gain.
pub const EARLY_UPTIME_WINDOW: u8 = 10;

/// Per-term totals behind a fitness score.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FitnessBreakdown {
    /// Day-discounted maintenance cost.
    pub total_cost: f64,
    /// Modeled failure-risk reduction.
    pub total_risk_reduction: f64,
    /// Modeled uptime gain.
    pub total_uptime_gain: f64,
}

impl FitnessBreakdown {
    /// Combined score, floored at `MIN_FITNESS`.
    pub fn fitness(&self) -> f64 {
        let raw = self.total_uptime_gain * 10.0 - self.total_cost * 0.5 + self.total_risk_reduction;
        raw.max(MIN_FITNESS)
    }
}

/// GA problem over a read-only machine fleet.
///
/// # Example
/// ```
/// use u_maintenance::ga::{MaintenanceChromosome, MaintenanceProblem};
/// use u_maintenance::models::Machine;
///
/// let fleet = vec![Machine::new("M1").with_health(90.0).with_failure_risk(10.0)];
/// let problem = MaintenanceProblem::new(&fleet);
/// let fitness = problem.evaluate(&MaintenanceChromosome::from_days(vec![5]));
/// assert!((fitness - 5.0).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MaintenanceProblem<'a> {
    machines: &'a [Machine],
}

impl<'a> MaintenanceProblem<'a> {
    /// Creates a problem over the given fleet.
    pub fn new(machines: &'a [Machine]) -> Self {
        Self { machines }
    }

    /// The fleet being scheduled.
    pub fn machines(&self) -> &'a [Machine] {
        self.machines
    }

    /// Number of genes per chromosome.
    pub fn chromosome_len(&self) -> usize {
        self.machines.len()
    }

    /// Creates a uniform random candidate.
    pub fn create_individual<R: Rng>(&self, rng: &mut R) -> MaintenanceChromosome {
        MaintenanceChromosome::random(self.chromosome_len(), rng)
    }

    /// Per-term totals for a candidate.
    pub fn breakdown(&self, individual: &MaintenanceChromosome) -> FitnessBreakdown {
        debug_assert_eq!(individual.len(), self.machines.len());
        self.machines
            .iter()
            .zip(individual.days.iter())
            .fold(FitnessBreakdown::default(), |mut acc, (m, &day)| {
                acc.total_cost += discounted_cost(m, day);
                acc.total_risk_reduction += risk_reduction(m, day);
                acc.total_uptime_gain += uptime_gain(m, day);
                acc
            })
    }

    /// Fitness of a candidate (higher = better).
    pub fn evaluate(&self, individual: &MaintenanceChromosome) -> f64 {
        self.breakdown(individual).fitness()
    }
}

fn discounted_cost(machine: &Machine, day: u8) -> f64 {
    let cost = machine.maintenance_cost() as f64;
    if day == 0 {
        cost
    } else {
        cost / (day as f64 + 1.0)
    }
}

fn risk_reduction(machine: &Machine, day: u8) -> f64 {
    if machine.is_high_risk() && day < EARLY_RISK_WINDOW {
        30.0
    } else {
        5.0
    }
}

fn uptime_gain(machine: &Machine, day: u8) -> f64 {
    if machine.is_degraded() && day < EARLY_UPTIME_WINDOW {
        15.0
    } else {
        5.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn healthy() -> Machine {
        Machine::new("H").with_health(90.0).with_failure_risk(10.0)
    }

    fn critical() -> Machine {
        Machine::new("C").with_health(30.0).with_failure_risk(90.0)
    }

    fn score(machine: Machine, day: u8) -> f64 {
        let fleet = [machine];
        MaintenanceProblem::new(&fleet).evaluate(&MaintenanceChromosome::from_days(vec![day]))
    }

    #[test]
    fn test_healthy_machine_scores() {
        // d=5: 10*5 - 0.5*(600/6) + 5 = 5
        assert!((score(healthy(), 5) - 5.0).abs() < 1e-9);
        // d=29: 10*5 - 0.5*(600/30) + 5 = 45
        assert!((score(healthy(), 29) - 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_fitness_floor() {
        // d=0: 50 - 300 + 5 < 0
        assert_eq!(score(healthy(), 0), MIN_FITNESS);
        assert_eq!(score(critical(), 1), MIN_FITNESS);
    }

    #[test]
    fn test_critical_machine_prefers_day_nine() {
        // d=9: 10*15 - 0.5*(800/10) + 30 = 140
        assert!((score(critical(), 9) - 140.0).abs() < 1e-9);
        let best = (0..=30u8)
            .max_by(|&a, &b| score(critical(), a).total_cmp(&score(critical(), b)))
            .unwrap();
        assert_eq!(best, 9);
    }

    #[test]
    fn test_breakdown_terms() {
        let fleet = vec![healthy(), critical()];
        let problem = MaintenanceProblem::new(&fleet);
        let b = problem.breakdown(&MaintenanceChromosome::from_days(vec![0, 14]));

        assert!((b.total_cost - (600.0 + 800.0 / 15.0)).abs() < 1e-9);
        assert!((b.total_risk_reduction - 35.0).abs() < 1e-9);
        assert!((b.total_uptime_gain - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_is_pure() {
        let fleet = vec![healthy(), critical(), healthy().with_failure_risk(60.0)];
        let problem = MaintenanceProblem::new(&fleet);
        let mut rng = SmallRng::seed_from_u64(42);
        let ch = problem.create_individual(&mut rng);

        let first = problem.evaluate(&ch);
        for _ in 0..5 {
            assert_eq!(problem.evaluate(&ch), first);
        }
        assert!(first >= MIN_FITNESS);
        assert!(ch.is_valid(problem.chromosome_len()));
    }
}
