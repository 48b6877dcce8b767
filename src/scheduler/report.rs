//! Result assembly.
//!
//! Turns the best chromosome into per-machine schedule entries and fleet
//! aggregates. Deterministic: the same inputs always produce the same
//! result.

use crate::ga::MaintenanceChromosome;
use crate::models::{Machine, MaintenanceSchedule, OptimizationResult};

/// Builds the optimization result for `best`.
///
/// # Arguments
/// * `machines` - The fleet, in the order the chromosome encodes.
/// * `best` - Best chromosome found.
/// * `best_fitness` - Its fitness (rounded in the output).
/// * `generations` - Generations executed.
pub fn build_result(
    machines: &[Machine],
    best: &MaintenanceChromosome,
    best_fitness: f64,
    generations: usize,
) -> OptimizationResult {
    let schedules: Vec<MaintenanceSchedule> = machines
        .iter()
        .zip(best.days.iter())
        .map(|(m, &day)| MaintenanceSchedule::for_machine(m, day))
        .collect();

    let total_cost = schedules.iter().map(|s| s.estimated_cost as u64).sum();

    // 100 - mean(100 - reduction), accumulated per entry.
    let n = schedules.len() as f64;
    let expected_uptime = if schedules.is_empty() {
        0.0
    } else {
        100.0
            - schedules
                .iter()
                .map(|s| (100.0 - s.failure_risk_reduction as f64) / n)
                .sum::<f64>()
    };

    OptimizationResult {
        schedules,
        total_cost,
        expected_uptime,
        generation: generations,
        fitness: best_fitness.round() as i64,
    }
}
