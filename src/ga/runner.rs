//! Generational GA loop.
//!
//! # Algorithm
//!
//! 1. Seed `population_size` uniform random chromosomes.
//! 2. Per generation: evaluate, update the best-ever candidate, copy the
//!    elite, fill the rest by tournament selection, single-point crossover
//!    and reset mutation.
//! 3. Return the best-ever candidate, which may have left the population.
//!
//! Offspring of the final generation are not evaluated.
//!
//! # Cancellation
//!
//! A [`CancelToken`] and the configured time limit are checked at the top
//! of every generation after the first, so a stopped run still returns a
//! fully evaluated best candidate.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use rand::Rng;
use tracing::instrument;

use super::chromosome::{
    MaintenanceChromosome, reset_mutation, single_point_crossover, tournament_select,
};
use super::config::GaConfig;
use super::problem::MaintenanceProblem;
use crate::error::Result;

/// Cooperative stop signal shared with a running optimization.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates an untriggered token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests the run to stop at the next generation boundary.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether a stop was requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenerationStats {
    /// Zero-based generation index.
    pub generation: usize,
    /// Best fitness seen so far in the run.
    pub best_fitness: f64,
    /// Best fitness within this generation's population.
    pub population_best: f64,
    /// Mean fitness of this generation's population.
    pub mean_fitness: f64,
}

/// Raw output of a GA run.
#[derive(Debug, Clone)]
pub struct EvolutionOutcome {
    /// Best-ever chromosome.
    pub best: MaintenanceChromosome,
    /// Its fitness.
    pub best_fitness: f64,
    /// Generations executed.
    pub generations: usize,
    /// Whether the run stopped early.
    pub cancelled: bool,
    /// One entry per executed generation.
    pub history: Vec<GenerationStats>,
    /// Wall-clock time spent.
    pub elapsed: Duration,
}

/// Runs the maintenance GA.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaRunner;

impl GaRunner {
    /// Evolves schedules for `problem` under `config`.
    ///
    /// Fails only on an invalid configuration. The fleet is assumed to be
    /// validated and non-empty.
    #[instrument(
        level = "info",
        skip_all,
        fields(
            machines = problem.chromosome_len(),
            population_size = config.population_size,
            generations = config.max_generations,
            mutation_rate = config.mutation_rate,
        )
    )]
    pub fn run<R: Rng>(
        problem: &MaintenanceProblem<'_>,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&CancelToken>,
    ) -> Result<EvolutionOutcome> {
        config.validate()?;

        let started = Instant::now();
        let deadline = config.time_limit().and_then(|limit| started.checked_add(limit));
        let elite_count = config.elite_count();

        let mut population: Vec<MaintenanceChromosome> = (0..config.population_size)
            .map(|_| problem.create_individual(rng))
            .collect();

        let mut best = population[0].clone();
        let mut best_fitness = f64::NEG_INFINITY;
        let mut history = Vec::new();
        let mut cancelled = false;

        for generation in 0..config.max_generations {
            if generation > 0 && should_stop(cancel, deadline) {
                tracing::warn!(generation, best_fitness, "optimization stopped early");
                cancelled = true;
                break;
            }

            for individual in population.iter_mut() {
                individual.fitness = problem.evaluate(individual);
            }

            let (best_idx, population_best) = fittest(&population);
            if population_best > best_fitness {
                best_fitness = population_best;
                best = population[best_idx].clone();
            }

            let mean_fitness =
                population.iter().map(|c| c.fitness).sum::<f64>() / population.len() as f64;
            history.push(GenerationStats {
                generation,
                best_fitness,
                population_best,
                mean_fitness,
            });
            tracing::debug!(
                generation,
                best_fitness,
                population_best,
                mean_fitness,
                "generation evaluated"
            );

            population = next_generation(&population, elite_count, config.mutation_rate, rng);
        }

        let elapsed = started.elapsed();
        tracing::info!(
            generations = history.len(),
            best_fitness,
            elapsed_ms = elapsed.as_millis() as u64,
            "optimization finished"
        );

        Ok(EvolutionOutcome {
            best,
            best_fitness,
            generations: history.len(),
            cancelled,
            history,
            elapsed,
        })
    }
}

fn should_stop(cancel: Option<&CancelToken>, deadline: Option<Instant>) -> bool {
    cancel.is_some_and(CancelToken::is_cancelled)
        || deadline.is_some_and(|d| Instant::now() >= d)
}

/// Index and fitness of the first fittest member.
fn fittest(population: &[MaintenanceChromosome]) -> (usize, f64) {
    population
        .iter()
        .enumerate()
        .fold((0, f64::NEG_INFINITY), |(best_idx, best), (idx, c)| {
            if c.fitness > best {
                (idx, c.fitness)
            } else {
                (best_idx, best)
            }
        })
}

fn next_generation<R: Rng>(
    population: &[MaintenanceChromosome],
    elite_count: usize,
    mutation_rate: f64,
    rng: &mut R,
) -> Vec<MaintenanceChromosome> {
    let size = population.len();

    let mut ranked: Vec<usize> = (0..size).collect();
    ranked.sort_by(|&a, &b| population[b].fitness.total_cmp(&population[a].fitness));

    let mut next = Vec::with_capacity(size);
    next.extend(ranked.iter().take(elite_count).map(|&i| population[i].clone()));

    let parents = tournament_select(population, size, rng);
    while next.len() < size {
        let p1 = parents[rng.random_range(0..parents.len())];
        let p2 = parents[rng.random_range(0..parents.len())];
        let mut child = single_point_crossover(p1, p2, rng);
        reset_mutation(&mut child, mutation_rate, rng);
        next.push(child);
    }
    next
}
