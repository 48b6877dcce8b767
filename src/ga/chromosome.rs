//! Day-offset chromosome for maintenance scheduling.
//!
//! # Encoding
//!
//! One gene per machine, in fleet order. Each gene is the number of days
//! until that machine's maintenance, in `0..=MAX_DAY`. The length never
//! changes during a run.

use rand::Rng;
use tracing::instrument;

/// Latest schedulable day offset.
pub const MAX_DAY: u8 = 30;

/// Fitness floor; keeps every candidate strictly positive.
pub const MIN_FITNESS: f64 = 0.1;

/// Candidate maintenance schedule.
///
/// Higher fitness = better schedule (maximization convention).
#[derive(Debug, Clone, PartialEq)]
pub struct MaintenanceChromosome {
    /// Days until maintenance, one per machine.
    pub days: Vec<u8>,
    /// Fitness value (higher = better). `MIN_FITNESS` until evaluated.
    pub fitness: f64,
}

impl MaintenanceChromosome {
    /// Creates a chromosome from explicit day offsets.
    pub fn from_days(days: Vec<u8>) -> Self {
        Self {
            days,
            fitness: MIN_FITNESS,
        }
    }

    /// Creates a chromosome with uniform random genes.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self::from_days((0..len).map(|_| random_day(rng)).collect())
    }

    /// Number of genes.
    #[inline]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Whether the chromosome has no genes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    /// Checks length and gene bounds against a fleet size.
    pub fn is_valid(&self, machine_count: usize) -> bool {
        self.days.len() == machine_count && self.days.iter().all(|&d| d <= MAX_DAY)
    }
}

/// Uniform draw from `0..=MAX_DAY`.
#[inline]
pub fn random_day<R: Rng>(rng: &mut R) -> u8 {
    rng.random_range(0..=MAX_DAY)
}

// ======================== Selection ========================

/// Binary tournament selection.
///
/// Fills `count` parent slots; each slot holds the fitter of two uniformly
/// drawn members (ties go to the second draw).
pub fn tournament_select<'p, R: Rng>(
    population: &'p [MaintenanceChromosome],
    count: usize,
    rng: &mut R,
) -> Vec<&'p MaintenanceChromosome> {
    if population.is_empty() {
        return Vec::new();
    }
    (0..count)
        .map(|_| {
            let a = &population[rng.random_range(0..population.len())];
            let b = &population[rng.random_range(0..population.len())];
            if a.fitness > b.fitness { a } else { b }
        })
        .collect()
}

// ======================== Crossover ========================

/// Single-point crossover.
///
/// Picks a cut point in `0..len` and returns `p1[..point] ++ p2[point..]`.
/// A cut at 0 copies `p2` whole.
pub fn single_point_crossover<R: Rng>(
    p1: &MaintenanceChromosome,
    p2: &MaintenanceChromosome,
    rng: &mut R,
) -> MaintenanceChromosome {
    debug_assert_eq!(p1.len(), p2.len());
    if p1.is_empty() {
        return MaintenanceChromosome::from_days(Vec::new());
    }
    let point = rng.random_range(0..p1.len());
    crossover_at(p1, p2, point)
}

#[instrument(level = "trace", skip(p1, p2), fields(genome_length = p1.len()))]
fn crossover_at(
    p1: &MaintenanceChromosome,
    p2: &MaintenanceChromosome,
    point: usize,
) -> MaintenanceChromosome {
    let mut days = Vec::with_capacity(p1.len());
    days.extend_from_slice(&p1.days[..point]);
    days.extend_from_slice(&p2.days[point..]);
    MaintenanceChromosome::from_days(days)
}

// ======================== Mutation ========================

/// Reset mutation: each gene is redrawn uniformly with probability `rate`.
pub fn reset_mutation<R: Rng>(chromosome: &mut MaintenanceChromosome, rate: f64, rng: &mut R) {
    for day in chromosome.days.iter_mut() {
        if rng.random::<f64>() < rate {
            *day = random_day(rng);
        }
    }
}
