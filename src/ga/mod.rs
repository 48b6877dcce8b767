//! GA-based maintenance schedule optimization.
//!
//! Evolves one maintenance day offset per machine, trading off modeled
//! cost, failure-risk reduction and uptime gain.
//!
//! # Encoding
//!
//! A chromosome is a vector of day offsets in `0..=30`, positionally
//! aligned with the machine fleet.
//!
//! # Operators
//!
//! - Binary tournament selection
//! - Elitism (top `ceil(population_size * elite_ratio)`)
//! - Single-point crossover
//! - Per-gene reset mutation
//!
//! # Reference
//! Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"

mod chromosome;
mod config;
mod problem;
mod runner;

pub use chromosome::{
    MAX_DAY, MIN_FITNESS, MaintenanceChromosome, random_day, reset_mutation,
    single_point_crossover, tournament_select,
};
pub use config::{
    DEFAULT_ELITE_RATIO, DEFAULT_GENERATIONS, DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE,
    GaConfig, MAX_GENERATIONS, MAX_POPULATION_SIZE,
};
pub use problem::{EARLY_RISK_WINDOW, EARLY_UPTIME_WINDOW, FitnessBreakdown, MaintenanceProblem};
pub use runner::{CancelToken, EvolutionOutcome, GaRunner, GenerationStats};
