//! Predictive-maintenance scheduling for the U-Engine ecosystem.
//!
//! Evolves per-machine maintenance timing with a genetic algorithm that
//! balances modeled cost, failure-risk reduction and uptime gain.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Machine`, `Priority`, `MaintenanceSchedule`,
//!   `OptimizationResult`
//! - **`validation`**: Fleet integrity checks (empty fleet, duplicate IDs, bad readings)
//! - **`ga`**: Chromosome encoding, fitness, operators, and the generation loop
//! - **`scheduler`**: `optimize` entry points, result assembly, fleet KPIs
//! - **`api`**: JSON boundary adapter with field defaulting and status mapping
//! - **`error`**: `OptimizeError` (`InvalidInput`, `InvalidConfiguration`)
//!
//! # Example
//!
//! ```
//! use u_maintenance::ga::GaConfig;
//! use u_maintenance::models::{Machine, Priority};
//! use u_maintenance::scheduler::MaintenanceOptimizer;
//!
//! let fleet = vec![
//!     Machine::new("CNC-1").with_health(92.0).with_failure_risk(12.0),
//!     Machine::new("PRESS-2").with_health(41.0).with_failure_risk(78.0),
//! ];
//! let result = MaintenanceOptimizer::new(GaConfig::default().with_seed(1))
//!     .optimize(&fleet)
//!     .unwrap();
//!
//! assert_eq!(result.schedules[1].priority, Priority::High);
//! assert_eq!(result.total_cost, 600 + 800);
//! ```
//!
//! # References
//!
//! - Goldberg (1989), "Genetic Algorithms in Search, Optimization, and Machine Learning"
//! - Jardine et al. (2006), "A review on machinery diagnostics and prognostics"

pub mod api;
pub mod error;
pub mod ga;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::OptimizeError;
