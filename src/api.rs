//! JSON boundary adapter.
//!
//! Maps the dashboard's request/response wire shapes onto the strict core.
//! This is the only layer that fills in missing machine fields; the core
//! rejects incomplete machines instead.
//!
//! No transport is included: callers hand in a request body and get back a
//! status code plus JSON body.
//!
//! # Defaults
//!
//! | Field | Default |
//! |-------|---------|
//! | `id` | `machine-<random>` |
//! | `name` | `Unknown Machine` |
//! | `health` | 50 |
//! | `temp` | 60 |
//! | `vibration` | 5 |
//! | `lastMaintenance` | 10 |
//! | `failureRisk` | 30 |
//! | `populationSize` | 50 |
//! | `generations` | 25 |
//! | `mutationRate` | 0.15 |

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::instrument;

use crate::error::OptimizeError;
use crate::ga::{
    DEFAULT_MUTATION_RATE, DEFAULT_POPULATION_SIZE, GaConfig, MAX_GENERATIONS,
    MAX_POPULATION_SIZE,
};
use crate::models::{Machine, OptimizationResult};
use crate::scheduler::MaintenanceOptimizer;
use crate::validation::{ValidationError, ValidationErrorKind};

/// Generations used when a request omits `generations`.
pub const DEFAULT_REQUEST_GENERATIONS: usize = 25;

/// Body message when `machines` is missing or not an array.
pub const INVALID_MACHINES_MESSAGE: &str = "Invalid machines array";

/// Body message for rejected machine data or configuration.
pub const INVALID_DATA_MESSAGE: &str = "unable to optimize: missing or invalid machine data";

/// Body message for unexpected failures.
pub const INTERNAL_ERROR_MESSAGE: &str = "Failed to optimize maintenance schedule";

/// A machine as received on the wire; every field may be absent.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MachineInput {
    /// Machine identifier.
    pub id: Option<String>,
    /// Human-readable name.
    pub name: Option<String>,
    /// Condition score, 0..=100.
    pub health: Option<f64>,
    /// Temperature reading.
    pub temp: Option<f64>,
    /// Vibration reading.
    pub vibration: Option<f64>,
    /// Days since last maintenance (whole, non-negative).
    pub last_maintenance: Option<f64>,
    /// Failure risk, 0..=100.
    pub failure_risk: Option<f64>,
}

impl MachineInput {
    /// Fills missing fields with boundary defaults.
    ///
    /// Only absent or `null` fields are defaulted; explicit zeros are kept.
    pub fn into_machine<R: Rng>(self, rng: &mut R) -> Result<Machine, ValidationError> {
        let id = self
            .id
            .filter(|id| !id.is_empty())
            .unwrap_or_else(|| format!("machine-{}", rng.random::<f64>()));
        let days = whole_days(&id, self.last_maintenance.unwrap_or(10.0))?;

        Ok(Machine {
            name: self.name.unwrap_or_else(|| "Unknown Machine".to_string()),
            health: self.health.unwrap_or(50.0),
            temperature: self.temp.unwrap_or(60.0),
            vibration: self.vibration.unwrap_or(5.0),
            days_since_maintenance: days,
            failure_risk: self.failure_risk.unwrap_or(30.0),
            id,
        })
    }
}

fn whole_days(id: &str, value: f64) -> Result<u32, ValidationError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= u32::MAX as f64 {
        Ok(value as u32)
    } else {
        Err(ValidationError::new(
            ValidationErrorKind::MalformedField,
            format!("Machine '{id}' has invalid lastMaintenance: {value}"),
        ))
    }
}

/// Optimization request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeRequest {
    /// Fleet to schedule.
    pub machines: Vec<MachineInput>,
    /// Chromosomes per generation.
    pub population_size: Option<f64>,
    /// Generations to run.
    pub generations: Option<f64>,
    /// Per-gene mutation probability.
    pub mutation_rate: Option<f64>,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
}

impl OptimizeRequest {
    /// Builds the GA configuration, applying request defaults.
    pub fn to_config(&self) -> Result<GaConfig, OptimizeError> {
        let population_size = count_param(
            "populationSize",
            self.population_size.unwrap_or(DEFAULT_POPULATION_SIZE as f64),
            MAX_POPULATION_SIZE,
        )?;
        let generations = count_param(
            "generations",
            self.generations.unwrap_or(DEFAULT_REQUEST_GENERATIONS as f64),
            MAX_GENERATIONS,
        )?;

        let mut config = GaConfig::default()
            .with_population_size(population_size)
            .with_max_generations(generations)
            .with_mutation_rate(self.mutation_rate.unwrap_or(DEFAULT_MUTATION_RATE));
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        config.validate()?;
        Ok(config)
    }

    /// Converts wire machines into core machines.
    pub fn to_machines<R: Rng>(&self, rng: &mut R) -> Result<Vec<Machine>, OptimizeError> {
        let mut machines = Vec::with_capacity(self.machines.len());
        let mut errors = Vec::new();
        for input in &self.machines {
            match input.clone().into_machine(rng) {
                Ok(m) => machines.push(m),
                Err(e) => errors.push(e),
            }
        }
        if errors.is_empty() {
            Ok(machines)
        } else {
            Err(OptimizeError::InvalidInput(errors))
        }
    }
}

fn count_param(name: &str, value: f64, max: usize) -> Result<usize, OptimizeError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= max as f64 {
        Ok(value as usize)
    } else {
        Err(OptimizeError::InvalidConfiguration(format!(
            "{name} must be an integer in 0..={max}, got: {value}"
        )))
    }
}

/// Successful optimization response body.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizeResponse {
    /// Always `true` for a completed run.
    pub success: bool,
    /// The optimized plan.
    pub optimization: OptimizationResult,
    /// Completion time (UTC, ISO-8601 on the wire).
    pub timestamp: DateTime<Utc>,
}

/// Boundary failure.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// `machines` is missing or not an array.
    #[error("machines is missing or not an array")]
    InvalidMachines,
    /// Machine data or configuration was rejected.
    #[error(transparent)]
    Optimize(#[from] OptimizeError),
    /// Unexpected failure, e.g. an unparseable body.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// HTTP status code for this failure.
    pub fn status_code(&self) -> u16 {
        match self {
            ApiError::InvalidMachines | ApiError::Optimize(_) => 400,
            ApiError::Internal(_) => 500,
        }
    }

    /// Client-facing message; never includes internal details.
    pub fn public_message(&self) -> &'static str {
        match self {
            ApiError::InvalidMachines => INVALID_MACHINES_MESSAGE,
            ApiError::Optimize(_) => INVALID_DATA_MESSAGE,
            ApiError::Internal(_) => INTERNAL_ERROR_MESSAGE,
        }
    }
}

/// Status code and JSON body for a handled request.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiReply {
    /// HTTP status code.
    pub status: u16,
    /// JSON response body.
    pub body: Value,
}

impl From<ApiError> for ApiReply {
    fn from(err: ApiError) -> Self {
        Self {
            status: err.status_code(),
            body: json!({ "error": err.public_message() }),
        }
    }
}

/// Runs an already-parsed request.
pub fn handle_request(request: &OptimizeRequest) -> Result<OptimizeResponse, ApiError> {
    let config = request.to_config()?;
    let machines = request.to_machines(&mut rand::rng())?;
    let optimization = MaintenanceOptimizer::new(config).optimize(&machines)?;

    Ok(OptimizeResponse {
        success: true,
        optimization,
        timestamp: Utc::now(),
    })
}

/// Handles a raw JSON request body.
#[instrument(level = "info", skip_all, fields(body_len = body.len()))]
pub fn handle_json(body: &str) -> ApiReply {
    match process(body) {
        Ok(reply) => reply,
        Err(err) => {
            match &err {
                ApiError::Internal(detail) => {
                    tracing::error!(error = %detail, "maintenance optimization failed")
                }
                other => tracing::warn!(error = %other, "maintenance optimization rejected"),
            }
            err.into()
        }
    }
}

fn process(body: &str) -> Result<ApiReply, ApiError> {
    let value: Value =
        serde_json::from_str(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    if !value.get("machines").is_some_and(Value::is_array) {
        return Err(ApiError::InvalidMachines);
    }

    let request: OptimizeRequest = serde_json::from_value(value).map_err(|e| {
        OptimizeError::InvalidInput(vec![ValidationError::new(
            ValidationErrorKind::MalformedField,
            e.to_string(),
        )])
    })?;

    let response = handle_request(&request)?;
    let body = serde_json::to_value(&response).map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(ApiReply { status: 200, body })
}
