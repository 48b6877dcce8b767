//! Machine model.
//!
//! A machine is a read-only snapshot of a production asset's condition,
//! as supplied by the machine registry. The optimizer never mutates it.
//!
//! # Reference
//! Jardine et al. (2006), "A review on machinery diagnostics and prognostics
//! implementing condition-based maintenance"

use serde::{Deserialize, Serialize};

/// Health at or above which a machine only needs routine service.
pub const ROUTINE_SERVICE_HEALTH: f64 = 80.0;

/// Health below which a machine counts as degraded.
pub const DEGRADED_HEALTH: f64 = 60.0;

/// Failure risk above which a machine counts as high-risk.
pub const HIGH_RISK: f64 = 50.0;

/// A machine condition snapshot.
///
/// Field names on the wire follow the registry's JSON shape
/// (`temp`, `lastMaintenance`, `failureRisk`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Machine {
    /// Unique machine identifier.
    pub id: String,
    /// Human-readable name.
    #[serde(default)]
    pub name: String,
    /// Condition score, 0..=100 (100 = perfect).
    pub health: f64,
    /// Current temperature reading.
    #[serde(rename = "temp")]
    pub temperature: f64,
    /// Current vibration reading.
    pub vibration: f64,
    /// Days elapsed since the last maintenance.
    #[serde(rename = "lastMaintenance")]
    pub days_since_maintenance: u32,
    /// Near-term failure risk, 0..=100.
    pub failure_risk: f64,
}

impl Machine {
    /// Creates a machine with neutral readings.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            health: 100.0,
            temperature: 0.0,
            vibration: 0.0,
            days_since_maintenance: 0,
            failure_risk: 0.0,
        }
    }

    /// Sets the machine name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the health score.
    pub fn with_health(mut self, health: f64) -> Self {
        self.health = health;
        self
    }

    /// Sets the temperature reading.
    pub fn with_temperature(mut self, temperature: f64) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the vibration reading.
    pub fn with_vibration(mut self, vibration: f64) -> Self {
        self.vibration = vibration;
        self
    }

    /// Sets days since last maintenance.
    pub fn with_days_since_maintenance(mut self, days: u32) -> Self {
        self.days_since_maintenance = days;
        self
    }

    /// Sets the failure risk score.
    pub fn with_failure_risk(mut self, risk: f64) -> Self {
        self.failure_risk = risk;
        self
    }

    /// Whether the machine only needs routine (cheaper) service.
    pub fn needs_routine_service(&self) -> bool {
        self.health > ROUTINE_SERVICE_HEALTH
    }

    /// Whether the machine's health has degraded.
    pub fn is_degraded(&self) -> bool {
        self.health < DEGRADED_HEALTH
    }

    /// Whether the machine carries high failure risk.
    pub fn is_high_risk(&self) -> bool {
        self.failure_risk > HIGH_RISK
    }

    /// Undiscounted cost of one maintenance visit.
    ///
    /// Routine service is 600, invasive repair is 800.
    pub fn maintenance_cost(&self) -> u32 {
        500 + if self.needs_routine_service() { 100 } else { 300 }
    }
}
