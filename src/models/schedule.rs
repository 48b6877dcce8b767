//! Maintenance schedule (solution) model.
//!
//! The optimizer's output: one schedule entry per machine, derived from
//! the best chromosome, plus fleet-level aggregates. Entries are pure
//! functions of (machine, scheduled day) and are rebuilt on every run.

use serde::{Deserialize, Serialize};

use super::Machine;

/// Failure risk above which a machine is high priority.
pub const HIGH_PRIORITY_RISK: f64 = 70.0;

/// Failure risk above which a machine is medium priority.
pub const MEDIUM_PRIORITY_RISK: f64 = 40.0;

/// Maintenance urgency class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Failure risk at or below 40.
    Low,
    /// Failure risk above 40, at or below 70.
    Medium,
    /// Failure risk above 70.
    High,
}

impl Priority {
    /// Classifies a failure risk score.
    pub fn from_failure_risk(risk: f64) -> Self {
        if risk > HIGH_PRIORITY_RISK {
            Priority::High
        } else if risk > MEDIUM_PRIORITY_RISK {
            Priority::Medium
        } else {
            Priority::Low
        }
    }

    /// Lowercase label, as used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended maintenance for a single machine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceSchedule {
    /// Machine this entry refers to.
    pub machine_id: String,
    /// Days from now until maintenance (0..=30).
    pub days_till_maintenance: u8,
    /// Urgency derived from failure risk.
    pub priority: Priority,
    /// Reported (undiscounted) cost of the visit.
    pub estimated_cost: u32,
    /// Reported failure-risk reduction, in percent.
    pub failure_risk_reduction: u8,
}

impl MaintenanceSchedule {
    /// Builds the entry for `machine` serviced in `days` days.
    ///
    /// Reporting uses a fixed two-tier risk mapping (40% / 15%), which is
    /// not the day-dependent reduction the fitness function scores.
    pub fn for_machine(machine: &Machine, days: u8) -> Self {
        Self {
            machine_id: machine.id.clone(),
            days_till_maintenance: days,
            priority: Priority::from_failure_risk(machine.failure_risk),
            estimated_cost: machine.maintenance_cost(),
            failure_risk_reduction: if machine.is_high_risk() { 40 } else { 15 },
        }
    }

    /// Whether maintenance falls within the next `days` days (inclusive).
    #[inline]
    pub fn is_due_within(&self, days: u8) -> bool {
        self.days_till_maintenance <= days
    }
}

/// Outcome of one optimizer invocation.
///
/// Immutable once returned; serialized in the dashboard's JSON shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizationResult {
    /// One entry per input machine, in input order.
    pub schedules: Vec<MaintenanceSchedule>,
    /// Sum of reported entry costs.
    pub total_cost: u64,
    /// Mean reported risk reduction, in percent.
    pub expected_uptime: f64,
    /// Generations executed.
    pub generation: usize,
    /// Best fitness, rounded.
    pub fitness: i64,
}

impl OptimizationResult {
    /// Number of scheduled machines.
    pub fn machine_count(&self) -> usize {
        self.schedules.len()
    }

    /// Looks up the entry for a machine.
    pub fn schedule_for(&self, machine_id: &str) -> Option<&MaintenanceSchedule> {
        self.schedules.iter().find(|s| s.machine_id == machine_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_thresholds() {
        assert_eq!(Priority::from_failure_risk(85.0), Priority::High);
        assert_eq!(Priority::from_failure_risk(70.0), Priority::Medium);
        assert_eq!(Priority::from_failure_risk(55.0), Priority::Medium);
        assert_eq!(Priority::from_failure_risk(40.0), Priority::Low);
        assert_eq!(Priority::from_failure_risk(10.0), Priority::Low);
    }

    #[test]
    fn test_priority_ordering() {
        assert!(Priority::High > Priority::Medium);
        assert!(Priority::Medium > Priority::Low);
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn test_entry_for_machine() {
        let m = Machine::new("M1").with_health(30.0).with_failure_risk(90.0);
        let entry = MaintenanceSchedule::for_machine(&m, 4);
        assert_eq!(entry.machine_id, "M1");
        assert_eq!(entry.days_till_maintenance, 4);
        assert_eq!(entry.priority, Priority::High);
        assert_eq!(entry.estimated_cost, 800);
        assert_eq!(entry.failure_risk_reduction, 40);
        assert!(entry.is_due_within(4));
        assert!(!entry.is_due_within(3));
    }

    #[test]
    fn test_entry_ignores_scheduled_day_for_cost() {
        let m = Machine::new("M1").with_health(95.0).with_failure_risk(20.0);
        let early = MaintenanceSchedule::for_machine(&m, 0);
        let late = MaintenanceSchedule::for_machine(&m, 30);
        assert_eq!(early.estimated_cost, 600);
        assert_eq!(late.estimated_cost, 600);
        assert_eq!(early.failure_risk_reduction, 15);
    }

    #[test]
    fn test_result_wire_shape() {
        let m = Machine::new("M1").with_health(90.0).with_failure_risk(10.0);
        let result = OptimizationResult {
            schedules: vec![MaintenanceSchedule::for_machine(&m, 7)],
            total_cost: 600,
            expected_uptime: 15.0,
            generation: 3,
            fitness: 42,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["schedules"][0]["machineId"], "M1");
        assert_eq!(json["schedules"][0]["daysTillMaintenance"], 7);
        assert_eq!(json["schedules"][0]["priority"], "low");
        assert_eq!(json["schedules"][0]["estimatedCost"], 600);
        assert_eq!(json["schedules"][0]["failureRiskReduction"], 15);
        assert_eq!(json["totalCost"], 600);
        assert_eq!(json["expectedUptime"], 15.0);
        assert_eq!(json["generation"], 3);
        assert_eq!(json["fitness"], 42);
        assert!(result.schedule_for("M1").is_some());
        assert_eq!(result.machine_count(), 1);
    }
}
