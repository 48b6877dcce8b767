//! Fleet maintenance metrics (KPIs).
//!
//! Summarizes an optimization result for the operations dashboard.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Priority counts | Machines per `high`/`medium`/`low` class |
//! | Due this week | Machines scheduled within `DUE_SOON_DAYS` |
//! | Avg days | Mean days until maintenance |
//! | Deferred high | High-priority machines scheduled `DEFERRED_DAYS` or later |
//! | Avg cost | Mean reported cost per machine |

use serde::Serialize;

use crate::models::{OptimizationResult, Priority};

/// Window counted as "due soon", in days.
pub const DUE_SOON_DAYS: u8 = 7;

/// Day from which a high-priority visit counts as deferred.
pub const DEFERRED_DAYS: u8 = 15;

/// Fleet maintenance indicators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaintenanceKpi {
    /// Machines in the plan.
    pub machine_count: usize,
    /// High-priority machines.
    pub high_priority: usize,
    /// Medium-priority machines.
    pub medium_priority: usize,
    /// Low-priority machines.
    pub low_priority: usize,
    /// Machines due within `DUE_SOON_DAYS`.
    pub due_soon: usize,
    /// High-priority machines scheduled at or after `DEFERRED_DAYS`.
    pub deferred_high_priority: usize,
    /// Mean days until maintenance.
    pub avg_days_till_maintenance: f64,
    /// Mean reported cost per machine.
    pub avg_cost: f64,
    /// Expected uptime carried over from the result.
    pub expected_uptime: f64,
}

impl MaintenanceKpi {
    /// Computes KPIs from an optimization result.
    pub fn calculate(result: &OptimizationResult) -> Self {
        let mut high = 0;
        let mut medium = 0;
        let mut low = 0;
        let mut due_soon = 0;
        let mut deferred_high = 0;
        let mut total_days: u64 = 0;

        for s in &result.schedules {
            match s.priority {
                Priority::High => {
                    high += 1;
                    if s.days_till_maintenance >= DEFERRED_DAYS {
                        deferred_high += 1;
                    }
                }
                Priority::Medium => medium += 1,
                Priority::Low => low += 1,
            }
            if s.is_due_within(DUE_SOON_DAYS) {
                due_soon += 1;
            }
            total_days += s.days_till_maintenance as u64;
        }

        let n = result.schedules.len();
        let (avg_days, avg_cost) = if n == 0 {
            (0.0, 0.0)
        } else {
            (
                total_days as f64 / n as f64,
                result.total_cost as f64 / n as f64,
            )
        };

        Self {
            machine_count: n,
            high_priority: high,
            medium_priority: medium,
            low_priority: low,
            due_soon,
            deferred_high_priority: deferred_high,
            avg_days_till_maintenance: avg_days,
            avg_cost,
            expected_uptime: result.expected_uptime,
        }
    }

    /// Whether the plan meets operator limits.
    pub fn meets_thresholds(&self, max_deferred_high: usize, min_expected_uptime: f64) -> bool {
        self.deferred_high_priority <= max_deferred_high
            && self.expected_uptime >= min_expected_uptime
    }
}
