//! Maintenance domain models.
//!
//! Provides the input snapshot (`Machine`) and the optimizer's output
//! types (`MaintenanceSchedule`, `OptimizationResult`).
//!
//! # Domain Mappings
//!
//! | u-maintenance | Plant floor | Dashboard |
//! |---------------|-------------|-----------|
//! | Machine | Press/Lathe/Conveyor | Machine card |
//! | MaintenanceSchedule | Work order | Schedule table row |
//! | OptimizationResult | Maintenance plan | Optimizer panel |

mod machine;
mod schedule;

pub use machine::{DEGRADED_HEALTH, HIGH_RISK, Machine, ROUTINE_SERVICE_HEALTH};
pub use schedule::{
    HIGH_PRIORITY_RISK, MEDIUM_PRIORITY_RISK, MaintenanceSchedule, OptimizationResult, Priority,
};
