// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod bay;
mod dashboard;
mod depot;
mod error;
mod fleet;
mod induction;
mod job;
mod reports;
mod session;
mod settings;

#[cfg(test)]
mod tests;

pub use bay::{
    BAY_LOCATION_PREFIX, Bay, BaySection, BayStatus, READY_ACTIVITY, bay_id_from_location,
    default_bay_layout,
};
pub use dashboard::{
    Alert, AlertSeverity, AlertState, BrandingContract, DashboardOverview, FleetKpis,
    PunctualityPoint, ScheduledMaintenance, Shift, TodayMetrics, TrainOverview, static_dashboard,
};
pub use depot::{DepotSummary, SectionLayout};
pub use error::DomainError;
pub use fleet::{CleaningStatus, FleetSnapshot, FleetStats, TrainSnapshot, TrainStatus};
pub use induction::{
    ConstraintCheck, ConstraintStatus, InductionPlan, InductionSummary, MaintenanceAssignment,
    ServiceAssignment, static_induction_plan,
};
pub use job::{Job, JobPriority, JobQuery, JobStats, JobStatus, JobType, default_jobs};
pub use reports::{
    AuditEntry, AuditOutcome, ComplianceMetrics, KpiSummary, KpiTarget, MaintenanceAnalytics,
    MonthlyPerformance, OperationsReport, static_operations_report,
};
pub use session::{Role, Session};
pub use settings::{
    AccountStatus, AlertSetting, Integration, IntegrationHealth, IntegrationStatus, ModelSettings,
    SystemConfig, SystemSettings, UserAccount, static_system_settings,
};
