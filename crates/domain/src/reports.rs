// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Performance and compliance reports. Fixed display data.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPerformance {
    pub month: String,
    pub punctuality: f64,
    pub availability: f64,
    pub efficiency: f64,
    /// Operating cost in lakh rupees.
    pub cost: f64,
}

/// Work done per maintenance category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaintenanceAnalytics {
    #[serde(rename = "type")]
    pub maintenance_type: String,
    pub completed: u32,
    pub scheduled: u32,
    pub cost: u64,
    pub efficiency: u32,
}

/// A KPI against its target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiTarget {
    pub current: f64,
    pub target: f64,
    pub trend: String,
}

impl KpiTarget {
    /// Whether `current` meets `target`. For cost, lower is better.
    #[must_use]
    pub const fn meets(&self, lower_is_better: bool) -> bool {
        if lower_is_better {
            self.current <= self.target
        } else {
            self.current >= self.target
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KpiSummary {
    pub punctuality: KpiTarget,
    pub availability: KpiTarget,
    /// Mean distance between failures, in km.
    pub mtbf: KpiTarget,
    pub cost: KpiTarget,
    pub efficiency: KpiTarget,
    pub safety: KpiTarget,
}

/// How an audited action was carried out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditOutcome {
    Success,
    Automated,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub timestamp: String,
    pub user: String,
    pub action: String,
    pub module: String,
    pub status: AuditOutcome,
}

/// Compliance scores, as percentages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceMetrics {
    pub safety_compliance: f64,
    pub environmental_compliance: f64,
    pub regulatory_compliance: f64,
    pub quality_standards: f64,
    pub data_privacy: f64,
}

/// The reports page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationsReport {
    pub monthly_performance: Vec<MonthlyPerformance>,
    pub maintenance_analytics: Vec<MaintenanceAnalytics>,
    pub kpi_summary: KpiSummary,
    pub audit_trail: Vec<AuditEntry>,
    pub compliance: ComplianceMetrics,
}

fn month(
    month: &str,
    punctuality: f64,
    availability: f64,
    efficiency: f64,
    cost: f64,
) -> MonthlyPerformance {
    MonthlyPerformance {
        month: month.to_string(),
        punctuality,
        availability,
        efficiency,
        cost,
    }
}

fn analytics(
    maintenance_type: &str,
    completed: u32,
    scheduled: u32,
    cost: u64,
    efficiency: u32,
) -> MaintenanceAnalytics {
    MaintenanceAnalytics {
        maintenance_type: maintenance_type.to_string(),
        completed,
        scheduled,
        cost,
        efficiency,
    }
}

fn kpi(current: f64, target: f64, trend: &str) -> KpiTarget {
    KpiTarget {
        current,
        target,
        trend: trend.to_string(),
    }
}

fn audit(
    timestamp: &str,
    user: &str,
    action: &str,
    module: &str,
    status: AuditOutcome,
) -> AuditEntry {
    AuditEntry {
        timestamp: timestamp.to_string(),
        user: user.to_string(),
        action: action.to_string(),
        module: module.to_string(),
        status,
    }
}

/// Returns the reports page data. The audit trail is newest first.
#[must_use]
pub fn static_operations_report() -> OperationsReport {
    use AuditOutcome::{Automated, Manual, Success};

    OperationsReport {
        monthly_performance: vec![
            month("Jan", 99.2, 94.5, 87.3, 28.5),
            month("Feb", 99.4, 95.1, 88.7, 27.8),
            month("Mar", 99.1, 93.8, 86.9, 29.2),
            month("Apr", 99.6, 96.2, 89.4, 26.9),
            month("May", 99.3, 95.7, 88.1, 28.1),
            month("Jun", 99.5, 96.8, 90.2, 25.6),
        ],
        maintenance_analytics: vec![
            analytics("Preventive", 145, 160, 1_250_000, 91),
            analytics("Corrective", 89, 95, 890_000, 94),
            analytics("Emergency", 23, 18, 450_000, 78),
            analytics("Overhaul", 12, 15, 2_100_000, 80),
        ],
        kpi_summary: KpiSummary {
            punctuality: kpi(99.5, 99.5, "+0.2%"),
            availability: kpi(96.8, 95.0, "+1.8%"),
            mtbf: kpi(125_000.0, 120_000.0, "+4.2%"),
            cost: kpi(25.6, 28.0, "-8.6%"),
            efficiency: kpi(90.2, 88.0, "+2.5%"),
            safety: kpi(99.98, 99.95, "+0.03%"),
        },
        audit_trail: vec![
            audit("2024-09-24 22:15", "Rajesh Kumar", "Approved induction plan", "AI Planning", Success),
            audit("2024-09-24 21:45", "System AI", "Generated optimal induction plan", "ML Engine", Automated),
            audit("2024-09-24 21:30", "Suresh Nair", "Updated train KMRL-07 maintenance status", "Maintenance", Success),
            audit("2024-09-24 21:15", "Anil Jose", "Override AI recommendation for KMRL-12", "Manual Override", Manual),
            audit("2024-09-24 20:45", "System", "Maximo data sync completed", "Data Integration", Automated),
        ],
        compliance: ComplianceMetrics {
            safety_compliance: 99.8,
            environmental_compliance: 97.2,
            regulatory_compliance: 99.5,
            quality_standards: 96.8,
            data_privacy: 100.0,
        },
    }
}
