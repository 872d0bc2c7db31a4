// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The nightly induction plan shown to operators.
//!
//! The plan is a fixed display fixture. No algorithm produces it and nothing
//! reads it back.

use serde::{Deserialize, Serialize};

/// Headline figures of an induction plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InductionSummary {
    pub generated_at: String,
    pub planning_window: String,
    pub confidence: f64,
    pub total_trains: u32,
    pub service: u32,
    pub standby: u32,
    pub maintenance: u32,
    pub optimization_score: f64,
    pub estimated_savings: u64,
}

/// A train assigned to revenue service or standby.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceAssignment {
    pub train_id: String,
    pub confidence: f64,
    pub health_score: u32,
    pub mileage: u32,
    pub bay: String,
    pub reason: String,
}

/// A train held back for maintenance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MaintenanceAssignment {
    pub train_id: String,
    pub priority: String,
    pub work_type: String,
    pub duration: String,
    pub bay: String,
    pub issue: String,
    pub cost: u64,
}

/// Whether a planning constraint was met.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConstraintStatus {
    Satisfied,
    Optimized,
}

/// One line of the constraint checklist.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintCheck {
    pub constraint: String,
    pub status: ConstraintStatus,
    pub details: String,
}

/// The full plan as displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InductionPlan {
    pub summary: InductionSummary,
    pub service: Vec<ServiceAssignment>,
    pub standby: Vec<ServiceAssignment>,
    pub maintenance: Vec<MaintenanceAssignment>,
    pub constraints: Vec<ConstraintCheck>,
}

fn service(
    train_id: &str,
    confidence: f64,
    health_score: u32,
    mileage: u32,
    bay: &str,
    reason: &str,
) -> ServiceAssignment {
    ServiceAssignment {
        train_id: train_id.to_string(),
        confidence,
        health_score,
        mileage,
        bay: bay.to_string(),
        reason: reason.to_string(),
    }
}

fn maintenance(
    train_id: &str,
    priority: &str,
    work_type: &str,
    duration: &str,
    bay: &str,
    issue: &str,
    cost: u64,
) -> MaintenanceAssignment {
    MaintenanceAssignment {
        train_id: train_id.to_string(),
        priority: priority.to_string(),
        work_type: work_type.to_string(),
        duration: duration.to_string(),
        bay: bay.to_string(),
        issue: issue.to_string(),
        cost,
    }
}

fn constraint(name: &str, status: ConstraintStatus, details: &str) -> ConstraintCheck {
    ConstraintCheck {
        constraint: name.to_string(),
        status,
        details: details.to_string(),
    }
}

/// Returns the induction plan shown on the planning page.
#[must_use]
pub fn static_induction_plan() -> InductionPlan {
    InductionPlan {
        summary: InductionSummary {
            generated_at: String::from("21:45 IST"),
            planning_window: String::from("21:00 - 23:00 IST"),
            confidence: 94.7,
            total_trains: 25,
            service: 18,
            standby: 3,
            maintenance: 4,
            optimization_score: 92.3,
            estimated_savings: 147_000,
        },
        service: vec![
            service("KRISHNA", 96.2, 94, 42_150, "A1", "Optimal health, branding commitment fulfilled"),
            service("NILA", 94.8, 91, 35_200, "A2", "High reliability, balanced mileage"),
            service("ARUTH", 93.1, 89, 39_500, "A3", "Good condition, commercial priority"),
            service("JHANAVI", 95.5, 93, 36_800, "A4", "Excellent health metrics"),
            service("BHAVANI", 91.7, 87, 41_200, "B1", "Adequate condition, route optimization"),
        ],
        standby: vec![
            service("TAPTI", 88.4, 85, 43_800, "C1", "Scheduled for cleaning, backup ready"),
            service("DHWANIL", 87.2, 82, 40_100, "C2", "Minor maintenance completed, reserve capacity"),
            service("YAMUNA", 89.6, 86, 38_900, "C3", "Flexibility buffer, optimal positioning"),
        ],
        maintenance: vec![
            maintenance("VAAYU", "High", "A-Check Service", "6h", "IBL-1", "15,000 km maintenance due", 85_000),
            maintenance("PAMPA", "Critical", "Door System Repair", "4h", "IBL-2", "Door mechanism failure", 120_000),
            maintenance("MAARUT", "Medium", "HVAC Maintenance", "3h", "IBL-3", "Temperature control issues", 45_000),
            maintenance("KABANI", "High", "Brake Inspection", "5h", "IBL-4", "Brake pad replacement", 75_000),
        ],
        constraints: vec![
            constraint("Fitness Certificates", ConstraintStatus::Satisfied, "All service trains have valid certificates"),
            constraint("Maintenance Windows", ConstraintStatus::Optimized, "4 trains scheduled for optimal timing"),
            constraint("Bay Capacity", ConstraintStatus::Satisfied, "No depot capacity conflicts"),
            constraint("Branding Commitments", ConstraintStatus::Satisfied, "All advertiser SLAs maintained"),
            constraint("Mileage Balancing", ConstraintStatus::Optimized, "Variance reduced by 18%"),
            constraint("Crew Availability", ConstraintStatus::Satisfied, "Night shift capacity adequate"),
        ],
    }
}
