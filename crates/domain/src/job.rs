// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Job cards and the pure job filter.
//!
//! Jobs move to `completed` only through the supervisor close action.
//! Creation, cancellation and reassignment are not modelled.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The kind of work a job card describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobType {
    Maintenance,
    Cleaning,
    Inspection,
    Repair,
}

impl JobType {
    /// Returns the string representation of the job type.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Maintenance => "maintenance",
            Self::Cleaning => "cleaning",
            Self::Inspection => "inspection",
            Self::Repair => "repair",
        }
    }
}

impl FromStr for JobType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "maintenance" => Ok(Self::Maintenance),
            "cleaning" => Ok(Self::Cleaning),
            "inspection" => Ok(Self::Inspection),
            "repair" => Ok(Self::Repair),
            _ => Err(DomainError::InvalidJobType(s.to_string())),
        }
    }
}

/// Job urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JobPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl JobPriority {
    /// Returns the string representation of the priority.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }
}

impl FromStr for JobPriority {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(DomainError::InvalidJobPriority(s.to_string())),
        }
    }
}

/// Job lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum JobStatus {
    Pending,
    InProgress,
    Completed,
    Cancelled,
}

impl JobStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in-progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Returns true if the job can no longer be closed.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Completed | Self::Cancelled)
    }
}

impl FromStr for JobStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "in-progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidJobStatus(s.to_string())),
        }
    }
}

impl std::fmt::Display for JobStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A maintenance, cleaning, inspection or repair job card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: String,
    pub train_id: String,
    #[serde(rename = "type")]
    pub job_type: JobType,
    pub title: String,
    pub description: String,
    pub priority: JobPriority,
    pub status: JobStatus,
    pub assigned_to: String,
    pub estimated_duration: String,
    /// Percent complete, `0..=100`.
    pub progress: u8,
    pub start_time: String,
    pub due_time: String,
    /// Free-text location. `"Bay <id>"` names a depot bay.
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_by: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub closed_at: Option<String>,
}

impl Job {
    /// Marks the job completed by `closed_by` at `closed_at`.
    ///
    /// Callers check `status.is_terminal()` first; this only writes fields.
    pub fn mark_completed(&mut self, closed_by: &str, closed_at: &str) {
        self.status = JobStatus::Completed;
        self.progress = 100;
        self.closed_by = Some(closed_by.to_string());
        self.closed_at = Some(closed_at.to_string());
    }
}

/// Search and filter criteria for listing jobs.
///
/// `None` filters mean "all".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JobQuery {
    /// Case-insensitive substring matched against title, train and assignee.
    pub search: String,
    pub status: Option<JobStatus>,
    pub job_type: Option<JobType>,
}

impl JobQuery {
    /// Returns whether a job satisfies every criterion of the query.
    #[must_use]
    pub fn matches(&self, job: &Job) -> bool {
        let term: String = self.search.to_lowercase();
        let matches_search: bool = job.title.to_lowercase().contains(&term)
            || job.train_id.to_lowercase().contains(&term)
            || job.assigned_to.to_lowercase().contains(&term);
        let matches_status: bool = self.status.is_none_or(|status| job.status == status);
        let matches_type: bool = self.job_type.is_none_or(|job_type| job.job_type == job_type);

        matches_search && matches_status && matches_type
    }
}

/// Job counts shown above the job board.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobStats {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub completed: usize,
    /// Jobs with critical priority, regardless of status.
    pub critical: usize,
}

impl JobStats {
    /// Counts jobs by status and priority.
    #[must_use]
    pub fn from_jobs<'a>(jobs: impl IntoIterator<Item = &'a Job>) -> Self {
        jobs.into_iter().fold(Self::default(), |mut stats, job| {
            stats.total += 1;
            match job.status {
                JobStatus::Pending => stats.pending += 1,
                JobStatus::InProgress => stats.in_progress += 1,
                JobStatus::Completed => stats.completed += 1,
                JobStatus::Cancelled => {}
            }
            if job.priority == JobPriority::Critical {
                stats.critical += 1;
            }
            stats
        })
    }
}

/// The job board a fresh install is seeded with.
#[must_use]
pub fn default_jobs() -> Vec<Job> {
    vec![
        Job {
            id: String::from("JOB-001"),
            train_id: String::from("KRISHNA"),
            job_type: JobType::Maintenance,
            title: String::from("A-Check Service"),
            description: String::from(
                "Complete A-check service including brake inspection, door mechanism check, and HVAC system test.",
            ),
            priority: JobPriority::High,
            status: JobStatus::InProgress,
            assigned_to: String::from("Team Alpha"),
            estimated_duration: String::from("6 hours"),
            progress: 65,
            start_time: String::from("22:00"),
            due_time: String::from("04:00"),
            location: String::from("Bay A-01"),
            closed_by: None,
            closed_at: None,
        },
        Job {
            id: String::from("JOB-002"),
            train_id: String::from("NILA"),
            job_type: JobType::Cleaning,
            title: String::from("Deep Cleaning"),
            description: String::from(
                "Complete interior and exterior cleaning including seat sanitization and floor deep clean.",
            ),
            priority: JobPriority::Medium,
            status: JobStatus::Pending,
            assigned_to: String::from("Cleaning Team-1"),
            estimated_duration: String::from("3 hours"),
            progress: 0,
            start_time: String::from("01:00"),
            due_time: String::from("04:00"),
            location: String::from("Bay C-01"),
            closed_by: None,
            closed_at: None,
        },
        Job {
            id: String::from("JOB-003"),
            train_id: String::from("VAAYU"),
            job_type: JobType::Repair,
            title: String::from("Emergency Brake Repair"),
            description: String::from(
                "Urgent brake system repair due to hydraulic leak detected during routine inspection.",
            ),
            priority: JobPriority::Critical,
            status: JobStatus::InProgress,
            assigned_to: String::from("Emergency Team"),
            estimated_duration: String::from("4 hours"),
            progress: 30,
            start_time: String::from("20:30"),
            due_time: String::from("00:30"),
            location: String::from("Bay B-02"),
            closed_by: None,
            closed_at: None,
        },
        Job {
            id: String::from("JOB-004"),
            train_id: String::from("ARUTH"),
            job_type: JobType::Inspection,
            title: String::from("Monthly Safety Inspection"),
            description: String::from(
                "Comprehensive safety inspection including all safety systems, emergency equipment, and passenger safety features.",
            ),
            priority: JobPriority::High,
            status: JobStatus::Completed,
            assigned_to: String::from("Inspection Team"),
            estimated_duration: String::from("2 hours"),
            progress: 100,
            start_time: String::from("18:00"),
            due_time: String::from("20:00"),
            location: String::from("Bay A-03"),
            closed_by: Some(String::from("Supervisor Rajesh")),
            closed_at: Some(String::from("19:45")),
        },
        Job {
            id: String::from("JOB-005"),
            train_id: String::from("JHANAVI"),
            job_type: JobType::Maintenance,
            title: String::from("HVAC System Service"),
            description: String::from(
                "Regular HVAC maintenance including filter replacement, system calibration, and performance testing.",
            ),
            priority: JobPriority::Medium,
            status: JobStatus::Pending,
            assigned_to: String::from("HVAC Team"),
            estimated_duration: String::from("2.5 hours"),
            progress: 0,
            start_time: String::from("23:00"),
            due_time: String::from("01:30"),
            location: String::from("Bay A-04"),
            closed_by: None,
            closed_at: None,
        },
    ]
}
