// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fleet snapshot types for the train explorer.
//!
//! Snapshots are display data. Nothing in the depot state depends on them.

use serde::{Deserialize, Serialize};

/// Operating status of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainStatus {
    Active,
    Maintenance,
    Inactive,
}

/// Interior cleaning state of a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CleaningStatus {
    Clean,
    Pending,
    Dirty,
}

/// One train as seen by the fleet explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainSnapshot {
    /// Train identifier (e.g. `"KMRL-07"`).
    pub id: String,
    pub model: String,
    pub status: TrainStatus,
    pub location: String,
    /// Health percentage.
    pub health_score: u32,
    pub total_mileage: u32,
    /// ISO date (`YYYY-MM-DD`).
    pub last_maintenance: String,
    /// ISO date (`YYYY-MM-DD`).
    pub next_maintenance: String,
    /// Days until maintenance is due.
    pub maintenance_due: u32,
    pub fitness_valid: bool,
    /// ISO date (`YYYY-MM-DD`).
    pub fitness_expiry: String,
    pub cleaning_status: CleaningStatus,
    pub critical_issues: u32,
    pub battery_level: u32,
    /// Zero unless the train is running.
    pub current_speed: u32,
    /// Zero unless the train is running.
    pub passenger_load: u32,
    pub avg_daily_mileage: u32,
    pub manufacture_year: u32,
    pub assigned_crew: String,
    pub bay: String,
}

/// Aggregate counts over a fleet snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetStats {
    pub total: usize,
    pub active: usize,
    pub maintenance: usize,
    /// Trains with at least one critical issue.
    pub critical: usize,
    /// Mean health score, rounded to the nearest integer. Zero for an empty fleet.
    pub avg_health: u32,
}

/// A point-in-time view of the whole fleet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetSnapshot {
    pub trains: Vec<TrainSnapshot>,
}

impl FleetSnapshot {
    /// Creates a snapshot from a list of trains.
    #[must_use]
    pub const fn new(trains: Vec<TrainSnapshot>) -> Self {
        Self { trains }
    }

    /// Finds a train by exact identifier.
    #[must_use]
    pub fn find(&self, train_id: &str) -> Option<&TrainSnapshot> {
        self.trains.iter().find(|train| train.id == train_id)
    }

    /// Returns trains whose id or location contains `term`, ignoring case.
    #[must_use]
    pub fn search(&self, term: &str) -> Vec<&TrainSnapshot> {
        let term: String = term.to_lowercase();
        self.trains
            .iter()
            .filter(|train| {
                train.id.to_lowercase().contains(&term)
                    || train.location.to_lowercase().contains(&term)
            })
            .collect()
    }

    /// Computes the fleet header counts.
    #[must_use]
    pub fn stats(&self) -> FleetStats {
        let total: usize = self.trains.len();
        let health_sum: u64 = self
            .trains
            .iter()
            .map(|train| u64::from(train.health_score))
            .sum();
        let avg_health: u32 = if total == 0 {
            0
        } else {
            let total_u64: u64 = u64::try_from(total).unwrap_or(u64::MAX);
            u32::try_from((health_sum + total_u64 / 2) / total_u64).unwrap_or(u32::MAX)
        };

        FleetStats {
            total,
            active: self
                .trains
                .iter()
                .filter(|train| train.status == TrainStatus::Active)
                .count(),
            maintenance: self
                .trains
                .iter()
                .filter(|train| train.status == TrainStatus::Maintenance)
                .count(),
            critical: self
                .trains
                .iter()
                .filter(|train| train.critical_issues > 0)
                .count(),
            avg_health,
        }
    }
}
