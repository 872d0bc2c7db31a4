// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Depot bays.
//!
//! A bay is a fixed physical slot in the depot. The set of bays is fixed
//! when the registry is seeded; only status, occupant, activity and crew
//! ever change.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Activity label a bay takes once it becomes available.
pub const READY_ACTIVITY: &str = "Ready";

/// Prefix used by job locations that name a bay (e.g. `"Bay B-02"`).
pub const BAY_LOCATION_PREFIX: &str = "Bay ";

/// The purpose a bay section is laid out for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaySection {
    /// Service bays (A-section).
    Service,
    /// Maintenance bays (B-section).
    Maintenance,
    /// Inspection bay line (IBL).
    Inspection,
    /// Cleaning bays (C-section).
    Cleaning,
}

impl BaySection {
    /// All sections in depot layout order.
    pub const ALL: [Self; 4] = [
        Self::Service,
        Self::Maintenance,
        Self::Inspection,
        Self::Cleaning,
    ];

    /// Returns the string representation of the section.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Service => "service",
            Self::Maintenance => "maintenance",
            Self::Inspection => "inspection",
            Self::Cleaning => "cleaning",
        }
    }
}

impl FromStr for BaySection {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "service" => Ok(Self::Service),
            "maintenance" => Ok(Self::Maintenance),
            "inspection" => Ok(Self::Inspection),
            "cleaning" => Ok(Self::Cleaning),
            _ => Err(DomainError::InvalidBaySection(s.to_string())),
        }
    }
}

/// Whether a bay currently holds a train.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BayStatus {
    /// A train is parked in the bay.
    Occupied,
    /// The bay is free.
    Available,
}

impl BayStatus {
    /// Returns the string representation of the status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Occupied => "occupied",
            Self::Available => "available",
        }
    }
}

impl FromStr for BayStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "occupied" => Ok(Self::Occupied),
            "available" => Ok(Self::Available),
            _ => Err(DomainError::InvalidBayStatus(s.to_string())),
        }
    }
}

/// A depot bay record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bay {
    /// Fixed bay identifier (e.g. `"A-01"`, `"IBL-1"`).
    pub id: String,
    /// The section the bay belongs to.
    #[serde(rename = "type")]
    pub section: BaySection,
    /// The occupying train, if any.
    pub train: Option<String>,
    /// Occupied or available.
    pub status: BayStatus,
    /// Free-text activity label shown on the depot map.
    pub activity: String,
    /// The crew working the bay, if any.
    pub crew: Option<String>,
    /// Optional duration label (e.g. `"6h"`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
}

impl Bay {
    /// Creates an occupied bay.
    #[must_use]
    pub fn occupied(id: &str, section: BaySection, train: &str, activity: &str, crew: &str) -> Self {
        Self {
            id: id.to_string(),
            section,
            train: Some(train.to_string()),
            status: BayStatus::Occupied,
            activity: activity.to_string(),
            crew: Some(crew.to_string()),
            duration: None,
        }
    }

    /// Creates an empty bay ready to receive a train.
    #[must_use]
    pub fn available(id: &str, section: BaySection) -> Self {
        Self {
            id: id.to_string(),
            section,
            train: None,
            status: BayStatus::Available,
            activity: READY_ACTIVITY.to_string(),
            crew: None,
            duration: None,
        }
    }

    /// Attaches a duration label.
    #[must_use]
    pub fn with_duration(mut self, duration: &str) -> Self {
        self.duration = Some(duration.to_string());
        self
    }

    /// Returns whether the bay is free.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == BayStatus::Available
    }
}

/// Extracts the bay id from a job location string.
///
/// `"Bay A-01"` yields `Some("A-01")`. Locations without the prefix, or with
/// nothing after it, name no bay.
#[must_use]
pub fn bay_id_from_location(location: &str) -> Option<&str> {
    location
        .trim()
        .strip_prefix(BAY_LOCATION_PREFIX)
        .map(str::trim)
        .filter(|id| !id.is_empty())
}

/// The depot layout a fresh install is seeded with: 14 bays over 4 sections.
#[must_use]
pub fn default_bay_layout() -> Vec<Bay> {
    use BaySection::{Cleaning, Inspection, Maintenance, Service};

    vec![
        // A-section
        Bay::occupied("A-01", Service, "KRISHNA", "Standby", "Team Alpha"),
        Bay::occupied("A-02", Service, "NILA", "Pre-service Check", "Team Beta"),
        Bay::occupied("A-03", Service, "ARUTH", "Cleaning", "Cleaning-1"),
        Bay::available("A-04", Service),
        Bay::occupied("A-05", Service, "JHANAVI", "Inspection", "Team Gamma"),
        // B-section
        Bay::occupied("B-01", Maintenance, "TAPTI", "A-Check Service", "Maint-Alpha")
            .with_duration("6h"),
        Bay::occupied("B-02", Maintenance, "DHWANIL", "Brake Repair", "Maint-Beta")
            .with_duration("4h"),
        Bay::occupied("B-03", Maintenance, "YAMUNA", "HVAC Service", "Maint-Gamma")
            .with_duration("3h"),
        Bay::available("B-04", Maintenance),
        // Inspection bay line
        Bay::occupied("IBL-1", Inspection, "VAAYU", "Major Overhaul", "IBL-Team")
            .with_duration("12h"),
        Bay::available("IBL-2", Inspection),
        // C-section
        Bay::occupied("C-01", Cleaning, "PAMPA", "Deep Clean", "Clean-1"),
        Bay::occupied("C-02", Cleaning, "MAARUT", "Exterior Wash", "Clean-2"),
        Bay::available("C-03", Cleaning),
    ]
}
