// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The operations dashboard.
//!
//! Everything except the shift is a fixed display fixture.

use serde::{Deserialize, Serialize};

/// First hour of the day shift.
const DAY_SHIFT_START: u8 = 6;
/// First hour of the night shift.
const NIGHT_SHIFT_START: u8 = 22;

/// The depot shift in effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    Day,
    Night,
}

impl Shift {
    /// The shift covering `hour` (0-23). Day runs 06:00 to 21:59.
    #[must_use]
    pub const fn for_hour(hour: u8) -> Self {
        match hour {
            DAY_SHIFT_START..NIGHT_SHIFT_START => Self::Day,
            _ => Self::Night,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Day => "Day Shift",
            Self::Night => "Night Shift",
        }
    }
}

/// Trains by operating state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetKpis {
    pub total: u32,
    pub in_service: u32,
    pub maintenance: u32,
    pub standby: u32,
    pub emergency: u32,
}

/// Headline figures for today.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TodayMetrics {
    pub punctuality: f64,
    pub avg_speed: f64,
    pub passenger_count: u64,
    pub energy_efficiency: f64,
    pub maintenance_cost: u64,
    pub revenue: u64,
}

/// One row of the fleet status board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainOverview {
    pub id: String,
    pub status: String,
    pub location: String,
    pub mileage: u32,
    pub health: u32,
    pub next_maintenance: String,
    pub priority: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertSeverity {
    Critical,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertState {
    Active,
    Pending,
    Resolved,
}

/// A live alert raised against a train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub train: String,
    #[serde(rename = "type")]
    pub severity: AlertSeverity,
    pub message: String,
    pub time: String,
    pub status: AlertState,
}

/// Punctuality sampled at one time of day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PunctualityPoint {
    pub time: String,
    pub value: f64,
}

/// Maintenance booked for tonight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduledMaintenance {
    pub train: String,
    #[serde(rename = "type")]
    pub work_type: String,
    pub technician: String,
    pub start_time: String,
    pub duration: String,
    pub bay: String,
    pub priority: String,
}

/// An advertiser's exterior branding commitment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandingContract {
    pub advertiser: String,
    pub trains: Vec<String>,
    pub hours_required: u32,
    pub hours_completed: u32,
    pub revenue: u64,
    pub status: String,
}

impl BrandingContract {
    /// Completed hours as a whole percentage of the requirement.
    #[must_use]
    pub const fn completion_percent(&self) -> u32 {
        if self.hours_required == 0 {
            return 100;
        }
        self.hours_completed * 100 / self.hours_required
    }
}

/// Everything the dashboard shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub shift: Shift,
    pub fleet: FleetKpis,
    pub today: TodayMetrics,
    pub trains: Vec<TrainOverview>,
    pub alerts: Vec<Alert>,
    pub punctuality: Vec<PunctualityPoint>,
    pub maintenance_schedule: Vec<ScheduledMaintenance>,
    pub branding_contracts: Vec<BrandingContract>,
}

fn train(
    id: &str,
    status: &str,
    location: &str,
    mileage: u32,
    health: u32,
    next_maintenance: &str,
    priority: &str,
) -> TrainOverview {
    TrainOverview {
        id: id.to_string(),
        status: status.to_string(),
        location: location.to_string(),
        mileage,
        health,
        next_maintenance: next_maintenance.to_string(),
        priority: priority.to_string(),
    }
}

fn alert(
    id: u32,
    train: &str,
    severity: AlertSeverity,
    message: &str,
    time: &str,
    status: AlertState,
) -> Alert {
    Alert {
        id,
        train: train.to_string(),
        severity,
        message: message.to_string(),
        time: time.to_string(),
        status,
    }
}

fn scheduled(
    train: &str,
    work_type: &str,
    technician: &str,
    start_time: &str,
    duration: &str,
    bay: &str,
    priority: &str,
) -> ScheduledMaintenance {
    ScheduledMaintenance {
        train: train.to_string(),
        work_type: work_type.to_string(),
        technician: technician.to_string(),
        start_time: start_time.to_string(),
        duration: duration.to_string(),
        bay: bay.to_string(),
        priority: priority.to_string(),
    }
}

fn contract(
    advertiser: &str,
    trains: &[&str],
    hours_required: u32,
    hours_completed: u32,
    revenue: u64,
    status: &str,
) -> BrandingContract {
    BrandingContract {
        advertiser: advertiser.to_string(),
        trains: trains.iter().map(ToString::to_string).collect(),
        hours_required,
        hours_completed,
        revenue,
        status: status.to_string(),
    }
}

/// Returns the dashboard for `shift`.
#[must_use]
pub fn static_dashboard(shift: Shift) -> DashboardOverview {
    use AlertSeverity::{Critical, Info, Warning};
    use AlertState::{Active, Pending, Resolved};

    let punctuality: Vec<PunctualityPoint> = [
        ("06:00", 99.2),
        ("08:00", 98.8),
        ("10:00", 99.5),
        ("12:00", 99.1),
        ("14:00", 99.7),
        ("16:00", 98.9),
        ("18:00", 99.3),
        ("20:00", 99.6),
    ]
    .into_iter()
    .map(|(time, value)| PunctualityPoint {
        time: time.to_string(),
        value,
    })
    .collect();

    DashboardOverview {
        shift,
        fleet: FleetKpis {
            total: 25,
            in_service: 18,
            maintenance: 4,
            standby: 2,
            emergency: 1,
        },
        today: TodayMetrics {
            punctuality: 99.7,
            avg_speed: 32.5,
            passenger_count: 145_820,
            energy_efficiency: 92.3,
            maintenance_cost: 2_850_000,
            revenue: 4_120_000,
        },
        trains: vec![
            train("KRISHNA", "service", "Aluva-Petta", 42_150, 94, "3 days", "low"),
            train("TAPTI", "maintenance", "Depot Bay A2", 38_900, 76, "In Progress", "high"),
            train("NILA", "service", "Petta-Aluva", 35_200, 91, "7 days", "low"),
            train("SARAYU", "standby", "Depot Bay C1", 41_800, 88, "2 days", "medium"),
            train("ARUTH", "service", "Aluva-Petta", 39_500, 85, "1 day", "medium"),
            train("VAIGAI", "emergency", "JLN Stadium", 44_200, 45, "Immediate", "critical"),
            train("JHANAVI", "service", "Petta-Aluva", 36_800, 93, "5 days", "low"),
            train("DHWANIL", "maintenance", "Depot Bay B1", 43_100, 78, "In Progress", "high"),
        ],
        alerts: vec![
            alert(1, "VAIGAI", Critical, "Door mechanism failure", "14:23", Active),
            alert(2, "YAMUNA", Warning, "Brake pad wear 85%", "13:45", Active),
            alert(3, "NILA", Info, "Scheduled maintenance due", "12:30", Pending),
            alert(4, "NARMADA", Warning, "HVAC temperature variance", "11:15", Resolved),
        ],
        punctuality,
        maintenance_schedule: vec![
            scheduled("DHWANIL", "A-Check Service", "Team Alpha", "22:00", "6h", "Bay A2", "high"),
            scheduled("VAAYU", "Brake Inspection", "Team Beta", "23:30", "3h", "Bay B1", "medium"),
            scheduled("GODHAVARI", "HVAC Maintenance", "Team Gamma", "01:00", "4h", "Bay C3", "medium"),
            scheduled("ARUTH", "Door System Check", "Team Alpha", "02:30", "2h", "Bay A1", "low"),
        ],
        branding_contracts: vec![
            contract("Kerala Tourism", &["KRISHNA", "JHANAVI", "YAMUNA"], 120, 87, 850_000, "active"),
            contract("Cochin Shipyard", &["NILA", "PAMPA"], 80, 65, 450_000, "active"),
            contract("Federal Bank", &["BHAVANI"], 60, 58, 320_000, "completing"),
        ],
    }
}
