// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! System settings as shown to administrators. Read-only display data;
//! nothing here changes how the depot behaves.

use serde::{Deserialize, Serialize};

/// Planner configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub ai_model: String,
    /// Minimum plan confidence, in percent.
    pub confidence_threshold: u32,
    pub planning_window: String,
    /// Minutes between data refreshes.
    pub data_refresh_interval: u32,
    pub max_trains_per_bay: u32,
    pub emergency_override: bool,
    pub auto_approval: bool,
    /// Days backups are kept.
    pub backup_retention: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
}

/// A staff account listed under user management.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: u32,
    pub name: String,
    /// Job title. Not a console [`Role`](crate::Role).
    pub role: String,
    pub department: String,
    pub status: AccountStatus,
    pub last_login: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationStatus {
    Connected,
    Partial,
    Disconnected,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IntegrationHealth {
    Good,
    Warning,
    Error,
}

/// An external system the depot exchanges data with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Integration {
    pub name: String,
    pub status: IntegrationStatus,
    pub last_sync: String,
    pub health: IntegrationHealth,
}

/// Delivery rule for one kind of alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertSetting {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub enabled: bool,
    pub channels: Vec<String>,
    pub threshold: String,
}

/// Prediction model status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelSettings {
    pub current_version: String,
    pub last_trained: String,
    pub accuracy: f64,
    /// Milliseconds.
    pub prediction_latency: u32,
    pub data_points: u64,
    pub retraining_schedule: String,
}

/// The settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemSettings {
    pub system: SystemConfig,
    pub users: Vec<UserAccount>,
    pub integrations: Vec<Integration>,
    pub alerts: Vec<AlertSetting>,
    pub model: ModelSettings,
}

impl SystemSettings {
    /// Integrations that are not fully connected.
    #[must_use]
    pub fn degraded_integrations(&self) -> Vec<&Integration> {
        self.integrations
            .iter()
            .filter(|integration| integration.status != IntegrationStatus::Connected)
            .collect()
    }
}

fn user(
    id: u32,
    name: &str,
    role: &str,
    department: &str,
    status: AccountStatus,
    last_login: &str,
) -> UserAccount {
    UserAccount {
        id,
        name: name.to_string(),
        role: role.to_string(),
        department: department.to_string(),
        status,
        last_login: last_login.to_string(),
    }
}

fn integration(
    name: &str,
    status: IntegrationStatus,
    last_sync: &str,
    health: IntegrationHealth,
) -> Integration {
    Integration {
        name: name.to_string(),
        status,
        last_sync: last_sync.to_string(),
        health,
    }
}

fn alert_setting(
    alert_type: &str,
    enabled: bool,
    channels: &[&str],
    threshold: &str,
) -> AlertSetting {
    AlertSetting {
        alert_type: alert_type.to_string(),
        enabled,
        channels: channels.iter().map(ToString::to_string).collect(),
        threshold: threshold.to_string(),
    }
}

/// Returns the settings page data.
#[must_use]
pub fn static_system_settings() -> SystemSettings {
    use AccountStatus::{Active, Inactive};
    use IntegrationHealth::{Error, Good, Warning};
    use IntegrationStatus::{Connected, Disconnected, Partial};

    SystemSettings {
        system: SystemConfig {
            ai_model: String::from("RAGI v2.3"),
            confidence_threshold: 85,
            planning_window: String::from("21:00-23:00"),
            data_refresh_interval: 15,
            max_trains_per_bay: 1,
            emergency_override: true,
            auto_approval: false,
            backup_retention: 30,
        },
        users: vec![
            user(1, "Rajesh Kumar", "Supervisor", "Operations", Active, "2024-09-24 21:45"),
            user(2, "Suresh Nair", "Maintenance Head", "Rolling Stock", Active, "2024-09-24 20:30"),
            user(3, "Anil Jose", "Technician", "Signalling", Active, "2024-09-24 19:15"),
            user(4, "Priya Menon", "Analyst", "Planning", Inactive, "2024-09-22 16:20"),
            user(5, "Ravi Krishnan", "Admin", "IT", Active, "2024-09-24 22:10"),
        ],
        integrations: vec![
            integration("IBM Maximo", Connected, "2024-09-24 21:45", Good),
            integration("WhatsApp Business API", Connected, "2024-09-24 21:44", Good),
            integration("IoT Sensors", Partial, "2024-09-24 21:40", Warning),
            integration("Depot CCTV", Connected, "2024-09-24 21:43", Good),
            integration("Employee Portal", Disconnected, "2024-09-23 18:30", Error),
        ],
        alerts: vec![
            alert_setting("Critical System Failure", true, &["SMS", "Email", "WhatsApp"], "Immediate"),
            alert_setting("Maintenance Overdue", true, &["Email", "Dashboard"], "24 hours"),
            alert_setting("Low Confidence Prediction", false, &["Dashboard"], "Below 80%"),
            alert_setting("Manual Override Used", true, &["Email"], "Immediate"),
            alert_setting("Budget Threshold Exceeded", true, &["SMS", "Email"], "90% of budget"),
        ],
        model: ModelSettings {
            current_version: String::from("RAGI v2.3"),
            last_trained: String::from("2024-09-20 14:30"),
            accuracy: 94.7,
            prediction_latency: 12,
            data_points: 156_789,
            retraining_schedule: String::from("Weekly"),
        },
    }
}
