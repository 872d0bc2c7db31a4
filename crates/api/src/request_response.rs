// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use kmrl_ragi_domain::{
    Bay, DashboardOverview, DepotSummary, FleetStats, InductionPlan, Job, JobStats,
    OperationsReport, Session, SystemSettings, TrainSnapshot,
};
use serde::{Deserialize, Deserializer, Serialize};

/// Distinguishes an absent field (`None`) from an explicit `null`
/// (`Some(None)`).
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// API request to log in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    /// Accepted and required, never checked.
    #[serde(default)]
    pub password: String,
    /// `admin` or `supervisor`. Defaults to admin when absent.
    #[serde(default)]
    pub role: Option<String>,
}

/// API response for a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub session: Session,
    /// Where the client goes next.
    pub redirect_to: String,
}

/// API response for a logout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutResponse {
    pub redirect_to: String,
}

/// API response describing the current session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub authenticated: bool,
    pub session: Option<Session>,
}

/// The result of a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavigationOutcome {
    Loading,
    Redirect,
    Forbidden,
    Granted,
}

/// API response for a navigation attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateResponse {
    pub outcome: NavigationOutcome,
    /// The canonical path of the resolved page.
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub redirect_to: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// API response listing bays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListBaysResponse {
    pub bays: Vec<Bay>,
}

/// API request to change a bay's status.
///
/// `train` absent keeps the current occupant, `null` clears it, and a string
/// assigns that train.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetBayStatusRequest {
    pub status: String,
    #[serde(default, deserialize_with = "present")]
    pub train: Option<Option<String>>,
}

/// Query parameters for listing jobs. `all` or empty means no filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobsRequest {
    #[serde(default)]
    pub search: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "type")]
    pub job_type: Option<String>,
}

/// API response listing jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListJobsResponse {
    pub jobs: Vec<Job>,
    pub stats: JobStats,
}

/// What happened to a closed job's bay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum BayReleaseInfo {
    Released { bay: Bay },
    BayNotFound { bay_id: String },
    NoBay,
}

/// API response for a successful job close.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CloseJobResponse {
    pub job: Job,
    pub bay_release: BayReleaseInfo,
    pub message: String,
}

/// Query parameters for the fleet explorer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetRequest {
    #[serde(default)]
    pub search: Option<String>,
}

/// API response for the fleet explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FleetResponse {
    pub trains: Vec<TrainSnapshot>,
    pub stats: FleetStats,
}

/// API response for the depot map.
pub type DepotSummaryResponse = DepotSummary;

/// API response for the induction planner.
pub type InductionResponse = InductionPlan;

pub type DashboardResponse = DashboardOverview;

pub type ReportsResponse = OperationsReport;

/// API response for the admin settings page.
pub type SettingsResponse = SystemSettings;
