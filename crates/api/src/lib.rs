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
    clippy::all
)]

mod error;
mod handlers;
mod login_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use error::{ApiError, translate_core_error, translate_domain_error};
pub use handlers::{
    ACCESS_DENIED, close_job, current_session, dashboard, dashboard_for_shift, depot_summary,
    fleet, get_bay, get_job, induction_plan, job_stats, list_bays, list_jobs, login, logout,
    navigate, operations_report, require_page, set_bay_status, system_settings, train,
};
pub use login_policy::{LoginValidationError, validate_login};
pub use request_response::{
    BayReleaseInfo, CloseJobResponse, DashboardResponse, DepotSummaryResponse, FleetRequest,
    FleetResponse, InductionResponse, ListBaysResponse, ListJobsRequest, ListJobsResponse,
    LoginRequest, LoginResponse, LogoutResponse, NavigateResponse, NavigationOutcome,
    ReportsResponse, SessionResponse, SetBayStatusRequest, SettingsResponse,
};
