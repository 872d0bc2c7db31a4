// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handlers.
//!
//! Each handler takes the depot state and a request DTO and returns a
//! response DTO. Page-level access rules are enforced here, through the
//! same gate the console uses for navigation.

use std::str::FromStr;

use kmrl_ragi::{
    BayRelease, Depot, FleetSnapshotProvider, GateDecision, JobClosure, LOGIN_PATH, Occupant,
    Page, current_shift,
};
use kmrl_ragi_domain::{
    Bay, BayStatus, DashboardOverview, DepotSummary, DomainError, FleetSnapshot, InductionPlan,
    Job, JobQuery, JobStats, JobStatus, JobType, OperationsReport, Role, Session, Shift,
    SystemSettings, TrainSnapshot, static_dashboard, static_induction_plan,
    static_operations_report, static_system_settings,
};
use tracing::{debug, info};

use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::login_policy::validate_login;
use crate::request_response::{
    BayReleaseInfo, CloseJobResponse, FleetRequest, FleetResponse, ListBaysResponse,
    ListJobsRequest, ListJobsResponse, LoginRequest, LoginResponse, LogoutResponse,
    NavigateResponse, NavigationOutcome, SessionResponse, SetBayStatusRequest,
};

/// Message shown when a page needs a different role.
pub const ACCESS_DENIED: &str = "Access Denied";

/// Filter value meaning "no filter".
const ALL_FILTER: &str = "all";

/// Requires that the current session may view `page`.
///
/// # Errors
///
/// Returns `Unauthenticated` with no session and `Unauthorized` with the
/// wrong role.
pub fn require_page(depot: &Depot, page: Page, action: &str) -> Result<(), ApiError> {
    match depot.navigate(page.path()) {
        GateDecision::Granted(_) => Ok(()),
        GateDecision::RedirectToLogin => Err(ApiError::Unauthenticated {
            action: action.to_string(),
        }),
        GateDecision::Forbidden { required, .. } => Err(ApiError::Unauthorized {
            action: action.to_string(),
            required_role: required.to_string(),
        }),
        GateDecision::Loading => Err(ApiError::Internal {
            message: String::from("Session store is still loading"),
        }),
    }
}

fn parse_filter<T>(value: Option<&str>) -> Result<Option<T>, ApiError>
where
    T: FromStr<Err = DomainError>,
{
    match value.map(str::trim) {
        None | Some("" | ALL_FILTER) => Ok(None),
        Some(raw) => raw.parse::<T>().map(Some).map_err(translate_domain_error),
    }
}

/// Logs in with any non-empty username and password.
///
/// # Errors
///
/// Returns an error if a field is blank or the role is unknown.
pub fn login(depot: &mut Depot, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
    let role: Role = validate_login(&request.username, &request.password, request.role.as_deref())?;

    let session: Session = depot
        .login(&request.username, role)
        .map_err(translate_core_error)?
        .clone();

    Ok(LoginResponse {
        session,
        redirect_to: Page::Dashboard.path().to_string(),
    })
}

/// Logs out. Always succeeds.
pub fn logout(depot: &mut Depot) -> LogoutResponse {
    depot.logout();
    LogoutResponse {
        redirect_to: LOGIN_PATH.to_string(),
    }
}

/// Describes the current session.
#[must_use]
pub fn current_session(depot: &Depot) -> SessionResponse {
    let session: Option<Session> = depot.session().cloned();
    SessionResponse {
        authenticated: session.as_ref().is_some_and(|s| s.authenticated),
        session,
    }
}

/// Runs the access gate for `path`.
#[must_use]
pub fn navigate(depot: &Depot, path: &str) -> NavigateResponse {
    let decision: GateDecision = depot.navigate(path);
    debug!(path, ?decision, "Navigation");

    match decision {
        GateDecision::Loading => NavigateResponse {
            outcome: NavigationOutcome::Loading,
            page: None,
            redirect_to: None,
            message: None,
        },
        GateDecision::RedirectToLogin => NavigateResponse {
            outcome: NavigationOutcome::Redirect,
            page: Some(Page::from_path(path).path().to_string()),
            redirect_to: Some(LOGIN_PATH.to_string()),
            message: None,
        },
        GateDecision::Forbidden {
            page,
            required,
            actual,
        } => NavigateResponse {
            outcome: NavigationOutcome::Forbidden,
            page: Some(page.path().to_string()),
            redirect_to: None,
            message: Some(format!(
                "{ACCESS_DENIED}: requires {required} role, you are logged in as {actual}"
            )),
        },
        GateDecision::Granted(page) => NavigateResponse {
            outcome: NavigationOutcome::Granted,
            page: Some(page.path().to_string()),
            redirect_to: None,
            message: None,
        },
    }
}

/// Lists every bay in layout order.
///
/// # Errors
///
/// Returns an error if the caller may not view the depot.
pub fn list_bays(depot: &Depot) -> Result<ListBaysResponse, ApiError> {
    require_page(depot, Page::Depot, "list bays")?;
    Ok(ListBaysResponse {
        bays: depot.bays().to_vec(),
    })
}

/// Returns one bay.
///
/// # Errors
///
/// Returns an error if the caller may not view the depot or the bay does
/// not exist.
pub fn get_bay(depot: &Depot, bay_id: &str) -> Result<Bay, ApiError> {
    require_page(depot, Page::Depot, "view bay")?;
    depot.bay(bay_id).cloned().ok_or_else(|| bay_not_found(bay_id))
}

/// Changes a bay's status and occupant.
///
/// # Errors
///
/// Returns an error if the caller may not view the depot, the status is
/// unknown, or the bay does not exist.
pub fn set_bay_status(
    depot: &mut Depot,
    bay_id: &str,
    request: &SetBayStatusRequest,
) -> Result<Bay, ApiError> {
    require_page(depot, Page::Depot, "set bay status")?;
    let status: BayStatus = request
        .status
        .parse::<BayStatus>()
        .map_err(translate_domain_error)?;
    let occupant: Occupant = match &request.train {
        None => Occupant::Keep,
        Some(None) => Occupant::Clear,
        Some(Some(train)) => Occupant::Assign(train.clone()),
    };

    depot
        .set_bay_status(bay_id, status, occupant)
        .cloned()
        .ok_or_else(|| bay_not_found(bay_id))
}

/// Summarizes depot occupancy.
///
/// # Errors
///
/// Returns an error if the caller may not view the depot.
pub fn depot_summary(depot: &Depot) -> Result<DepotSummary, ApiError> {
    require_page(depot, Page::Depot, "view depot")?;
    Ok(depot.depot_summary())
}

/// Lists jobs matching the search term and filters.
///
/// # Errors
///
/// Returns an error if the caller is not a supervisor or a filter value is
/// unknown.
pub fn list_jobs(depot: &Depot, request: &ListJobsRequest) -> Result<ListJobsResponse, ApiError> {
    require_page(depot, Page::Jobs, "list jobs")?;
    let query: JobQuery = JobQuery {
        search: request.search.clone().unwrap_or_default(),
        status: parse_filter::<JobStatus>(request.status.as_deref())?,
        job_type: parse_filter::<JobType>(request.job_type.as_deref())?,
    };

    Ok(ListJobsResponse {
        jobs: depot.list_jobs(&query).into_iter().cloned().collect(),
        stats: depot.job_stats(),
    })
}

/// Returns one job.
///
/// # Errors
///
/// Returns an error if the caller is not a supervisor or the job does not
/// exist.
pub fn get_job(depot: &Depot, job_id: &str) -> Result<Job, ApiError> {
    require_page(depot, Page::Jobs, "view job")?;
    depot
        .job(job_id)
        .cloned()
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Job"),
            message: format!("Job '{job_id}' does not exist"),
        })
}

/// Returns the job board counts.
///
/// # Errors
///
/// Returns an error if the caller is not a supervisor.
pub fn job_stats(depot: &Depot) -> Result<JobStats, ApiError> {
    require_page(depot, Page::Jobs, "view job stats")?;
    Ok(depot.job_stats())
}

/// Closes a job and frees its bay.
///
/// # Errors
///
/// Returns an error if the caller is not a supervisor, the job does not
/// exist, or it is already closed.
pub fn close_job(depot: &mut Depot, job_id: &str) -> Result<CloseJobResponse, ApiError> {
    let closure: JobClosure = depot.close_job(job_id).map_err(translate_core_error)?;

    let (bay_release, message): (BayReleaseInfo, String) = match closure.bay_release {
        BayRelease::Released(bay) => {
            let message: String = format!("Job {job_id} closed, bay {} is now available", bay.id);
            (BayReleaseInfo::Released { bay }, message)
        }
        BayRelease::BayNotFound(bay_id) => {
            let message: String = format!("Job {job_id} closed, bay {bay_id} does not exist");
            (BayReleaseInfo::BayNotFound { bay_id }, message)
        }
        BayRelease::NoBayInLocation => (
            BayReleaseInfo::NoBay,
            format!("Job {job_id} closed, no bay to release"),
        ),
    };
    info!(job_id, message = %message, "Close job request completed");

    Ok(CloseJobResponse {
        job: closure.job,
        bay_release,
        message,
    })
}

/// Returns the fleet, filtered by the search term. Stats always cover the
/// whole fleet.
///
/// # Errors
///
/// Returns an error if the caller may not view trains.
pub fn fleet(
    depot: &Depot,
    provider: &dyn FleetSnapshotProvider,
    request: &FleetRequest,
) -> Result<FleetResponse, ApiError> {
    require_page(depot, Page::Trains, "view fleet")?;
    let snapshot: FleetSnapshot = provider.snapshot();
    let trains: Vec<TrainSnapshot> = snapshot
        .search(request.search.as_deref().unwrap_or_default())
        .into_iter()
        .cloned()
        .collect();

    Ok(FleetResponse {
        trains,
        stats: snapshot.stats(),
    })
}

/// Returns one train.
///
/// # Errors
///
/// Returns an error if the caller may not view trains or the train does not
/// exist.
pub fn train(
    depot: &Depot,
    provider: &dyn FleetSnapshotProvider,
    train_id: &str,
) -> Result<TrainSnapshot, ApiError> {
    require_page(depot, Page::Trains, "view train")?;
    provider
        .snapshot()
        .find(train_id)
        .cloned()
        .ok_or_else(|| ApiError::ResourceNotFound {
            resource_type: String::from("Train"),
            message: format!("Train '{train_id}' does not exist"),
        })
}

/// Returns the induction plan.
///
/// # Errors
///
/// Returns an error if the caller may not view the planner.
pub fn induction_plan(depot: &Depot) -> Result<InductionPlan, ApiError> {
    require_page(depot, Page::Induction, "view induction plan")?;
    Ok(static_induction_plan())
}

/// Returns the dashboard for the shift in effect now.
///
/// # Errors
///
/// Returns an error if no authenticated session exists.
pub fn dashboard(depot: &Depot) -> Result<DashboardOverview, ApiError> {
    dashboard_for_shift(depot, current_shift())
}

/// Returns the dashboard for `shift`.
///
/// # Errors
///
/// Returns an error if no authenticated session exists.
pub fn dashboard_for_shift(depot: &Depot, shift: Shift) -> Result<DashboardOverview, ApiError> {
    require_page(depot, Page::Dashboard, "view dashboard")?;
    Ok(static_dashboard(shift))
}

/// # Errors
///
/// Returns an error if no authenticated session exists.
pub fn operations_report(depot: &Depot) -> Result<OperationsReport, ApiError> {
    require_page(depot, Page::Reports, "view reports")?;
    Ok(static_operations_report())
}

/// Returns the system settings. Admin only.
///
/// # Errors
///
/// Returns an error if the caller is not an authenticated admin.
pub fn system_settings(depot: &Depot) -> Result<SystemSettings, ApiError> {
    require_page(depot, Page::Settings, "view settings")?;
    Ok(static_system_settings())
}

fn bay_not_found(bay_id: &str) -> ApiError {
    ApiError::ResourceNotFound {
        resource_type: String::from("Bay"),
        message: format!("Bay '{bay_id}' does not exist"),
    }
}
