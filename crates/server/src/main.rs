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
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use kmrl_ragi::{
    DEFAULT_FLEET_SIZE, Depot, DurableStorage, FleetSnapshotProvider, GeneratedFleet, LOGIN_PATH,
};
use kmrl_ragi_api::{
    ACCESS_DENIED, ApiError, CloseJobResponse, DashboardResponse, FleetRequest, FleetResponse,
    ListBaysResponse, ListJobsRequest, ListJobsResponse, LoginRequest, LoginResponse,
    LogoutResponse, NavigateResponse, ReportsResponse, SessionResponse, SetBayStatusRequest,
    SettingsResponse,
};
use kmrl_ragi_domain::{Bay, DepotSummary, FleetStats, InductionPlan, Job, JobStats, TrainSnapshot};
use kmrl_ragi_persistence::SqliteStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

use session::ActiveSession;

/// KMRL RAGI Server - HTTP server for the depot operations console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Artificial delay applied to every login, in milliseconds
    #[arg(long, default_value_t = 500)]
    login_delay_ms: u64,

    /// Number of trains in the generated fleet snapshot
    #[arg(long, default_value_t = DEFAULT_FLEET_SIZE)]
    fleet_size: usize,
}

/// Application state shared across handlers.
///
/// The whole depot sits behind one mutex, so requests that change it are
/// applied one at a time.
#[derive(Clone)]
pub struct AppState {
    /// Depot state and its durable storage.
    depot: Arc<Mutex<Depot>>,
    /// Source of fleet data for the train explorer.
    fleet: Arc<dyn FleetSnapshotProvider>,
    /// Delay applied before a login takes effect.
    login_delay: Duration,
}

/// Query parameters for the navigate endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct NavigateQuery {
    path: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
    /// Where the client should go instead, if anywhere.
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to: Option<String>,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
    /// Redirect hint for the client.
    redirect_to: Option<String>,
}

impl HttpError {
    const fn new(status: StatusCode, message: String) -> Self {
        Self {
            status,
            message,
            redirect_to: None,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
            redirect_to: self.redirect_to,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Unauthenticated { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
                redirect_to: Some(LOGIN_PATH.to_string()),
            },
            ApiError::Unauthorized {
                ref action,
                ref required_role,
            } => Self::new(
                StatusCode::FORBIDDEN,
                format!("{ACCESS_DENIED}: '{action}' requires {required_role} role"),
            ),
            ApiError::DomainRuleViolation { .. } => {
                Self::new(StatusCode::UNPROCESSABLE_ENTITY, err.to_string())
            }
            ApiError::InvalidInput { ref message, .. } => {
                Self::new(StatusCode::BAD_REQUEST, message.clone())
            }
            ApiError::ResourceNotFound { .. } => Self::new(StatusCode::NOT_FOUND, err.to_string()),
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

/// Handler for POST `/login`.
///
/// Waits for the configured login delay, then creates the session.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %request.username, "Handling login request");

    tokio::time::sleep(app_state.login_delay).await;

    let mut depot = app_state.depot.lock().await;
    let response: LoginResponse = kmrl_ragi_api::login(&mut depot, &request).map_err(|e| {
        warn!(error = %e, "Login rejected");
        HttpError::from(e)
    })?;
    drop(depot);

    Ok(Json(response))
}

/// Handler for POST `/logout`.
async fn handle_logout(AxumState(app_state): AxumState<AppState>) -> Json<LogoutResponse> {
    info!("Handling logout request");
    let mut depot = app_state.depot.lock().await;
    Json(kmrl_ragi_api::logout(&mut depot))
}

/// Handler for GET `/session`.
async fn handle_session(AxumState(app_state): AxumState<AppState>) -> Json<SessionResponse> {
    let depot = app_state.depot.lock().await;
    Json(kmrl_ragi_api::current_session(&depot))
}

/// Handler for GET `/navigate`.
///
/// Returns the access-gate decision for a console path.
async fn handle_navigate(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<NavigateQuery>,
) -> Json<NavigateResponse> {
    let depot = app_state.depot.lock().await;
    Json(kmrl_ragi_api::navigate(&depot, &query.path))
}

/// Handler for GET `/bays`.
async fn handle_list_bays(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListBaysResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::list_bays(&depot)?))
}

/// Handler for GET `/bays/{bay_id}`.
async fn handle_get_bay(
    AxumState(app_state): AxumState<AppState>,
    Path(bay_id): Path<String>,
) -> Result<Json<Bay>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::get_bay(&depot, &bay_id)?))
}

/// Handler for POST `/bays/{bay_id}/status`.
async fn handle_set_bay_status(
    AxumState(app_state): AxumState<AppState>,
    ActiveSession(session): ActiveSession,
    Path(bay_id): Path<String>,
    Json(request): Json<SetBayStatusRequest>,
) -> Result<Json<Bay>, HttpError> {
    info!(
        bay_id = %bay_id,
        status = %request.status,
        username = %session.username,
        "Handling set_bay_status request"
    );

    let mut depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::set_bay_status(
        &mut depot, &bay_id, &request,
    )?))
}

/// Handler for GET `/depot/summary`.
async fn handle_depot_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DepotSummary>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::depot_summary(&depot)?))
}

/// Handler for GET `/jobs`.
async fn handle_list_jobs(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListJobsRequest>,
) -> Result<Json<ListJobsResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::list_jobs(&depot, &query)?))
}

/// Handler for GET `/jobs/stats`.
async fn handle_job_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<JobStats>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::job_stats(&depot)?))
}

/// Handler for GET `/jobs/{job_id}`.
async fn handle_get_job(
    AxumState(app_state): AxumState<AppState>,
    Path(job_id): Path<String>,
) -> Result<Json<Job>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::get_job(&depot, &job_id)?))
}

/// Handler for POST `/jobs/{job_id}/close`.
///
/// Completes the job and frees the bay named by its location.
async fn handle_close_job(
    AxumState(app_state): AxumState<AppState>,
    ActiveSession(session): ActiveSession,
    Path(job_id): Path<String>,
) -> Result<Json<CloseJobResponse>, HttpError> {
    info!(
        job_id = %job_id,
        username = %session.username,
        role = %session.role,
        "Handling close_job request"
    );

    let mut depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::close_job(&mut depot, &job_id)?))
}

/// Handler for GET `/fleet`.
async fn handle_fleet(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<FleetRequest>,
) -> Result<Json<FleetResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::fleet(
        &depot,
        app_state.fleet.as_ref(),
        &query,
    )?))
}

/// Handler for GET `/fleet/stats`.
async fn handle_fleet_stats(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<FleetStats>, HttpError> {
    let depot = app_state.depot.lock().await;
    let response: FleetResponse =
        kmrl_ragi_api::fleet(&depot, app_state.fleet.as_ref(), &FleetRequest::default())?;
    Ok(Json(response.stats))
}

/// Handler for GET `/fleet/{train_id}`.
async fn handle_train(
    AxumState(app_state): AxumState<AppState>,
    Path(train_id): Path<String>,
) -> Result<Json<TrainSnapshot>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::train(
        &depot,
        app_state.fleet.as_ref(),
        &train_id,
    )?))
}

/// Handler for GET `/induction`.
async fn handle_induction(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<InductionPlan>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::induction_plan(&depot)?))
}

/// Handler for GET `/dashboard`.
async fn handle_dashboard(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<DashboardResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::dashboard(&depot)?))
}

/// Handler for GET `/reports`.
async fn handle_reports(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ReportsResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::operations_report(&depot)?))
}

/// Handler for GET `/settings`.
async fn handle_settings(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SettingsResponse>, HttpError> {
    let depot = app_state.depot.lock().await;
    Ok(Json(kmrl_ragi_api::system_settings(&depot)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/session", get(handle_session))
        .route("/navigate", get(handle_navigate))
        .route("/bays", get(handle_list_bays))
        .route("/bays/{bay_id}", get(handle_get_bay))
        .route("/bays/{bay_id}/status", post(handle_set_bay_status))
        .route("/depot/summary", get(handle_depot_summary))
        .route("/jobs", get(handle_list_jobs))
        .route("/jobs/stats", get(handle_job_stats))
        .route("/jobs/{job_id}", get(handle_get_job))
        .route("/jobs/{job_id}/close", post(handle_close_job))
        .route("/fleet", get(handle_fleet))
        .route("/fleet/stats", get(handle_fleet_stats))
        .route("/fleet/{train_id}", get(handle_train))
        .route("/induction", get(handle_induction))
        .route("/dashboard", get(handle_dashboard))
        .route("/reports", get(handle_reports))
        .route("/settings", get(handle_settings))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing KMRL RAGI Server");

    let storage: SqliteStorage = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        SqliteStorage::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        SqliteStorage::new_in_memory()?
    };
    let storage: Box<dyn DurableStorage> = Box::new(storage);

    let app_state: AppState = AppState {
        depot: Arc::new(Mutex::new(Depot::init(storage))),
        fleet: Arc::new(GeneratedFleet::generate(args.fleet_size)),
        login_delay: Duration::from_millis(args.login_delay_ms),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
