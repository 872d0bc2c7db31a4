// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The close-job cascade.
//!
//! Closing a job touches two registries. The job write always happens
//! first and is never rolled back; the bay release is reported alongside.

use crate::bay_registry::{BayRegistry, Occupant};
use crate::error::CoreError;
use crate::job_registry::JobRegistry;
use crate::storage::DurableStorage;
use kmrl_ragi_domain::{Bay, BayStatus, Job, Role, Session, Shift, bay_id_from_location};
use time::macros::offset;
use time::{OffsetDateTime, UtcOffset};
use tracing::{info, warn};

const CLOSE_JOB_ACTION: &str = "close job";

/// Shifts follow depot local time (IST).
const DEPOT_OFFSET: UtcOffset = offset!(+5:30);

/// What happened to the job's bay after the job was completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BayRelease {
    /// The bay is now available and empty.
    Released(Bay),
    /// The location named a bay that does not exist.
    BayNotFound(String),
    /// The location does not name a bay.
    NoBayInLocation,
}

/// The result of a successful close.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobClosure {
    /// The job after completion.
    pub job: Job,
    /// The bay side effect.
    pub bay_release: BayRelease,
}

/// Operations that span more than one store.
#[derive(Debug, Clone, Copy, Default)]
pub struct DepotService;

impl DepotService {
    /// Closes a job on behalf of `session` and frees the bay its location
    /// names.
    ///
    /// Authorization and the status guard run before any mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if there is no session, the session is not a
    /// supervisor, the job does not exist, or the job is already closed.
    pub fn close_job(
        session: Option<&Session>,
        jobs: &mut JobRegistry,
        bays: &mut BayRegistry,
        storage: &mut dyn DurableStorage,
        job_id: &str,
        closed_at: &str,
    ) -> Result<JobClosure, CoreError> {
        let session: &Session = authorize(session, Role::Supervisor, CLOSE_JOB_ACTION)?;

        let job: Job = jobs
            .complete(storage, job_id, &session.username, closed_at)?
            .clone();

        let bay_release: BayRelease = match bay_id_from_location(&job.location) {
            None => {
                warn!(job_id, location = %job.location, "Job location names no bay");
                BayRelease::NoBayInLocation
            }
            Some(bay_id) => {
                match bays.set_status(storage, bay_id, BayStatus::Available, Occupant::Clear) {
                    Some(bay) => BayRelease::Released(bay.clone()),
                    None => BayRelease::BayNotFound(bay_id.to_string()),
                }
            }
        };

        info!(
            job_id,
            closed_by = %session.username,
            bay_released = matches!(bay_release, BayRelease::Released(_)),
            "Closed job"
        );

        Ok(JobClosure { job, bay_release })
    }
}

/// Checks that `session` exists, is authenticated, and holds exactly
/// `required`. Uses the same session rule as the access gate.
///
/// # Errors
///
/// Returns `Unauthenticated` or `Unauthorized`.
pub fn authorize<'a>(
    session: Option<&'a Session>,
    required: Role,
    action: &str,
) -> Result<&'a Session, CoreError> {
    let Some(session) = session.filter(|session| session.authenticated) else {
        warn!(action, "Rejected: not logged in");
        return Err(CoreError::Unauthenticated {
            action: action.to_string(),
        });
    };

    if !session.has_role(required) {
        warn!(
            action,
            username = %session.username,
            role = %session.role,
            required = %required,
            "Rejected: wrong role"
        );
        return Err(CoreError::Unauthorized {
            action: action.to_string(),
            required_role: required,
            actual_role: session.role,
        });
    }

    Ok(session)
}

/// The current UTC wall-clock time as `HH:MM:SS`.
#[must_use]
pub fn closure_timestamp() -> String {
    let now: OffsetDateTime = OffsetDateTime::now_utc();
    format!("{:02}:{:02}:{:02}", now.hour(), now.minute(), now.second())
}

/// The depot shift at `instant`.
#[must_use]
pub fn shift_at(instant: OffsetDateTime) -> Shift {
    Shift::for_hour(instant.to_offset(DEPOT_OFFSET).hour())
}

#[must_use]
pub fn current_shift() -> Shift {
    shift_at(OffsetDateTime::now_utc())
}
