// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::access::{AccessGate, GateDecision, Page};
use crate::bay_registry::{BayRegistry, Occupant};
use crate::error::CoreError;
use crate::job_registry::JobRegistry;
use crate::service::{DepotService, JobClosure, closure_timestamp};
use crate::session_store::{SessionPhase, SessionStore};
use crate::storage::DurableStorage;
use kmrl_ragi_domain::{Bay, BayStatus, DepotSummary, Job, JobQuery, JobStats, Role, Session};
use tracing::info;

/// The whole depot state: durable storage plus the three stores backed by
/// it.
///
/// All mutations go through `&mut self`, so a single owner serializes every
/// write.
pub struct Depot {
    storage: Box<dyn DurableStorage>,
    session: SessionStore,
    bays: BayRegistry,
    jobs: JobRegistry,
}

impl std::fmt::Debug for Depot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Depot")
            .field("session", &self.session)
            .field("bays", &self.bays)
            .field("jobs", &self.jobs)
            .finish_non_exhaustive()
    }
}

impl Depot {
    /// Loads every store from `storage`.
    ///
    /// Missing or corrupt values are replaced by defaults; this never fails.
    #[must_use]
    pub fn init(mut storage: Box<dyn DurableStorage>) -> Self {
        let mut session: SessionStore = SessionStore::new();
        session.init(storage.as_mut());
        let bays: BayRegistry = BayRegistry::load(storage.as_mut());
        let jobs: JobRegistry = JobRegistry::load(storage.as_mut());
        info!(
            bays = bays.bays().len(),
            jobs = jobs.jobs().len(),
            "Depot state loaded"
        );
        Self {
            storage,
            session,
            bays,
            jobs,
        }
    }

    /// Tears the stores down and hands the storage back. Stored values are
    /// left as they are.
    #[must_use]
    pub fn dispose(mut self) -> Box<dyn DurableStorage> {
        self.session.dispose();
        info!("Depot state disposed");
        self.storage
    }

    /// Logs in. See [`SessionStore::login`].
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty.
    pub fn login(&mut self, username: &str, role: Role) -> Result<&Session, CoreError> {
        self.session.login(self.storage.as_mut(), username, role)
    }

    /// Logs out.
    pub fn logout(&mut self) {
        self.session.logout(self.storage.as_mut());
    }

    /// The current session.
    #[must_use]
    pub const fn session(&self) -> Option<&Session> {
        self.session.current()
    }

    /// The session load phase.
    #[must_use]
    pub const fn session_phase(&self) -> SessionPhase {
        self.session.phase()
    }

    /// Runs the access gate for a request path.
    #[must_use]
    pub fn navigate(&self, path: &str) -> GateDecision {
        AccessGate::evaluate(
            self.session.phase(),
            self.session.current(),
            Page::from_path(path),
        )
    }

    /// All bays.
    #[must_use]
    pub fn bays(&self) -> &[Bay] {
        self.bays.bays()
    }

    /// One bay.
    #[must_use]
    pub fn bay(&self, bay_id: &str) -> Option<&Bay> {
        self.bays.get_status(bay_id)
    }

    /// Changes a bay. `None` if the id is unknown.
    pub fn set_bay_status(
        &mut self,
        bay_id: &str,
        status: BayStatus,
        occupant: Occupant,
    ) -> Option<&Bay> {
        self.bays
            .set_status(self.storage.as_mut(), bay_id, status, occupant)
    }

    /// Occupancy counts and the per-section layout.
    #[must_use]
    pub fn depot_summary(&self) -> DepotSummary {
        self.bays.summary()
    }

    /// Jobs matching `query`.
    #[must_use]
    pub fn list_jobs(&self, query: &JobQuery) -> Vec<&Job> {
        self.jobs.list(query)
    }

    /// One job.
    #[must_use]
    pub fn job(&self, job_id: &str) -> Option<&Job> {
        self.jobs.get(job_id)
    }

    /// Job board counts.
    #[must_use]
    pub fn job_stats(&self) -> JobStats {
        self.jobs.stats()
    }

    /// Closes a job as the current user, stamped with the current time.
    ///
    /// # Errors
    ///
    /// See [`DepotService::close_job`].
    pub fn close_job(&mut self, job_id: &str) -> Result<JobClosure, CoreError> {
        self.close_job_at(job_id, &closure_timestamp())
    }

    /// Closes a job as the current user with an explicit timestamp.
    ///
    /// # Errors
    ///
    /// See [`DepotService::close_job`].
    pub fn close_job_at(&mut self, job_id: &str, closed_at: &str) -> Result<JobClosure, CoreError> {
        DepotService::close_job(
            self.session.current(),
            &mut self.jobs,
            &mut self.bays,
            self.storage.as_mut(),
            job_id,
            closed_at,
        )
    }
}
