// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::storage::{DurableStorage, JOBS_KEY, load_json, persist_json};
use kmrl_ragi_domain::{Job, JobQuery, JobStats, default_jobs};
use tracing::{debug, info, warn};

/// The authoritative list of job cards, mirrored to durable storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobRegistry {
    jobs: Vec<Job>,
}

impl JobRegistry {
    /// Loads jobs from storage, seeding and writing back the default list
    /// when storage holds nothing usable.
    pub fn load(storage: &mut dyn DurableStorage) -> Self {
        let jobs: Vec<Job> = match load_json::<Vec<Job>>(storage, JOBS_KEY) {
            Ok(Some(jobs)) => {
                debug!(count = jobs.len(), "Loaded jobs");
                return Self { jobs };
            }
            Ok(None) => {
                info!("No stored jobs, seeding defaults");
                default_jobs()
            }
            Err(e) => {
                warn!(error = %e, "Stored jobs unusable, reseeding defaults");
                default_jobs()
            }
        };

        let registry: Self = Self { jobs };
        registry.persist(storage);
        registry
    }

    /// Returns all jobs in stored order.
    #[must_use]
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// Returns the job with this id.
    #[must_use]
    pub fn get(&self, job_id: &str) -> Option<&Job> {
        self.jobs.iter().find(|job| job.id == job_id)
    }

    /// Returns the jobs matching a query, in stored order.
    #[must_use]
    pub fn list(&self, query: &JobQuery) -> Vec<&Job> {
        self.jobs.iter().filter(|job| query.matches(job)).collect()
    }

    /// Computes the job header counts.
    #[must_use]
    pub fn stats(&self) -> JobStats {
        JobStats::from_jobs(&self.jobs)
    }

    /// Marks a job completed and persists the list.
    ///
    /// Does not check roles; callers go through the close-job service.
    ///
    /// # Errors
    ///
    /// Returns an error if the job does not exist or is already closed.
    pub fn complete(
        &mut self,
        storage: &mut dyn DurableStorage,
        job_id: &str,
        closed_by: &str,
        closed_at: &str,
    ) -> Result<&Job, CoreError> {
        let index: usize = self
            .jobs
            .iter()
            .position(|job| job.id == job_id)
            .ok_or_else(|| CoreError::JobNotFound(job_id.to_string()))?;

        let status = self.jobs[index].status;
        if status.is_terminal() {
            return Err(CoreError::JobAlreadyClosed {
                job_id: job_id.to_string(),
                status,
            });
        }

        self.jobs[index].mark_completed(closed_by, closed_at);
        self.persist(storage);
        info!(job_id, closed_by, closed_at, "Job completed");
        Ok(&self.jobs[index])
    }

    fn persist(&self, storage: &mut dyn DurableStorage) {
        if let Err(e) = persist_json(storage, JOBS_KEY, &self.jobs) {
            warn!(error = %e, "Failed to persist jobs");
        }
    }
}
