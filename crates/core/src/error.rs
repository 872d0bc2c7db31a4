// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use kmrl_ragi_domain::{DomainError, JobStatus, Role};

/// Errors raised by depot state operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreError {
    /// A domain rule was violated.
    DomainViolation(DomainError),
    /// The action needs a logged-in session and there is none.
    Unauthenticated {
        /// The attempted action.
        action: String,
    },
    /// The session holds the wrong role for the action.
    Unauthorized {
        /// The attempted action.
        action: String,
        /// The role the action needs.
        required_role: Role,
        /// The role the session holds.
        actual_role: Role,
    },
    /// No job with this identifier exists.
    JobNotFound(String),
    /// The job is already completed or cancelled.
    JobAlreadyClosed {
        /// The job identifier.
        job_id: String,
        /// Its terminal status.
        status: JobStatus,
    },
}

impl std::fmt::Display for CoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
            Self::Unauthenticated { action } => {
                write!(f, "Cannot {action}: no user is logged in")
            }
            Self::Unauthorized {
                action,
                required_role,
                actual_role,
            } => write!(
                f,
                "Cannot {action}: requires role '{required_role}', current role is '{actual_role}'"
            ),
            Self::JobNotFound(job_id) => write!(f, "Job '{job_id}' not found"),
            Self::JobAlreadyClosed { job_id, status } => {
                write!(f, "Job '{job_id}' is already {status}")
            }
        }
    }
}

impl std::error::Error for CoreError {}

impl From<DomainError> for CoreError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
