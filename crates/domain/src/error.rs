// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors that can occur while interpreting domain values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Role string is not one of the known roles.
    InvalidRole(String),
    /// Bay section string is not a known section.
    InvalidBaySection(String),
    /// Bay status string is not a known status.
    InvalidBayStatus(String),
    /// Job type string is not a known job type.
    InvalidJobType(String),
    /// Job priority string is not a known priority.
    InvalidJobPriority(String),
    /// Job status string is not a known status.
    InvalidJobStatus(String),
    /// Username is empty.
    EmptyUsername,
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRole(role) => {
                write!(f, "Invalid role: '{role}'. Must be 'admin' or 'supervisor'")
            }
            Self::InvalidBaySection(section) => write!(f, "Invalid bay section: '{section}'"),
            Self::InvalidBayStatus(status) => {
                write!(
                    f,
                    "Invalid bay status: '{status}'. Must be 'occupied' or 'available'"
                )
            }
            Self::InvalidJobType(job_type) => write!(f, "Invalid job type: '{job_type}'"),
            Self::InvalidJobPriority(priority) => {
                write!(f, "Invalid job priority: '{priority}'")
            }
            Self::InvalidJobStatus(status) => write!(f, "Invalid job status: '{status}'"),
            Self::EmptyUsername => write!(f, "Username cannot be empty"),
        }
    }
}

impl std::error::Error for DomainError {}
