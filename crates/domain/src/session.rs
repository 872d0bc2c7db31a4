// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Operator roles for the depot console.
///
/// Roles gate whole pages and the job-close action. There is no hierarchy:
/// an admin is not a superset of a supervisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Admin role: system configuration and settings.
    Admin,
    /// Supervisor role: job management, including closing job cards.
    Supervisor,
}

impl Role {
    /// Returns the string representation used in storage and the API.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Supervisor => "supervisor",
        }
    }
}

impl FromStr for Role {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "supervisor" => Ok(Self::Supervisor),
            _ => Err(DomainError::InvalidRole(s.to_string())),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The logged-in user held by the session store.
///
/// Stored verbatim as JSON, so the field names follow the stored format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// The username entered at login. Never verified.
    pub username: String,
    /// The role selected at login.
    pub role: Role,
    /// Always `true` for a session created by login.
    #[serde(rename = "isAuthenticated", alias = "authenticated")]
    pub authenticated: bool,
}

impl Session {
    /// Creates an authenticated session.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::EmptyUsername` if the username is empty.
    pub fn new(username: &str, role: Role) -> Result<Self, DomainError> {
        if username.is_empty() {
            return Err(DomainError::EmptyUsername);
        }
        Ok(Self {
            username: username.to_string(),
            role,
            authenticated: true,
        })
    }

    /// Returns whether this session holds exactly the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}
