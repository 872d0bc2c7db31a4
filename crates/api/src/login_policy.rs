// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Login form validation.
//!
//! Credentials are never checked against anything. The form only has to be
//! filled in and name a known role.

use kmrl_ragi_domain::Role;
use thiserror::Error;

/// Login form errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LoginValidationError {
    /// Username or password is blank.
    #[error("Please enter both username and password")]
    MissingCredentials,

    /// The role is not one the console knows.
    #[error("Invalid role: '{role}'. Must be 'admin' or 'supervisor'")]
    InvalidRole { role: String },
}

/// Validates a login form and returns the selected role.
///
/// A missing role defaults to admin, the login form's initial selection.
///
/// # Errors
///
/// Returns an error if the username or password is empty, or the role is
/// unknown.
pub fn validate_login(
    username: &str,
    password: &str,
    role: Option<&str>,
) -> Result<Role, LoginValidationError> {
    if username.is_empty() || password.is_empty() {
        return Err(LoginValidationError::MissingCredentials);
    }

    match role {
        None => Ok(Role::Admin),
        Some(role) => role
            .parse::<Role>()
            .map_err(|_| LoginValidationError::InvalidRole {
                role: role.to_string(),
            }),
    }
}
