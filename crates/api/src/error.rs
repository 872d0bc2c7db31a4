// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use crate::login_policy::LoginValidationError;
use kmrl_ragi::CoreError;
use kmrl_ragi_domain::DomainError;

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// No user is logged in.
    Unauthenticated {
        /// The action that was attempted.
        action: String,
    },
    /// The logged-in user has the wrong role.
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthenticated { action } => {
                write!(f, "Not logged in: '{action}' requires a session")
            }
            Self::Unauthorized {
                action,
                required_role,
            } => {
                write!(f, "Unauthorized: '{action}' requires {required_role} role")
            }
            Self::DomainRuleViolation { rule, message } => {
                write!(f, "Domain rule violation ({rule}): {message}")
            }
            Self::InvalidInput { field, message } => {
                write!(f, "Invalid input for field '{field}': {message}")
            }
            Self::ResourceNotFound {
                resource_type,
                message,
            } => {
                write!(f, "{resource_type} not found: {message}")
            }
            Self::Internal { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl From<LoginValidationError> for ApiError {
    fn from(err: LoginValidationError) -> Self {
        let field: &str = match err {
            LoginValidationError::MissingCredentials => "credentials",
            LoginValidationError::InvalidRole { .. } => "role",
        };
        Self::InvalidInput {
            field: field.to_string(),
            message: err.to_string(),
        }
    }
}

/// Translates a domain error into an API error.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    let field: &str = match &err {
        DomainError::InvalidRole(_) => "role",
        DomainError::InvalidBaySection(_) | DomainError::InvalidJobType(_) => "type",
        DomainError::InvalidBayStatus(_) | DomainError::InvalidJobStatus(_) => "status",
        DomainError::InvalidJobPriority(_) => "priority",
        DomainError::EmptyUsername => "username",
    };
    ApiError::InvalidInput {
        field: field.to_string(),
        message: err.to_string(),
    }
}

/// Translates a core error into an API error.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
        CoreError::Unauthenticated { action } => ApiError::Unauthenticated { action },
        CoreError::Unauthorized {
            action,
            required_role,
            ..
        } => ApiError::Unauthorized {
            action,
            required_role: required_role.to_string(),
        },
        CoreError::JobNotFound(job_id) => ApiError::ResourceNotFound {
            resource_type: String::from("Job"),
            message: format!("Job '{job_id}' does not exist"),
        },
        CoreError::JobAlreadyClosed { job_id, status } => ApiError::DomainRuleViolation {
            rule: String::from("job_open"),
            message: format!("Job '{job_id}' is already {status}"),
        },
    }
}
