// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Page-level access control.

use crate::session_store::SessionPhase;
use kmrl_ragi_domain::{Role, Session};
use serde::Serialize;

/// Where unauthenticated users are sent.
pub const LOGIN_PATH: &str = "/login";

/// A routable page of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Page {
    Login,
    Dashboard,
    Trains,
    Depot,
    Jobs,
    Induction,
    Reports,
    Settings,
    NotFound,
}

/// What a page requires of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAccess {
    /// Anyone may view it.
    Public,
    /// Any logged-in user may view it.
    Authenticated,
    /// Only a session holding exactly this role may view it.
    RequiresRole(Role),
}

impl Page {
    /// Resolves a request path. Query strings and a trailing slash are
    /// ignored; unknown paths map to `NotFound`.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let path: &str = path.split(['?', '#']).next().unwrap_or_default();
        let trimmed: &str = path.trim_end_matches('/');
        match trimmed {
            "" => Self::Dashboard,
            "/login" => Self::Login,
            "/trains" => Self::Trains,
            "/depot" => Self::Depot,
            "/jobs" => Self::Jobs,
            "/induction" => Self::Induction,
            "/reports" => Self::Reports,
            "/settings" => Self::Settings,
            _ => Self::NotFound,
        }
    }

    /// The canonical path of the page.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => "/",
            Self::Trains => "/trains",
            Self::Depot => "/depot",
            Self::Jobs => "/jobs",
            Self::Induction => "/induction",
            Self::Reports => "/reports",
            Self::Settings => "/settings",
            Self::NotFound => "*",
        }
    }

    /// The access rule for the page.
    #[must_use]
    pub const fn access(&self) -> PageAccess {
        match self {
            Self::Login | Self::NotFound => PageAccess::Public,
            Self::Jobs => PageAccess::RequiresRole(Role::Supervisor),
            Self::Settings => PageAccess::RequiresRole(Role::Admin),
            Self::Dashboard | Self::Trains | Self::Depot | Self::Induction | Self::Reports => {
                PageAccess::Authenticated
            }
        }
    }
}

/// The outcome of a navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    /// The session store has not finished loading.
    Loading,
    /// No session; send the user to the login page.
    RedirectToLogin,
    /// Logged in with the wrong role.
    Forbidden {
        page: Page,
        required: Role,
        actual: Role,
    },
    /// Render the page.
    Granted(Page),
}

/// Decides whether a page may be shown.
#[derive(Debug, Clone, Copy, Default)]
pub struct AccessGate;

impl AccessGate {
    /// Evaluates access to `page` for the current session.
    ///
    /// Public pages are granted even while the session is loading.
    #[must_use]
    pub fn evaluate(phase: SessionPhase, session: Option<&Session>, page: Page) -> GateDecision {
        let required: Option<Role> = match page.access() {
            PageAccess::Public => return GateDecision::Granted(page),
            PageAccess::Authenticated => None,
            PageAccess::RequiresRole(role) => Some(role),
        };

        if phase == SessionPhase::Loading {
            return GateDecision::Loading;
        }

        let Some(session) = session.filter(|session| session.authenticated) else {
            return GateDecision::RedirectToLogin;
        };

        match required {
            Some(role) if !session.has_role(role) => GateDecision::Forbidden {
                page,
                required: role,
                actual: session.role,
            },
            _ => GateDecision::Granted(page),
        }
    }
}
