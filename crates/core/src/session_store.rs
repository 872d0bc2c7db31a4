// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::CoreError;
use crate::storage::{DurableStorage, SESSION_KEY, StorageError, load_json, persist_json};
use kmrl_ragi_domain::{Role, Session};
use tracing::{debug, info, warn};

/// Whether the session store has finished reading durable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Storage has not been read yet. No access decision can be made.
    Loading,
    /// Storage has been read. The session, if any, is authoritative.
    Ready,
}

/// Holds the current user, mirrored to durable storage.
///
/// Starts in `Loading`. `init` moves it to `Ready` exactly once per
/// lifetime, whatever storage contains.
#[derive(Debug, Clone)]
pub struct SessionStore {
    phase: SessionPhase,
    session: Option<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Creates a store that has not read storage yet.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            phase: SessionPhase::Loading,
            session: None,
        }
    }

    /// Restores the session from storage and marks the store ready.
    ///
    /// A stored value that does not parse is deleted and the store starts
    /// with no session.
    pub fn init(&mut self, storage: &mut dyn DurableStorage) {
        self.session = match load_json::<Session>(storage, SESSION_KEY) {
            Ok(Some(session)) => {
                info!(username = %session.username, role = %session.role, "Restored session");
                Some(session)
            }
            Ok(None) => None,
            Err(StorageError::Corrupt { key, reason }) => {
                warn!(key, reason, "Discarding corrupt session");
                if let Err(e) = storage.remove_item(SESSION_KEY) {
                    warn!(error = %e, "Failed to delete corrupt session");
                }
                None
            }
            Err(e) => {
                warn!(error = %e, "Failed to read session, starting logged out");
                None
            }
        };
        self.phase = SessionPhase::Ready;
    }

    /// Creates a session for `username` with `role` and persists it.
    ///
    /// There is no credential check. Logging in again replaces any prior
    /// session. A failed write is logged; the in-memory session still
    /// takes effect.
    ///
    /// # Errors
    ///
    /// Returns an error if the username is empty.
    pub fn login(
        &mut self,
        storage: &mut dyn DurableStorage,
        username: &str,
        role: Role,
    ) -> Result<&Session, CoreError> {
        let session: Session = Session::new(username, role)?;
        if let Err(e) = persist_json(storage, SESSION_KEY, &session) {
            warn!(error = %e, "Failed to persist session");
        }
        info!(username, role = %role, "User logged in");
        Ok(self.session.insert(session))
    }

    /// Clears the session and deletes the stored copy. Idempotent.
    pub fn logout(&mut self, storage: &mut dyn DurableStorage) {
        if let Some(session) = self.session.take() {
            info!(username = %session.username, "User logged out");
        } else {
            debug!("Logout with no active session");
        }
        if let Err(e) = storage.remove_item(SESSION_KEY) {
            warn!(error = %e, "Failed to delete stored session");
        }
    }

    /// Returns the current session, if any.
    #[must_use]
    pub const fn current(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Returns the load phase.
    #[must_use]
    pub const fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// Drops the in-memory session without touching storage and returns the
    /// store to `Loading`.
    pub fn dispose(&mut self) {
        self.session = None;
        self.phase = SessionPhase::Loading;
    }
}
