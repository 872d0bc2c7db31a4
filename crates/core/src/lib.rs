// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod access;
mod bay_registry;
mod depot;
mod error;
mod fleet;
mod job_registry;
mod service;
mod session_store;
mod storage;

#[cfg(test)]
mod tests;

pub use access::{AccessGate, GateDecision, LOGIN_PATH, Page, PageAccess};
pub use bay_registry::{BayRegistry, Occupant};
pub use depot::Depot;
pub use error::CoreError;
pub use fleet::{DEFAULT_FLEET_SIZE, FleetSnapshotProvider, GeneratedFleet, StaticFleet};
pub use job_registry::JobRegistry;
pub use service::{
    BayRelease, DepotService, JobClosure, authorize, closure_timestamp, current_shift, shift_at,
};
pub use session_store::{SessionPhase, SessionStore};
pub use storage::{
    BAY_LAYOUT_KEY, DurableStorage, JOBS_KEY, MemoryStorage, SESSION_KEY, StorageError,
    load_json, persist_json,
};
