// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::storage::{BAY_LAYOUT_KEY, DurableStorage, load_json, persist_json};
use kmrl_ragi_domain::{Bay, BayStatus, DepotSummary, READY_ACTIVITY, default_bay_layout};
use tracing::{debug, info, warn};

/// What happens to a bay's occupant on a status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Occupant {
    /// Leave the occupying train as it is.
    Keep,
    /// Remove the occupying train.
    Clear,
    /// Put this train in the bay.
    Assign(String),
}

/// The authoritative list of depot bays, mirrored to durable storage.
///
/// The set of bay ids never changes after load. Every mutation rewrites the
/// whole layout in storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BayRegistry {
    bays: Vec<Bay>,
}

impl BayRegistry {
    /// Loads the layout from storage.
    ///
    /// Missing or unreadable layouts fall back to the default layout, which
    /// is then written back.
    pub fn load(storage: &mut dyn DurableStorage) -> Self {
        let bays: Vec<Bay> = match load_json::<Vec<Bay>>(storage, BAY_LAYOUT_KEY) {
            Ok(Some(bays)) => {
                debug!(count = bays.len(), "Loaded bay layout");
                return Self { bays };
            }
            Ok(None) => {
                info!("No stored bay layout, seeding defaults");
                default_bay_layout()
            }
            Err(e) => {
                warn!(error = %e, "Stored bay layout unusable, reseeding defaults");
                default_bay_layout()
            }
        };

        let registry: Self = Self { bays };
        registry.persist(storage);
        registry
    }

    /// Returns all bays in layout order.
    #[must_use]
    pub fn bays(&self) -> &[Bay] {
        &self.bays
    }

    /// Returns the bay with this id.
    #[must_use]
    pub fn get_status(&self, bay_id: &str) -> Option<&Bay> {
        self.bays.iter().find(|bay| bay.id == bay_id)
    }

    /// Changes a bay's status and occupant, then persists the layout.
    ///
    /// A bay made available always loses its train and crew and gets the
    /// `Ready` activity, whatever `occupant` says. An unknown id changes
    /// nothing and writes nothing.
    pub fn set_status(
        &mut self,
        storage: &mut dyn DurableStorage,
        bay_id: &str,
        status: BayStatus,
        occupant: Occupant,
    ) -> Option<&Bay> {
        let Some(index) = self.bays.iter().position(|bay| bay.id == bay_id) else {
            warn!(bay_id, "Bay not found, status unchanged");
            return None;
        };

        {
            let bay: &mut Bay = &mut self.bays[index];
            bay.status = status;
            match occupant {
                Occupant::Keep => {}
                Occupant::Clear => bay.train = None,
                Occupant::Assign(train) => bay.train = Some(train),
            }
            if status == BayStatus::Available {
                bay.train = None;
                bay.activity = READY_ACTIVITY.to_string();
                bay.crew = None;
            }
            info!(
                bay_id,
                status = status.as_str(),
                train = bay.train.as_deref().unwrap_or("-"),
                "Bay status changed"
            );
        }

        self.persist(storage);
        self.bays.get(index)
    }

    /// Computes the depot occupancy summary.
    #[must_use]
    pub fn summary(&self) -> DepotSummary {
        DepotSummary::from_bays(&self.bays)
    }

    fn persist(&self, storage: &mut dyn DurableStorage) {
        if let Err(e) = persist_json(storage, BAY_LAYOUT_KEY, &self.bays) {
            warn!(error = %e, "Failed to persist bay layout");
        }
    }
}
