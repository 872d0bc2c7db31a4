// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Fleet snapshot sources for the train explorer.

use kmrl_ragi_domain::{CleaningStatus, FleetSnapshot, TrainSnapshot, TrainStatus};
use rand::rngs::StdRng;
use rand::{Rng, RngExt, SeedableRng};
use tracing::info;

/// Default number of trains in a generated fleet.
pub const DEFAULT_FLEET_SIZE: usize = 25;

const TRAIN_MODEL: &str = "Alstom Metropolis";

const LOCATIONS: [&str; 14] = [
    "Aluva-Petta Route",
    "Palarivattom-Vytilla",
    "Edapally-JLN Stadium",
    "MG Road-Maharaja's",
    "Ernakulam South-Kadavanthra",
    "Kaloor-Town Hall",
    "Depot A-Bay 1",
    "Depot A-Bay 2",
    "Depot A-Bay 3",
    "Depot B-Bay 1",
    "Depot B-Bay 2",
    "Depot C-Bay 1",
    "Lissie-Vyttila",
    "SN Junction-Maharaja's",
];

const CLEANING_STATUSES: [CleaningStatus; 3] = [
    CleaningStatus::Clean,
    CleaningStatus::Pending,
    CleaningStatus::Dirty,
];

/// A source of fleet snapshots.
pub trait FleetSnapshotProvider: Send + Sync {
    /// Returns the current fleet.
    fn snapshot(&self) -> FleetSnapshot;
}

/// A fixed snapshot, returned unchanged on every call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticFleet(pub FleetSnapshot);

impl FleetSnapshotProvider for StaticFleet {
    fn snapshot(&self) -> FleetSnapshot {
        self.0.clone()
    }
}

/// A randomly generated fleet. Generated once; every snapshot after that
/// is the same data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedFleet {
    snapshot: FleetSnapshot,
}

impl GeneratedFleet {
    /// Generates `size` trains named `KMRL-01`, `KMRL-02`, and so on, from
    /// the thread-local generator.
    #[must_use]
    pub fn generate(size: usize) -> Self {
        Self::generate_with(size, &mut rand::rng())
    }

    /// Generates a reproducible fleet from `seed`.
    #[must_use]
    pub fn seeded(size: usize, seed: u64) -> Self {
        Self::generate_with(size, &mut StdRng::seed_from_u64(seed))
    }

    /// Generates `size` trains drawing from `rng`.
    pub fn generate_with<R: Rng + ?Sized>(size: usize, rng: &mut R) -> Self {
        let trains: Vec<TrainSnapshot> = (1..=size)
            .map(|number| generate_train(rng, number))
            .collect();
        info!(size, "Generated fleet snapshot");
        Self {
            snapshot: FleetSnapshot::new(trains),
        }
    }
}

impl FleetSnapshotProvider for GeneratedFleet {
    fn snapshot(&self) -> FleetSnapshot {
        self.snapshot.clone()
    }
}

/// True with probability `1 - threshold`.
fn above<R: Rng + ?Sized>(rng: &mut R, threshold: f64) -> bool {
    rng.random_bool(1.0 - threshold)
}

fn pick<T: Copy, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> T {
    items[rng.random_range(..items.len())]
}

fn letter<R: Rng + ?Sized>(rng: &mut R, last: u8) -> char {
    char::from(rng.random_range(b'A'..=last))
}

fn generate_train<R: Rng + ?Sized>(rng: &mut R, number: usize) -> TrainSnapshot {
    let is_active: bool = above(rng, 0.3);
    let has_issues: bool = above(rng, 0.7);
    let status: TrainStatus = if !is_active {
        TrainStatus::Inactive
    } else if above(rng, 0.8) {
        TrainStatus::Maintenance
    } else {
        TrainStatus::Active
    };

    TrainSnapshot {
        id: format!("KMRL-{number:02}"),
        model: TRAIN_MODEL.to_string(),
        status,
        location: pick(rng, &LOCATIONS).to_string(),
        health_score: rng.random_range(60..=99),
        total_mileage: rng.random_range(250_000..=449_999),
        last_maintenance: format!("2024-09-{:02}", rng.random_range(1..=25)),
        next_maintenance: format!("2024-10-{:02}", rng.random_range(1..=30)),
        maintenance_due: rng.random_range(1..=30),
        fitness_valid: above(rng, 0.2),
        fitness_expiry: format!(
            "2024-{:02}-{:02}",
            rng.random_range(1..=12),
            rng.random_range(1..=28)
        ),
        cleaning_status: pick(rng, &CLEANING_STATUSES),
        critical_issues: if has_issues { rng.random_range(1..=3) } else { 0 },
        battery_level: rng.random_range(50..=99),
        current_speed: if is_active { rng.random_range(10..=49) } else { 0 },
        passenger_load: if is_active { rng.random_range(30..=89) } else { 0 },
        avg_daily_mileage: rng.random_range(200..=299),
        manufacture_year: rng.random_range(2017..=2022),
        assigned_crew: format!("Team {}", letter(rng, b'H')),
        bay: format!("{}-{number:02}", letter(rng, b'C')),
    }
}
