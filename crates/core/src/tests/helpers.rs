// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BayRegistry, Depot, DurableStorage, JobRegistry, MemoryStorage, StorageError};
use kmrl_ragi_domain::Role;

/// Storage whose reads succeed against an inner map and whose writes fail.
#[derive(Debug, Default)]
pub struct ReadOnlyStorage {
    pub inner: MemoryStorage,
}

impl DurableStorage for ReadOnlyStorage {
    fn get_item(&mut self, key: &str) -> Result<Option<String>, StorageError> {
        self.inner.get_item(key)
    }

    fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend(String::from("disk full")))
    }

    fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
        Err(StorageError::Backend(String::from("disk full")))
    }
}

pub fn create_test_storage() -> MemoryStorage {
    MemoryStorage::new()
}

pub fn create_test_depot() -> Depot {
    Depot::init(Box::new(MemoryStorage::new()))
}

pub fn create_supervisor_depot() -> Depot {
    let mut depot: Depot = create_test_depot();
    depot.login("Rajesh", Role::Supervisor).unwrap();
    depot
}

pub fn create_admin_depot() -> Depot {
    let mut depot: Depot = create_test_depot();
    depot.login("Anita", Role::Admin).unwrap();
    depot
}

/// Seeds fresh storage and loads both registries from it.
pub fn create_seeded_registries() -> (MemoryStorage, BayRegistry, JobRegistry) {
    let mut storage: MemoryStorage = create_test_storage();
    let bays: BayRegistry = BayRegistry::load(&mut storage);
    let jobs: JobRegistry = JobRegistry::load(&mut storage);
    (storage, bays, jobs)
}
