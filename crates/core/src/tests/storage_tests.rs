// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_storage;
use crate::{
    BAY_LAYOUT_KEY, Depot, DurableStorage, JOBS_KEY, MemoryStorage, Occupant, SESSION_KEY,
    SessionPhase, StorageError, load_json, persist_json,
};
use kmrl_ragi_domain::{BayStatus, Role};

#[test]
fn test_load_json_missing_key_is_none() {
    let mut storage: MemoryStorage = create_test_storage();

    let loaded: Option<Vec<String>> = load_json(&mut storage, "absent").unwrap();

    assert!(loaded.is_none());
}

#[test]
fn test_load_json_reports_corrupt_value() {
    let mut storage: MemoryStorage = create_test_storage();
    storage.set_item("k", "not json").unwrap();

    let result: Result<Option<Vec<String>>, StorageError> = load_json(&mut storage, "k");

    assert!(matches!(result, Err(StorageError::Corrupt { key, .. }) if key == "k"));
}

#[test]
fn test_persist_json_replaces_whole_value() {
    let mut storage: MemoryStorage = create_test_storage();

    persist_json(&mut storage, "k", &[1, 2, 3]).unwrap();
    persist_json(&mut storage, "k", &[4]).unwrap();

    assert_eq!(storage.peek("k"), Some("[4]"));
}

#[test]
fn test_remove_missing_key_is_ok() {
    let mut storage: MemoryStorage = create_test_storage();

    assert!(storage.remove_item("absent").is_ok());
}

#[test]
fn test_depot_init_seeds_every_key() {
    let depot: Depot = Depot::init(Box::new(create_test_storage()));

    assert_eq!(depot.session_phase(), SessionPhase::Ready);
    let mut storage: Box<dyn DurableStorage> = depot.dispose();
    assert!(storage.get_item(BAY_LAYOUT_KEY).unwrap().is_some());
    assert!(storage.get_item(JOBS_KEY).unwrap().is_some());
    assert!(storage.get_item(SESSION_KEY).unwrap().is_none());
}

#[test]
fn test_depot_state_survives_dispose_and_reinit() {
    let mut depot: Depot = Depot::init(Box::new(create_test_storage()));
    depot.login("Rajesh", Role::Supervisor).unwrap();
    depot.close_job_at("JOB-003", "23:15:00").unwrap();
    depot.set_bay_status(
        "A-04",
        BayStatus::Occupied,
        Occupant::Assign(String::from("KABANI")),
    );
    let bays = depot.bays().to_vec();

    let restarted: Depot = Depot::init(depot.dispose());

    assert_eq!(restarted.session().unwrap().username, "Rajesh");
    assert_eq!(restarted.bays(), bays.as_slice());
    assert_eq!(
        restarted.job("JOB-003").unwrap().closed_at.as_deref(),
        Some("23:15:00")
    );
}
