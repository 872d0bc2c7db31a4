// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{ReadOnlyStorage, create_test_storage};
use crate::{CoreError, DurableStorage, MemoryStorage, SESSION_KEY, SessionPhase, SessionStore};
use kmrl_ragi_domain::{DomainError, Role, Session};

#[test]
fn test_new_store_is_loading_with_no_session() {
    let store: SessionStore = SessionStore::new();

    assert_eq!(store.phase(), SessionPhase::Loading);
    assert!(store.current().is_none());
}

#[test]
fn test_init_on_empty_storage_is_ready_and_logged_out() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();

    store.init(&mut storage);

    assert_eq!(store.phase(), SessionPhase::Ready);
    assert!(store.current().is_none());
}

#[test]
fn test_login_creates_authenticated_session_with_requested_role() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);

    let session: Session = store
        .login(&mut storage, "Rajesh", Role::Supervisor)
        .unwrap()
        .clone();

    assert_eq!(session.username, "Rajesh");
    assert_eq!(session.role, Role::Supervisor);
    assert!(session.authenticated);
    assert_eq!(store.current(), Some(&session));
}

#[test]
fn test_login_persists_session_in_stored_format() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);

    store.login(&mut storage, "Anita", Role::Admin).unwrap();

    let raw: serde_json::Value = serde_json::from_str(storage.peek(SESSION_KEY).unwrap()).unwrap();
    assert_eq!(raw["username"], "Anita");
    assert_eq!(raw["role"], "admin");
    assert_eq!(raw["isAuthenticated"], true);
}

#[test]
fn test_login_with_empty_username_is_rejected_without_write() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);

    let result: Result<&Session, CoreError> = store.login(&mut storage, "", Role::Admin);

    assert_eq!(
        result.unwrap_err(),
        CoreError::DomainViolation(DomainError::EmptyUsername)
    );
    assert!(storage.peek(SESSION_KEY).is_none());
}

#[test]
fn test_second_login_replaces_first() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);

    store.login(&mut storage, "Anita", Role::Admin).unwrap();
    store.login(&mut storage, "Rajesh", Role::Supervisor).unwrap();

    let session: &Session = store.current().unwrap();
    assert_eq!(session.username, "Rajesh");
    assert_eq!(session.role, Role::Supervisor);
}

#[test]
fn test_session_survives_restart() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);
    store.login(&mut storage, "Rajesh", Role::Supervisor).unwrap();
    store.dispose();

    let mut restarted: SessionStore = SessionStore::new();
    restarted.init(&mut storage);

    assert_eq!(restarted.current().unwrap().username, "Rajesh");
}

#[test]
fn test_logout_clears_memory_and_storage_and_is_idempotent() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);
    store.login(&mut storage, "Rajesh", Role::Supervisor).unwrap();

    store.logout(&mut storage);
    store.logout(&mut storage);

    assert!(store.current().is_none());
    assert!(storage.peek(SESSION_KEY).is_none());
}

#[test]
fn test_corrupt_session_is_deleted_on_init() {
    let mut storage: MemoryStorage = create_test_storage();
    storage.set_item(SESSION_KEY, "{not json").unwrap();
    let mut store: SessionStore = SessionStore::new();

    store.init(&mut storage);

    assert_eq!(store.phase(), SessionPhase::Ready);
    assert!(store.current().is_none());
    assert!(storage.peek(SESSION_KEY).is_none());
}

#[test]
fn test_session_with_unknown_role_is_treated_as_corrupt() {
    let mut storage: MemoryStorage = create_test_storage();
    storage
        .set_item(
            SESSION_KEY,
            r#"{"username":"x","role":"driver","isAuthenticated":true}"#,
        )
        .unwrap();
    let mut store: SessionStore = SessionStore::new();

    store.init(&mut storage);

    assert!(store.current().is_none());
}

#[test]
fn test_failed_write_still_logs_in() {
    let mut storage: ReadOnlyStorage = ReadOnlyStorage::default();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);

    let result: Result<&Session, CoreError> = store.login(&mut storage, "Rajesh", Role::Supervisor);

    assert!(result.is_ok());
    assert_eq!(store.current().unwrap().role, Role::Supervisor);
}

#[test]
fn test_dispose_returns_to_loading_without_touching_storage() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut store: SessionStore = SessionStore::new();
    store.init(&mut storage);
    store.login(&mut storage, "Rajesh", Role::Supervisor).unwrap();

    store.dispose();

    assert_eq!(store.phase(), SessionPhase::Loading);
    assert!(store.current().is_none());
    assert!(storage.peek(SESSION_KEY).is_some());
}
