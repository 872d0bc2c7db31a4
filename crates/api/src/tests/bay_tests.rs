// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_depot_as;
use crate::{ApiError, SetBayStatusRequest, depot_summary, get_bay, list_bays, set_bay_status};
use kmrl_ragi::Depot;
use kmrl_ragi_domain::{Bay, BayStatus, DepotSummary};

fn parse_request(json: &str) -> SetBayStatusRequest {
    serde_json::from_str(json).unwrap()
}

#[test]
fn test_list_bays_returns_fourteen() {
    let depot: Depot = create_depot_as("admin");

    assert_eq!(list_bays(&depot).unwrap().bays.len(), 14);
}

#[test]
fn test_get_unknown_bay_is_not_found() {
    let depot: Depot = create_depot_as("admin");

    assert!(matches!(
        get_bay(&depot, "Z-99"),
        Err(ApiError::ResourceNotFound { .. })
    ));
}

#[test]
fn test_train_field_absent_null_and_string() {
    assert_eq!(parse_request(r#"{"status":"occupied"}"#).train, None);
    assert_eq!(parse_request(r#"{"status":"occupied","train":null}"#).train, Some(None));
    assert_eq!(
        parse_request(r#"{"status":"occupied","train":"KABANI"}"#).train,
        Some(Some(String::from("KABANI")))
    );
}

#[test]
fn test_assign_train_to_free_bay() {
    let mut depot: Depot = create_depot_as("supervisor");

    let bay: Bay = set_bay_status(
        &mut depot,
        "A-04",
        &parse_request(r#"{"status":"occupied","train":"KABANI"}"#),
    )
    .unwrap();

    assert_eq!(bay.status, BayStatus::Occupied);
    assert_eq!(bay.train.as_deref(), Some("KABANI"));
}

#[test]
fn test_absent_train_keeps_occupant() {
    let mut depot: Depot = create_depot_as("supervisor");

    let bay: Bay =
        set_bay_status(&mut depot, "A-01", &parse_request(r#"{"status":"occupied"}"#)).unwrap();

    assert_eq!(bay.train.as_deref(), Some("KRISHNA"));
    assert_eq!(bay.activity, "Standby");
}

#[test]
fn test_available_always_clears_train() {
    let mut depot: Depot = create_depot_as("supervisor");

    let kept: Bay =
        set_bay_status(&mut depot, "A-01", &parse_request(r#"{"status":"available"}"#)).unwrap();
    let assigned: Bay = set_bay_status(
        &mut depot,
        "A-02",
        &parse_request(r#"{"status":"available","train":"X"}"#),
    )
    .unwrap();

    assert!(kept.train.is_none());
    assert_eq!(kept.activity, "Ready");
    assert!(assigned.train.is_none());
}

#[test]
fn test_invalid_status_is_rejected() {
    let mut depot: Depot = create_depot_as("admin");

    let result: Result<Bay, ApiError> =
        set_bay_status(&mut depot, "A-01", &parse_request(r#"{"status":"closed"}"#));

    assert!(matches!(
        result,
        Err(ApiError::InvalidInput { ref field, .. }) if field == "status"
    ));
}

#[test]
fn test_unknown_bay_status_change_is_not_found() {
    let mut depot: Depot = create_depot_as("admin");

    let result: Result<Bay, ApiError> =
        set_bay_status(&mut depot, "Z-99", &parse_request(r#"{"status":"available"}"#));

    assert!(matches!(result, Err(ApiError::ResourceNotFound { .. })));
}

#[test]
fn test_depot_summary_counts() {
    let depot: Depot = create_depot_as("admin");

    let summary: DepotSummary = depot_summary(&depot).unwrap();

    assert_eq!(summary.total_bays, 14);
    assert_eq!(summary.available, 4);
    assert_eq!(summary.sections.len(), 4);
}
