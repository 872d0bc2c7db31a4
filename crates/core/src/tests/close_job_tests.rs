// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{
    create_admin_depot, create_seeded_registries, create_supervisor_depot, create_test_depot,
};
use crate::{
    BayRegistry, BayRelease, CoreError, Depot, DepotService, DurableStorage, GateDecision,
    JobClosure, JobRegistry, MemoryStorage, SESSION_KEY,
};
use kmrl_ragi_domain::{Bay, BayStatus, Job, JobStatus, READY_ACTIVITY, Role, Session};

#[test]
fn test_supervisor_closes_job_003_and_frees_bay_b02() {
    let mut depot: Depot = create_supervisor_depot();

    let closure: JobClosure = depot.close_job_at("JOB-003", "23:15:00").unwrap();

    assert_eq!(closure.job.status, JobStatus::Completed);
    assert_eq!(closure.job.progress, 100);
    assert_eq!(closure.job.closed_by.as_deref(), Some("Rajesh"));
    assert_eq!(closure.job.closed_at.as_deref(), Some("23:15:00"));

    let bay: &Bay = depot.bay("B-02").unwrap();
    assert_eq!(bay.status, BayStatus::Available);
    assert!(bay.train.is_none());
    assert!(bay.crew.is_none());
    assert_eq!(bay.activity, READY_ACTIVITY);
    assert_eq!(closure.bay_release, BayRelease::Released(bay.clone()));
    assert_eq!(depot.job("JOB-003").unwrap(), &closure.job);
}

#[test]
fn test_close_job_uses_wall_clock_timestamp() {
    let mut depot: Depot = create_supervisor_depot();

    let closure: JobClosure = depot.close_job("JOB-001").unwrap();

    let closed_at: String = closure.job.closed_at.unwrap();
    assert_eq!(closed_at.len(), 8);
    assert_eq!(closed_at.matches(':').count(), 2);
}

#[test]
fn test_closing_closed_job_keeps_closer_and_bay() {
    let mut depot: Depot = create_supervisor_depot();
    depot.close_job_at("JOB-003", "23:15:00").unwrap();
    depot.set_bay_status(
        "B-02",
        BayStatus::Occupied,
        crate::Occupant::Assign(String::from("DHWANIL")),
    );

    let result: Result<JobClosure, CoreError> = depot.close_job_at("JOB-003", "23:59:59");

    assert!(matches!(result, Err(CoreError::JobAlreadyClosed { .. })));
    let job: &Job = depot.job("JOB-003").unwrap();
    assert_eq!(job.closed_at.as_deref(), Some("23:15:00"));
    assert_eq!(depot.bay("B-02").unwrap().train.as_deref(), Some("DHWANIL"));
}

#[test]
fn test_closing_seeded_completed_job_keeps_original_closer() {
    let mut depot: Depot = create_supervisor_depot();

    let result: Result<JobClosure, CoreError> = depot.close_job_at("JOB-004", "23:59:59");

    assert!(result.is_err());
    let job: &Job = depot.job("JOB-004").unwrap();
    assert_eq!(job.closed_by.as_deref(), Some("Supervisor Rajesh"));
    assert_eq!(job.closed_at.as_deref(), Some("19:45"));
    assert_eq!(depot.bay("A-03").unwrap().train.as_deref(), Some("ARUTH"));
}

#[test]
fn test_admin_close_is_rejected_with_storage_byte_identical() {
    let (mut storage, mut bays, mut jobs) = create_seeded_registries();
    let admin: Session = Session::new("Anita", Role::Admin).unwrap();
    let storage_before: MemoryStorage = storage.clone();
    let bays_before: BayRegistry = bays.clone();
    let jobs_before: JobRegistry = jobs.clone();

    let result: Result<JobClosure, CoreError> = DepotService::close_job(
        Some(&admin),
        &mut jobs,
        &mut bays,
        &mut storage,
        "JOB-003",
        "23:15:00",
    );

    assert_eq!(
        result.unwrap_err(),
        CoreError::Unauthorized {
            action: String::from("close job"),
            required_role: Role::Supervisor,
            actual_role: Role::Admin,
        }
    );
    assert_eq!(storage, storage_before);
    assert_eq!(bays, bays_before);
    assert_eq!(jobs, jobs_before);
}

#[test]
fn test_anonymous_close_is_rejected_with_storage_byte_identical() {
    let (mut storage, mut bays, mut jobs) = create_seeded_registries();
    let storage_before: MemoryStorage = storage.clone();

    let result: Result<JobClosure, CoreError> = DepotService::close_job(
        None,
        &mut jobs,
        &mut bays,
        &mut storage,
        "JOB-003",
        "23:15:00",
    );

    assert!(matches!(result, Err(CoreError::Unauthenticated { .. })));
    assert_eq!(storage, storage_before);
}

#[test]
fn test_unauthenticated_stored_session_cannot_close() {
    let mut storage: MemoryStorage = MemoryStorage::new();
    storage
        .set_item(
            SESSION_KEY,
            r#"{"username":"Rajesh","role":"supervisor","isAuthenticated":false}"#,
        )
        .unwrap();
    let mut depot: Depot = Depot::init(Box::new(storage));
    assert_eq!(depot.navigate("/jobs"), GateDecision::RedirectToLogin);

    let result: Result<JobClosure, CoreError> = depot.close_job_at("JOB-003", "23:15:00");

    assert!(matches!(result, Err(CoreError::Unauthenticated { .. })));
    assert_eq!(depot.job("JOB-003").unwrap().status, JobStatus::InProgress);
    assert_eq!(depot.bay("B-02").unwrap().status, BayStatus::Occupied);
}

#[test]
fn test_admin_depot_cannot_close() {
    let mut depot: Depot = create_admin_depot();

    let result: Result<JobClosure, CoreError> = depot.close_job("JOB-002");

    assert!(matches!(result, Err(CoreError::Unauthorized { .. })));
    assert_eq!(depot.job("JOB-002").unwrap().status, JobStatus::Pending);
}

#[test]
fn test_logged_out_depot_cannot_close() {
    let mut depot: Depot = create_test_depot();

    let result: Result<JobClosure, CoreError> = depot.close_job("JOB-002");

    assert!(matches!(result, Err(CoreError::Unauthenticated { .. })));
}

#[test]
fn test_unknown_job_is_not_found() {
    let mut depot: Depot = create_supervisor_depot();

    let result: Result<JobClosure, CoreError> = depot.close_job("JOB-999");

    assert_eq!(
        result.unwrap_err(),
        CoreError::JobNotFound(String::from("JOB-999"))
    );
}

#[test]
fn test_missing_bay_does_not_roll_back_job() {
    let (mut storage, mut bays, mut jobs) = create_seeded_registries();
    let supervisor: Session = Session::new("Rajesh", Role::Supervisor).unwrap();
    let mut seeded: Vec<Job> = jobs.jobs().to_vec();
    seeded[1].location = String::from("Bay Z-99");
    seeded[4].location = String::from("Washing Line");
    crate::persist_json(&mut storage, crate::JOBS_KEY, &seeded).unwrap();
    jobs = JobRegistry::load(&mut storage);
    let bays_before: BayRegistry = bays.clone();

    let missing: JobClosure = DepotService::close_job(
        Some(&supervisor),
        &mut jobs,
        &mut bays,
        &mut storage,
        "JOB-002",
        "23:15:00",
    )
    .unwrap();
    let no_bay: JobClosure = DepotService::close_job(
        Some(&supervisor),
        &mut jobs,
        &mut bays,
        &mut storage,
        "JOB-005",
        "23:16:00",
    )
    .unwrap();

    assert_eq!(missing.bay_release, BayRelease::BayNotFound(String::from("Z-99")));
    assert_eq!(no_bay.bay_release, BayRelease::NoBayInLocation);
    assert_eq!(jobs.get("JOB-002").unwrap().status, JobStatus::Completed);
    assert_eq!(jobs.get("JOB-005").unwrap().status, JobStatus::Completed);
    assert_eq!(bays, bays_before);
}

#[test]
fn test_shift_follows_depot_local_time() {
    use crate::shift_at;
    use kmrl_ragi_domain::Shift;
    use time::macros::datetime;

    // IST is UTC+05:30.
    assert_eq!(shift_at(datetime!(2024-09-24 00:29 UTC)), Shift::Night);
    assert_eq!(shift_at(datetime!(2024-09-24 00:30 UTC)), Shift::Day);
    assert_eq!(shift_at(datetime!(2024-09-24 16:29 UTC)), Shift::Day);
    assert_eq!(shift_at(datetime!(2024-09-24 16:30 UTC)), Shift::Night);
}
