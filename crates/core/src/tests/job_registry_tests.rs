// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::create_test_storage;
use crate::{CoreError, DurableStorage, JOBS_KEY, JobRegistry, MemoryStorage};
use kmrl_ragi_domain::{Job, JobQuery, JobStats, JobStatus, JobType, default_jobs};

fn ids(jobs: &[&Job]) -> Vec<String> {
    jobs.iter().map(|job| job.id.clone()).collect()
}

#[test]
fn test_load_seeds_five_default_jobs() {
    let mut storage: MemoryStorage = create_test_storage();

    let registry: JobRegistry = JobRegistry::load(&mut storage);

    assert_eq!(registry.jobs(), default_jobs().as_slice());
    assert!(storage.peek(JOBS_KEY).is_some());
}

#[test]
fn test_list_with_empty_query_returns_everything_in_order() {
    let mut storage: MemoryStorage = create_test_storage();
    let registry: JobRegistry = JobRegistry::load(&mut storage);

    let listed: Vec<&Job> = registry.list(&JobQuery::default());

    assert_eq!(
        ids(&listed),
        vec!["JOB-001", "JOB-002", "JOB-003", "JOB-004", "JOB-005"]
    );
}

#[test]
fn test_list_filters_by_status_and_type() {
    let mut storage: MemoryStorage = create_test_storage();
    let registry: JobRegistry = JobRegistry::load(&mut storage);
    let query: JobQuery = JobQuery {
        search: String::new(),
        status: Some(JobStatus::Pending),
        job_type: Some(JobType::Maintenance),
    };

    assert_eq!(ids(&registry.list(&query)), vec!["JOB-005"]);
}

#[test]
fn test_list_search_is_case_insensitive_over_train_and_assignee() {
    let mut storage: MemoryStorage = create_test_storage();
    let registry: JobRegistry = JobRegistry::load(&mut storage);

    let by_train: JobQuery = JobQuery {
        search: String::from("vaayu"),
        ..JobQuery::default()
    };
    let by_assignee: JobQuery = JobQuery {
        search: String::from("TEAM"),
        status: Some(JobStatus::InProgress),
        ..JobQuery::default()
    };

    assert_eq!(ids(&registry.list(&by_train)), vec!["JOB-003"]);
    assert_eq!(ids(&registry.list(&by_assignee)), vec!["JOB-001", "JOB-003"]);
}

#[test]
fn test_get_unknown_job_is_none() {
    let mut storage: MemoryStorage = create_test_storage();
    let registry: JobRegistry = JobRegistry::load(&mut storage);

    assert!(registry.get("JOB-999").is_none());
    assert_eq!(registry.get("JOB-002").unwrap().train_id, "NILA");
}

#[test]
fn test_complete_marks_job_and_persists() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut registry: JobRegistry = JobRegistry::load(&mut storage);

    let job: Job = registry
        .complete(&mut storage, "JOB-002", "Rajesh", "23:10:05")
        .unwrap()
        .clone();

    assert_eq!(job.status, JobStatus::Completed);
    assert_eq!(job.progress, 100);
    assert_eq!(job.closed_by.as_deref(), Some("Rajesh"));
    assert_eq!(job.closed_at.as_deref(), Some("23:10:05"));
    assert_eq!(JobRegistry::load(&mut storage), registry);
}

#[test]
fn test_complete_terminal_job_is_rejected_and_unchanged() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut registry: JobRegistry = JobRegistry::load(&mut storage);
    let before: JobRegistry = registry.clone();

    let result: Result<&Job, CoreError> =
        registry.complete(&mut storage, "JOB-004", "Rajesh", "23:10:05");

    assert_eq!(
        result.unwrap_err(),
        CoreError::JobAlreadyClosed {
            job_id: String::from("JOB-004"),
            status: JobStatus::Completed,
        }
    );
    assert_eq!(registry, before);
}

#[test]
fn test_complete_cancelled_job_is_rejected() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut jobs: Vec<Job> = default_jobs();
    jobs[1].status = JobStatus::Cancelled;
    storage
        .set_item(JOBS_KEY, &serde_json::to_string(&jobs).unwrap())
        .unwrap();
    let mut registry: JobRegistry = JobRegistry::load(&mut storage);

    let result: Result<&Job, CoreError> =
        registry.complete(&mut storage, "JOB-002", "Rajesh", "23:10:05");

    assert!(matches!(
        result,
        Err(CoreError::JobAlreadyClosed {
            status: JobStatus::Cancelled,
            ..
        })
    ));
}

#[test]
fn test_complete_unknown_job_is_not_found() {
    let mut storage: MemoryStorage = create_test_storage();
    let mut registry: JobRegistry = JobRegistry::load(&mut storage);

    let result: Result<&Job, CoreError> =
        registry.complete(&mut storage, "JOB-999", "Rajesh", "23:10:05");

    assert_eq!(
        result.unwrap_err(),
        CoreError::JobNotFound(String::from("JOB-999"))
    );
}

#[test]
fn test_stats_match_fixture() {
    let mut storage: MemoryStorage = create_test_storage();
    let registry: JobRegistry = JobRegistry::load(&mut storage);

    let stats: JobStats = registry.stats();

    assert_eq!(stats.total, 5);
    assert_eq!(stats.pending, 2);
    assert_eq!(stats.in_progress, 2);
    assert_eq!(stats.completed, 1);
    assert_eq!(stats.critical, 1);
}

#[test]
fn test_corrupt_jobs_fall_back_to_defaults() {
    let mut storage: MemoryStorage = create_test_storage();
    storage.set_item(JOBS_KEY, "42").unwrap();

    let registry: JobRegistry = JobRegistry::load(&mut storage);

    assert_eq!(registry.jobs().len(), 5);
}
