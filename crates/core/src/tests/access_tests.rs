// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{create_admin_depot, create_supervisor_depot, create_test_depot};
use crate::{AccessGate, GateDecision, Page, PageAccess, SessionPhase};
use kmrl_ragi_domain::{Role, Session};

#[test]
fn test_paths_resolve_to_pages() {
    assert_eq!(Page::from_path("/"), Page::Dashboard);
    assert_eq!(Page::from_path(""), Page::Dashboard);
    assert_eq!(Page::from_path("/jobs"), Page::Jobs);
    assert_eq!(Page::from_path("/jobs/"), Page::Jobs);
    assert_eq!(Page::from_path("/settings?tab=users"), Page::Settings);
    assert_eq!(Page::from_path("/login"), Page::Login);
    assert_eq!(Page::from_path("/nowhere"), Page::NotFound);
    assert_eq!(Page::from_path("/jobs/JOB-001"), Page::NotFound);
}

#[test]
fn test_page_access_rules() {
    assert_eq!(Page::Login.access(), PageAccess::Public);
    assert_eq!(Page::NotFound.access(), PageAccess::Public);
    assert_eq!(Page::Depot.access(), PageAccess::Authenticated);
    assert_eq!(Page::Jobs.access(), PageAccess::RequiresRole(Role::Supervisor));
    assert_eq!(Page::Settings.access(), PageAccess::RequiresRole(Role::Admin));
}

#[test]
fn test_loading_blocks_protected_pages_only() {
    assert_eq!(
        AccessGate::evaluate(SessionPhase::Loading, None, Page::Trains),
        GateDecision::Loading
    );
    assert_eq!(
        AccessGate::evaluate(SessionPhase::Loading, None, Page::Login),
        GateDecision::Granted(Page::Login)
    );
}

#[test]
fn test_no_session_redirects_to_login() {
    let depot = create_test_depot();

    assert_eq!(depot.navigate("/depot"), GateDecision::RedirectToLogin);
    assert_eq!(depot.navigate("/jobs"), GateDecision::RedirectToLogin);
    assert_eq!(depot.navigate("/login"), GateDecision::Granted(Page::Login));
}

#[test]
fn test_unauthenticated_flag_redirects_to_login() {
    let mut session: Session = Session::new("Rajesh", Role::Supervisor).unwrap();
    session.authenticated = false;

    assert_eq!(
        AccessGate::evaluate(SessionPhase::Ready, Some(&session), Page::Dashboard),
        GateDecision::RedirectToLogin
    );
}

#[test]
fn test_admin_is_denied_jobs_but_granted_settings() {
    let depot = create_admin_depot();

    assert_eq!(
        depot.navigate("/jobs"),
        GateDecision::Forbidden {
            page: Page::Jobs,
            required: Role::Supervisor,
            actual: Role::Admin,
        }
    );
    assert_eq!(
        depot.navigate("/settings"),
        GateDecision::Granted(Page::Settings)
    );
    assert_eq!(depot.navigate("/"), GateDecision::Granted(Page::Dashboard));
}

#[test]
fn test_supervisor_is_denied_settings_but_granted_jobs() {
    let depot = create_supervisor_depot();

    assert_eq!(depot.navigate("/jobs"), GateDecision::Granted(Page::Jobs));
    assert!(matches!(
        depot.navigate("/settings"),
        GateDecision::Forbidden {
            required: Role::Admin,
            ..
        }
    ));
}

#[test]
fn test_unknown_page_is_granted_as_not_found() {
    let depot = create_test_depot();

    assert_eq!(
        depot.navigate("/does-not-exist"),
        GateDecision::Granted(Page::NotFound)
    );
}
