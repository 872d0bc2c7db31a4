// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{AccountStatus, IntegrationHealth, static_system_settings};

#[test]
fn test_degraded_integrations() {
    let settings = static_system_settings();
    let degraded: Vec<(&str, IntegrationHealth)> = settings
        .degraded_integrations()
        .into_iter()
        .map(|integration| (integration.name.as_str(), integration.health))
        .collect();

    assert_eq!(
        degraded,
        vec![
            ("IoT Sensors", IntegrationHealth::Warning),
            ("Employee Portal", IntegrationHealth::Error),
        ]
    );
}

#[test]
fn test_one_inactive_account() {
    let settings = static_system_settings();
    let inactive: Vec<&str> = settings
        .users
        .iter()
        .filter(|user| user.status == AccountStatus::Inactive)
        .map(|user| user.name.as_str())
        .collect();

    assert_eq!(settings.users.len(), 5);
    assert_eq!(inactive, vec!["Priya Menon"]);
}

#[test]
fn test_disabled_alert_rules() {
    let settings = static_system_settings();
    let disabled: Vec<&str> = settings
        .alerts
        .iter()
        .filter(|alert| !alert.enabled)
        .map(|alert| alert.alert_type.as_str())
        .collect();

    assert_eq!(disabled, vec!["Low Confidence Prediction"]);
}

#[test]
fn test_settings_wire_names() {
    let value = serde_json::to_value(static_system_settings()).unwrap();

    assert_eq!(value["system"]["confidenceThreshold"], 85);
    assert_eq!(value["system"]["autoApproval"], false);
    assert_eq!(value["users"][3]["lastLogin"], "2024-09-22 16:20");
    assert_eq!(value["integrations"][4]["status"], "disconnected");
    assert_eq!(value["alerts"][0]["type"], "Critical System Failure");
    assert_eq!(value["model"]["dataPoints"], 156_789);
}
