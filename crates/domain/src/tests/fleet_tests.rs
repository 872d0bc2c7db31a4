// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{CleaningStatus, FleetSnapshot, FleetStats, TrainSnapshot, TrainStatus};

fn train(id: &str, status: TrainStatus, location: &str, health: u32, issues: u32) -> TrainSnapshot {
    TrainSnapshot {
        id: id.to_string(),
        model: String::from("Alstom Metropolis"),
        status,
        location: location.to_string(),
        health_score: health,
        total_mileage: 300_000,
        last_maintenance: String::from("2024-09-10"),
        next_maintenance: String::from("2024-10-10"),
        maintenance_due: 12,
        fitness_valid: true,
        fitness_expiry: String::from("2024-12-01"),
        cleaning_status: CleaningStatus::Clean,
        critical_issues: issues,
        battery_level: 80,
        current_speed: 0,
        passenger_load: 0,
        avg_daily_mileage: 250,
        manufacture_year: 2019,
        assigned_crew: String::from("Team A"),
        bay: String::from("A-01"),
    }
}

fn sample_fleet() -> FleetSnapshot {
    FleetSnapshot::new(vec![
        train("KMRL-01", TrainStatus::Active, "Aluva-Petta Route", 90, 0),
        train("KMRL-02", TrainStatus::Maintenance, "Depot A-Bay 1", 65, 2),
        train("KMRL-03", TrainStatus::Inactive, "Kaloor-Town Hall", 70, 1),
        train("KMRL-04", TrainStatus::Active, "MG Road-Maharaja's", 76, 0),
    ])
}

#[test]
fn test_fleet_stats() {
    assert_eq!(
        sample_fleet().stats(),
        FleetStats {
            total: 4,
            active: 2,
            maintenance: 1,
            critical: 2,
            // (90 + 65 + 70 + 76) / 4 = 75.25
            avg_health: 75,
        }
    );
}

#[test]
fn test_fleet_stats_rounds_half_up() {
    let fleet: FleetSnapshot = FleetSnapshot::new(vec![
        train("KMRL-01", TrainStatus::Active, "x", 80, 0),
        train("KMRL-02", TrainStatus::Active, "x", 81, 0),
    ]);
    assert_eq!(fleet.stats().avg_health, 81);
}

#[test]
fn test_empty_fleet_stats() {
    assert_eq!(FleetSnapshot::default().stats(), FleetStats::default());
}

#[test]
fn test_search_by_id_or_location() {
    let fleet: FleetSnapshot = sample_fleet();

    let by_id: Vec<&str> = fleet.search("kmrl-03").iter().map(|t| t.id.as_str()).collect();
    assert_eq!(by_id, vec!["KMRL-03"]);

    let by_location: Vec<&str> = fleet.search("depot").iter().map(|t| t.id.as_str()).collect();
    assert_eq!(by_location, vec!["KMRL-02"]);

    assert_eq!(fleet.search("").len(), 4);
}

#[test]
fn test_find_train() {
    let fleet: FleetSnapshot = sample_fleet();

    assert_eq!(fleet.find("KMRL-04").map(|t| t.health_score), Some(76));
    assert!(fleet.find("KMRL-99").is_none());
}
