// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{BaySection, DepotSummary, default_bay_layout};

#[test]
fn test_summary_of_default_layout() {
    let summary: DepotSummary = DepotSummary::from_bays(&default_bay_layout());

    assert_eq!(summary.total_bays, 14);
    assert_eq!(summary.available, 4);
    assert_eq!(summary.occupied, 10);
    // A-Check Service, Brake Repair, HVAC Service
    assert_eq!(summary.under_work, 3);
}

#[test]
fn test_summary_groups_sections_in_layout_order() {
    let summary: DepotSummary = DepotSummary::from_bays(&default_bay_layout());
    let sections: Vec<BaySection> = summary.sections.iter().map(|s| s.section).collect();

    assert_eq!(sections, BaySection::ALL.to_vec());
    assert_eq!(summary.sections[2].bays.len(), 2);
    assert_eq!(summary.sections[2].bays[0].id, "IBL-1");
}

#[test]
fn test_summary_of_empty_layout() {
    let summary: DepotSummary = DepotSummary::from_bays(&[]);

    assert_eq!(summary.total_bays, 0);
    assert_eq!(summary.available, 0);
    assert!(summary.sections.iter().all(|s| s.bays.is_empty()));
}
