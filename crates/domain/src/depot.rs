// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::{Deserialize, Serialize};

use crate::bay::{Bay, BaySection};

/// The bays of one depot section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionLayout {
    pub section: BaySection,
    pub bays: Vec<Bay>,
}

/// Occupancy figures for the depot view header and map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepotSummary {
    pub total_bays: usize,
    pub available: usize,
    pub occupied: usize,
    /// Bays whose activity mentions service or repair work.
    pub under_work: usize,
    pub sections: Vec<SectionLayout>,
}

impl DepotSummary {
    /// Summarizes a bay layout, grouping bays by section in layout order.
    #[must_use]
    pub fn from_bays(bays: &[Bay]) -> Self {
        let available: usize = bays.iter().filter(|bay| bay.is_available()).count();
        let under_work: usize = bays
            .iter()
            .filter(|bay| bay.activity.contains("Service") || bay.activity.contains("Repair"))
            .count();
        let sections: Vec<SectionLayout> = BaySection::ALL
            .iter()
            .map(|section| SectionLayout {
                section: *section,
                bays: bays
                    .iter()
                    .filter(|bay| bay.section == *section)
                    .cloned()
                    .collect(),
            })
            .collect();

        Self {
            total_bays: bays.len(),
            available,
            occupied: bays.len() - available,
            under_work,
            sections,
        }
    }
}
