//! Water-quality thresholds used to classify alerted wells.

use crate::models::{Well, WellIssue};
use serde::{Deserialize, Serialize};

/// Configuration for water-quality rules.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WaterQualityRules {
    /// Lowest acceptable pH
    pub ph_min: f64,
    /// Highest acceptable pH
    pub ph_max: f64,
    /// Lead above this (ppb) is flagged
    pub lead_max: f64,
    /// Coliform above this (CFU/100ml) is flagged
    pub coliform_max: u32,
    /// Temperature above this (C) is flagged
    pub temperature_max: f64,
    /// TDS above this (ppm) is flagged
    pub tds_max: f64,
}

impl Default for WaterQualityRules {
    fn default() -> Self {
        Self {
            ph_min: 6.5,
            ph_max: 8.5,
            lead_max: 0.05,
            coliform_max: 50,
            temperature_max: 40.0,
            tds_max: 500.0,
        }
    }
}

/// Pick the issue for a flagged well, checking readings in fixed priority order.
///
/// Falls through to [`WellIssue::Unknown`] when no reading breaches its
/// threshold, which is common since the flagged wells are chosen at random.
pub fn classify_issue(well: &Well, rules: &WaterQualityRules) -> WellIssue {
    if well.ph < rules.ph_min || well.ph > rules.ph_max {
        WellIssue::PhOutOfRange
    } else if well.lead > rules.lead_max {
        WellIssue::LeadTooHigh
    } else if well.coliform > rules.coliform_max {
        WellIssue::HighColiform
    } else if well.temperature > rules.temperature_max {
        WellIssue::HighTemperature
    } else if well.tds > rules.tds_max {
        WellIssue::HighTds
    } else {
        WellIssue::Unknown
    }
}
