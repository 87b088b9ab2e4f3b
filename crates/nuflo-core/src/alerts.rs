//! Random alert assignment over generated wells.

use crate::error::AlertError;
use crate::models::Well;
use crate::rules::{classify_issue, WaterQualityRules};
use rand::Rng;
use std::collections::BTreeSet;

/// Flag `alert_count` distinct wells with the default rules.
///
/// Returns the flagged indices in ascending order.
pub fn assign_alerts<R: Rng + ?Sized>(
    rng: &mut R,
    wells: &mut [Well],
    alert_count: usize,
) -> Result<Vec<usize>, AlertError> {
    assign_alerts_with(rng, wells, alert_count, &WaterQualityRules::default())
}

/// Flag `alert_count` distinct wells, classifying each with `rules`.
pub fn assign_alerts_with<R: Rng + ?Sized>(
    rng: &mut R,
    wells: &mut [Well],
    alert_count: usize,
    rules: &WaterQualityRules,
) -> Result<Vec<usize>, AlertError> {
    if alert_count > wells.len() {
        return Err(AlertError::TooManyAlerts {
            requested: alert_count,
            available: wells.len(),
        });
    }

    // Draw with replacement and drop duplicates until enough are distinct
    let mut selected = BTreeSet::new();
    while selected.len() < alert_count {
        selected.insert(rng.random_range(0..wells.len()));
    }

    for &index in &selected {
        let well = &mut wells[index];
        well.alert = true;
        well.issue = Some(classify_issue(well, rules));
        tracing::debug!(index, issue = %well.issue_label(), "well flagged");
    }

    Ok(selected.into_iter().collect())
}
