use std::collections::BTreeMap;

use crate::models::{MetricStats, OpportunityRecord, OwnerSummary, Stage, SummaryLabel};

/// Compute mean, median, min and max of `values`.
///
/// An empty slice yields [`MetricStats::EMPTY`]; a group with no observations
/// for a stage has no statistics rather than zeroes.
pub fn compute_stats(values: &[f64]) -> MetricStats {
    if values.is_empty() {
        return MetricStats::EMPTY;
    }

    let count = values.len();
    let mean = values.iter().sum::<f64>() / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let median = if count % 2 == 0 {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    } else {
        sorted[count / 2]
    };

    MetricStats {
        mean: Some(mean),
        median: Some(median),
        min: sorted.first().copied(),
        max: sorted.last().copied(),
    }
}

/// One summary row per owner present in `records`, ordered by owner.
///
/// Missing metric values are skipped. `total_opportunities` counts records
/// with a creation date.
pub fn aggregate_by_owner(records: &[OpportunityRecord]) -> Vec<OwnerSummary> {
    let mut groups: BTreeMap<&str, Vec<&OpportunityRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.owner.as_str()).or_default().push(record);
    }

    groups
        .into_iter()
        .map(|(owner, group)| {
            let mut stats = [MetricStats::EMPTY; 5];
            for stage in Stage::ALL {
                let values: Vec<f64> = group
                    .iter()
                    .filter_map(|r| r.days.get(stage))
                    .map(|d| d as f64)
                    .collect();
                stats[stage.index()] = compute_stats(&values);
            }

            let total = group.iter().filter(|r| r.dates.created.is_some()).count();

            OwnerSummary {
                label: SummaryLabel::Owner(owner.to_string()),
                stats,
                total_opportunities: Some(total as f64),
            }
        })
        .collect()
}
