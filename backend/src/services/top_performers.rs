use crate::models::{OwnerSummary, Stage};

/// Owners with the largest mean days-to-final, at most `n` of them.
///
/// Synthetic rows and owners without a final-date mean are never selected.
/// Ties keep summary order.
pub fn top_performers(summary: &[OwnerSummary], n: usize) -> Vec<String> {
    let mut candidates: Vec<(&str, f64)> = summary
        .iter()
        .filter_map(|row| Some((row.label.owner()?, row.mean(Stage::Final)?)))
        .collect();

    // sort_by is stable, so equal means stay in summary order
    candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

    candidates
        .into_iter()
        .take(n)
        .map(|(owner, _)| owner.to_string())
        .collect()
}
