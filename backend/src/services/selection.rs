use crate::models::{OwnerSelection, OwnerSummary};

/// Summary rows to display for `selection`: the selected owners plus both
/// synthetic rows, in summary order.
pub fn filter_summary(summary: &[OwnerSummary], selection: &OwnerSelection) -> Vec<OwnerSummary> {
    summary
        .iter()
        .filter(|row| match row.label.owner() {
            Some(owner) => selection.contains(owner),
            None => true,
        })
        .cloned()
        .collect()
}
