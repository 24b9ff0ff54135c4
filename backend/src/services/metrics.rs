//! Derived per-record metrics: final outcome date and elapsed days per stage.

use chrono::NaiveDateTime;

use crate::models::{OpportunityRecord, PipelineDates, Stage};

const SECONDS_PER_DAY: i64 = 86_400;

/// Earlier of the two terminal outcome dates; a missing side is ignored.
pub fn final_outcome_date(
    closed_won: Option<NaiveDateTime>,
    closed_lost: Option<NaiveDateTime>,
) -> Option<NaiveDateTime> {
    match (closed_won, closed_lost) {
        (Some(won), Some(lost)) => Some(won.min(lost)),
        (won, lost) => won.or(lost),
    }
}

/// Whole days from `start` to `end`, rounded toward negative infinity.
///
/// `None` when either side is missing. Negative spans are returned as-is.
pub fn elapsed_days(start: Option<NaiveDateTime>, end: Option<NaiveDateTime>) -> Option<i64> {
    let (start, end) = (start?, end?);
    Some((end - start).num_seconds().div_euclid(SECONDS_PER_DAY))
}

/// Target date of `stage` for a record whose final date is already known.
fn stage_target(
    dates: &PipelineDates,
    final_date: Option<NaiveDateTime>,
    stage: Stage,
) -> Option<NaiveDateTime> {
    match stage {
        Stage::Discovery => dates.discovery,
        Stage::Demo => dates.demo,
        Stage::Proposal => dates.proposal,
        Stage::Validation => dates.technical_validation,
        Stage::Final => final_date,
    }
}

/// Fill `final_date` and the five elapsed-days metrics of every record in place.
pub fn derive_metrics(records: &mut [OpportunityRecord]) {
    for record in records.iter_mut() {
        record.final_date = final_outcome_date(record.dates.closed_won, record.dates.closed_lost);
        for stage in Stage::ALL {
            let target = stage_target(&record.dates, record.final_date, stage);
            record
                .days
                .set(stage, elapsed_days(record.dates.created, target));
        }
    }
}
