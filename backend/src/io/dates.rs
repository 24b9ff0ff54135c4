use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::loader::{SourceRow, SourceTable};
use crate::models::{DateField, OpportunityRecord, PipelineDataset, PipelineDates};

/// Cell contents that mean "no value" in spreadsheet exports.
const MISSING_MARKERS: [&str; 5] = ["nat", "nan", "null", "none", "n/a"];

const DATETIME_FORMATS: [&str; 8] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%Y %H:%M",
    "%m/%d/%Y %I:%M %p",
];

const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Parse a date cell, returning `None` for anything that is not a recognisable date.
///
/// Offsets are normalised to UTC and dropped. Dates without a time of day
/// become midnight.
pub fn parse_date(raw: &str) -> Option<NaiveDateTime> {
    let value = raw.trim();
    if value.is_empty() || MISSING_MARKERS.iter().any(|m| value.eq_ignore_ascii_case(m)) {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }
    None
}

/// Turn allow-listed source rows into records with parsed dates.
///
/// Derived fields are left empty for [`crate::services::metrics::derive_metrics`].
pub fn normalize(table: &SourceTable, rows: &[&SourceRow]) -> PipelineDataset {
    let extra_indices = table.extra_column_indices();
    let extra_columns = extra_indices
        .iter()
        .map(|&i| table.columns()[i].clone())
        .collect();

    let mut unparsed = 0usize;
    let records = rows
        .iter()
        .map(|row| {
            let mut dates = PipelineDates::default();
            for field in DateField::ALL {
                let cell = table.date_cell(row, field);
                let parsed = cell.and_then(parse_date);
                if parsed.is_none() && cell.map(|c| !c.trim().is_empty()).unwrap_or(false) {
                    unparsed += 1;
                }
                dates.set(field, parsed);
            }

            let mut record = OpportunityRecord::new(table.owner(row).unwrap_or_default(), dates);
            record.extra = extra_indices
                .iter()
                .map(|&i| row.get(i).cloned().flatten())
                .collect();
            record
        })
        .collect();

    if unparsed > 0 {
        log::debug!("{} date cells could not be parsed and were treated as missing", unparsed);
    }

    PipelineDataset {
        columns: table.columns().to_vec(),
        extra_columns,
        records,
    }
}
