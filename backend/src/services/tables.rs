//! Text tables for the summary and detail views.

use chrono::{NaiveDateTime, Timelike};
use serde::Serialize;

use crate::models::{
    summary_columns, DateField, OpportunityRecord, OwnerSummary, PipelineDataset, Stage,
    FINAL_DATE_COLUMN, OWNER_COLUMN,
};

/// A rendered table: headers plus one text cell per column, `None` for missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataTable {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

pub fn format_date(value: NaiveDateTime) -> String {
    if value.num_seconds_from_midnight() == 0 && value.nanosecond() == 0 {
        value.format("%Y-%m-%d").to_string()
    } else {
        value.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

pub fn format_number(value: f64) -> String {
    format!("{:.2}", value)
}

/// Summary table: owner label, the 20 stat columns, then the opportunity count.
pub fn summary_table(summary: &[OwnerSummary]) -> DataTable {
    let mut columns = vec![OWNER_COLUMN.to_string()];
    columns.extend(summary_columns());

    let rows = summary
        .iter()
        .map(|row| {
            let mut cells = vec![Some(row.label.to_string())];
            cells.extend(row.numeric_cells().iter().map(|c| c.map(format_number)));
            cells
        })
        .collect();

    DataTable { columns, rows }
}

fn source_cell(dataset: &PipelineDataset, record: &OpportunityRecord, column: &str) -> Option<String> {
    if column == OWNER_COLUMN {
        return Some(record.owner.clone());
    }
    if let Some(field) = DateField::from_column(column) {
        return record.dates.get(field).map(format_date);
    }
    dataset
        .extra_columns
        .iter()
        .position(|c| c == column)
        .and_then(|i| record.extra.get(i).cloned().flatten())
}

/// Detail table: every source column in export order, then `Final Date` and
/// the five elapsed-days columns.
pub fn detail_table(dataset: &PipelineDataset) -> DataTable {
    let mut columns = dataset.columns.clone();
    columns.push(FINAL_DATE_COLUMN.to_string());
    columns.extend(Stage::ALL.iter().map(|s| s.label().to_string()));

    let rows = dataset
        .records
        .iter()
        .map(|record| {
            let mut cells: Vec<Option<String>> = dataset
                .columns
                .iter()
                .map(|column| source_cell(dataset, record, column))
                .collect();
            cells.push(record.final_date.map(format_date));
            cells.extend(
                Stage::ALL
                    .iter()
                    .map(|s| record.days.get(*s).map(|d| d.to_string())),
            );
            cells
        })
        .collect();

    DataTable { columns, rows }
}
