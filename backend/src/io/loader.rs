use polars::prelude::*;
use serde::Serialize;
use std::fs;
use std::path::Path;

use super::checksum::calculate_checksum;
use crate::error::{ReportError, ReportResult};
use crate::models::{DateField, OWNER_COLUMN};

/// One row of the export: a cell per column, `None` where the CSV had no value.
pub type SourceRow = Vec<Option<String>>;

/// The raw export, every cell kept as text.
///
/// Built once at startup and shared read-only; each dashboard run starts from
/// this table.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceTable {
    columns: Vec<String>,
    rows: Vec<SourceRow>,
    owner_index: usize,
    date_indices: [usize; 7],
    checksum: String,
}

/// Size and fingerprint of a loaded export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceInfo {
    pub row_count: usize,
    pub column_count: usize,
    pub checksum: String,
}

impl SourceTable {
    /// Build a table from in-memory rows, checksumming the cell contents.
    pub fn from_rows(columns: Vec<String>, rows: Vec<SourceRow>) -> ReportResult<Self> {
        let mut canonical = columns.join("\u{1f}");
        for row in &rows {
            canonical.push('\u{1e}');
            let cells: Vec<&str> = row.iter().map(|c| c.as_deref().unwrap_or("")).collect();
            canonical.push_str(&cells.join("\u{1f}"));
        }
        let checksum = calculate_checksum(canonical.as_bytes());
        Self::with_checksum(columns, rows, checksum)
    }

    fn with_checksum(columns: Vec<String>, rows: Vec<SourceRow>, checksum: String) -> ReportResult<Self> {
        let find = |name: &str| {
            columns
                .iter()
                .position(|c| c == name)
                .ok_or_else(|| ReportError::MissingColumn(name.to_string()))
        };

        let owner_index = find(OWNER_COLUMN)?;
        let mut date_indices = [0usize; 7];
        for field in DateField::ALL {
            date_indices[field.index()] = find(field.column())?;
        }

        Ok(Self {
            columns,
            rows,
            owner_index,
            date_indices,
            checksum,
        })
    }

    /// Convert a polars frame into a text table.
    pub fn from_dataframe(df: &DataFrame, checksum: String) -> ReportResult<Self> {
        let columns: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        let mut rows: Vec<SourceRow> = vec![Vec::with_capacity(columns.len()); df.height()];
        for name in &columns {
            let column = df.column(name)?.cast(&DataType::String)?;
            let values = column.str()?;
            for (row, value) in rows.iter_mut().zip(values.into_iter()) {
                row.push(value.map(|s| s.to_string()));
            }
        }

        Self::with_checksum(columns, rows, checksum)
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[SourceRow] {
        &self.rows
    }

    pub fn info(&self) -> SourceInfo {
        SourceInfo {
            row_count: self.rows.len(),
            column_count: self.columns.len(),
            checksum: self.checksum.clone(),
        }
    }

    /// Owner cell of `row`.
    pub fn owner<'a>(&self, row: &'a [Option<String>]) -> Option<&'a str> {
        row.get(self.owner_index).and_then(|c| c.as_deref())
    }

    /// Raw text of a date cell of `row`.
    pub fn date_cell<'a>(&self, row: &'a [Option<String>], field: DateField) -> Option<&'a str> {
        let index = self.date_indices[field.index()];
        row.get(index).and_then(|c| c.as_deref())
    }

    /// Positions of the columns that are neither the owner nor a date column.
    pub fn extra_column_indices(&self) -> Vec<usize> {
        (0..self.columns.len())
            .filter(|i| *i != self.owner_index && !self.date_indices.contains(i))
            .collect()
    }
}

/// Read the pipeline export at `path`.
///
/// Every column is read as text; dates are parsed later by the normalizer so
/// that unparsable values can degrade to missing instead of failing the load.
pub fn load_source(path: &Path) -> ReportResult<SourceTable> {
    let bytes = fs::read(path).map_err(|e| ReportError::io(path.display().to_string(), e))?;
    let checksum = calculate_checksum(&bytes);

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))?
        .finish()?;

    let table = SourceTable::from_dataframe(&df, checksum)?;
    log::info!(
        "Loaded {} rows ({} columns) from {}",
        table.rows().len(),
        table.columns().len(),
        path.display()
    );
    Ok(table)
}

/// Keep the rows whose owner is on the allow-list, in input order.
pub fn restrict_to_owners<'a>(table: &'a SourceTable, owners: &[String]) -> Vec<&'a SourceRow> {
    let kept: Vec<&SourceRow> = table
        .rows()
        .iter()
        .filter(|row| {
            table
                .owner(row)
                .map(|owner| owners.iter().any(|o| o == owner))
                .unwrap_or(false)
        })
        .collect();
    log::debug!(
        "Owner allow-list kept {} of {} rows",
        kept.len(),
        table.rows().len()
    );
    kept
}
