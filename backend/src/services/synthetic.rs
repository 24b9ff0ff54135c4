//! Synthetic average rows appended below the per-owner summary.

use crate::models::{OwnerSummary, SummaryLabel, NUMERIC_CELLS};

/// Column-wise mean of the numeric cells of `rows`, each row weighted equally.
///
/// Missing cells are skipped; a column with no values stays missing.
fn column_means<'a, I>(rows: I) -> [Option<f64>; NUMERIC_CELLS]
where
    I: IntoIterator<Item = &'a OwnerSummary>,
{
    let mut sums = [0.0f64; NUMERIC_CELLS];
    let mut counts = [0usize; NUMERIC_CELLS];
    for row in rows {
        for (i, cell) in row.numeric_cells().into_iter().enumerate() {
            if let Some(value) = cell {
                sums[i] += value;
                counts[i] += 1;
            }
        }
    }

    let mut means = [None; NUMERIC_CELLS];
    for i in 0..NUMERIC_CELLS {
        if counts[i] > 0 {
            means[i] = Some(sums[i] / counts[i] as f64);
        }
    }
    means
}

/// "Avg for the Company": unweighted mean over every row in `summary`.
pub fn company_average(summary: &[OwnerSummary]) -> OwnerSummary {
    OwnerSummary::from_numeric_cells(SummaryLabel::CompanyAverage, column_means(summary))
}

/// "Avg for Contact Owners": the same mean over rows not labelled as the
/// company average.
pub fn owners_average(summary: &[OwnerSummary]) -> OwnerSummary {
    let rows = summary
        .iter()
        .filter(|row| row.label != SummaryLabel::CompanyAverage);
    OwnerSummary::from_numeric_cells(SummaryLabel::OwnersAverage, column_means(rows))
}

/// Append the company and owners average rows after the per-owner rows.
///
/// Both averages are taken over the per-owner rows before anything is
/// appended, so the two synthetic rows carry identical values.
pub fn append_synthetic_rows(mut summary: Vec<OwnerSummary>) -> Vec<OwnerSummary> {
    let company = company_average(&summary);
    let owners = owners_average(&summary);
    summary.push(company);
    summary.push(owners);
    summary
}
