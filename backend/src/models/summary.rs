use std::fmt;

use serde::{Serialize, Serializer};

use super::record::Stage;

/// Label of the company-wide synthetic row.
pub const COMPANY_AVERAGE_LABEL: &str = "Avg for the Company";

/// Label of the owners-average synthetic row.
pub const OWNERS_AVERAGE_LABEL: &str = "Avg for Contact Owners";

/// Identity of a summary row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SummaryLabel {
    Owner(String),
    CompanyAverage,
    OwnersAverage,
}

impl SummaryLabel {
    pub fn as_str(&self) -> &str {
        match self {
            SummaryLabel::Owner(owner) => owner,
            SummaryLabel::CompanyAverage => COMPANY_AVERAGE_LABEL,
            SummaryLabel::OwnersAverage => OWNERS_AVERAGE_LABEL,
        }
    }

    pub fn is_synthetic(&self) -> bool {
        !matches!(self, SummaryLabel::Owner(_))
    }

    pub fn owner(&self) -> Option<&str> {
        match self {
            SummaryLabel::Owner(owner) => Some(owner),
            _ => None,
        }
    }
}

impl fmt::Display for SummaryLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for SummaryLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Mean, median, min and max of one elapsed-days metric.
///
/// Every field is `None` when the group had no non-missing values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct MetricStats {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl MetricStats {
    pub const EMPTY: MetricStats = MetricStats {
        mean: None,
        median: None,
        min: None,
        max: None,
    };

    pub fn cells(&self) -> [Option<f64>; 4] {
        [self.mean, self.median, self.min, self.max]
    }

    pub fn from_cells(cells: [Option<f64>; 4]) -> Self {
        let [mean, median, min, max] = cells;
        Self {
            mean,
            median,
            min,
            max,
        }
    }
}

/// Statistic suffixes, in the same order as [`MetricStats::cells`].
pub const STAT_NAMES: [&str; 4] = ["mean", "median", "min", "max"];

/// Header of the opportunity count column.
pub const TOTAL_OPPORTUNITIES_COLUMN: &str = "Total Opportunities";

/// One row of the summary table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OwnerSummary {
    pub label: SummaryLabel,
    /// Indexed by [`Stage::index`].
    pub stats: [MetricStats; 5],
    /// Record count for owner rows; averaged count for synthetic rows,
    /// missing when there was nothing to average.
    pub total_opportunities: Option<f64>,
}

/// Number of numeric cells in a summary row: four stats per stage plus the count.
pub const NUMERIC_CELLS: usize = 4 * 5 + 1;

impl OwnerSummary {
    pub fn stat(&self, stage: Stage) -> &MetricStats {
        &self.stats[stage.index()]
    }

    pub fn mean(&self, stage: Stage) -> Option<f64> {
        self.stat(stage).mean
    }

    /// Flattened numeric cells in column order: stages × stats, then the count.
    pub fn numeric_cells(&self) -> [Option<f64>; NUMERIC_CELLS] {
        let mut cells = [None; NUMERIC_CELLS];
        for stage in Stage::ALL {
            let offset = stage.index() * 4;
            cells[offset..offset + 4].copy_from_slice(&self.stat(stage).cells());
        }
        cells[NUMERIC_CELLS - 1] = self.total_opportunities;
        cells
    }

    /// Rebuild a row from [`OwnerSummary::numeric_cells`] output.
    pub fn from_numeric_cells(label: SummaryLabel, cells: [Option<f64>; NUMERIC_CELLS]) -> Self {
        let mut stats = [MetricStats::EMPTY; 5];
        for stage in Stage::ALL {
            let offset = stage.index() * 4;
            stats[stage.index()] = MetricStats::from_cells([
                cells[offset],
                cells[offset + 1],
                cells[offset + 2],
                cells[offset + 3],
            ]);
        }
        Self {
            label,
            stats,
            total_opportunities: cells[NUMERIC_CELLS - 1],
        }
    }
}

/// Column headers of the summary table, matching [`OwnerSummary::numeric_cells`].
pub fn summary_columns() -> Vec<String> {
    let mut columns = Vec::with_capacity(NUMERIC_CELLS);
    for stage in Stage::ALL {
        for stat in STAT_NAMES {
            columns.push(format!("{}_{}", stage.label(), stat));
        }
    }
    columns.push(TOTAL_OPPORTUNITIES_COLUMN.to_string());
    columns
}
