use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Header of the owner identity column in the pipeline export.
pub const OWNER_COLUMN: &str = "Contact Owner";

/// Header of the derived final outcome date in the detail table.
pub const FINAL_DATE_COLUMN: &str = "Final Date";

/// The seven date columns read from the export.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateField {
    Created,
    Discovery,
    Demo,
    Proposal,
    TechnicalValidation,
    ClosedWon,
    ClosedLost,
}

impl DateField {
    pub const ALL: [DateField; 7] = [
        DateField::Created,
        DateField::Discovery,
        DateField::Demo,
        DateField::Proposal,
        DateField::TechnicalValidation,
        DateField::ClosedWon,
        DateField::ClosedLost,
    ];

    /// Column header as it appears in the export.
    pub fn column(self) -> &'static str {
        match self {
            DateField::Created => "Opp Created Date",
            DateField::Discovery => "Discovery Date",
            DateField::Demo => "Demo Date",
            DateField::Proposal => "Proposal date",
            DateField::TechnicalValidation => "Technical Validation Date",
            DateField::ClosedWon => "Closed Won",
            DateField::ClosedLost => "Closed Lost Date",
        }
    }

    /// Position in [`DateField::ALL`].
    pub fn index(self) -> usize {
        match self {
            DateField::Created => 0,
            DateField::Discovery => 1,
            DateField::Demo => 2,
            DateField::Proposal => 3,
            DateField::TechnicalValidation => 4,
            DateField::ClosedWon => 5,
            DateField::ClosedLost => 6,
        }
    }

    /// The date field whose header is `name`, if any.
    pub fn from_column(name: &str) -> Option<DateField> {
        Self::ALL.into_iter().find(|f| f.column() == name)
    }
}

/// Pipeline stages measured from the creation date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Discovery,
    Demo,
    Proposal,
    Validation,
    Final,
}

impl Stage {
    /// Stages in chart lane order, top to bottom.
    pub const ALL: [Stage; 5] = [
        Stage::Discovery,
        Stage::Demo,
        Stage::Proposal,
        Stage::Validation,
        Stage::Final,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Stage::Discovery => "Days to Discovery",
            Stage::Demo => "Days to Demo",
            Stage::Proposal => "Days to Proposal",
            Stage::Validation => "Days to Validation",
            Stage::Final => "Days to Final",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Stage::Discovery => 0,
            Stage::Demo => 1,
            Stage::Proposal => 2,
            Stage::Validation => 3,
            Stage::Final => 4,
        }
    }
}

/// Parsed pipeline dates of one opportunity. `None` means missing or unparsable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineDates {
    pub created: Option<NaiveDateTime>,
    pub discovery: Option<NaiveDateTime>,
    pub demo: Option<NaiveDateTime>,
    pub proposal: Option<NaiveDateTime>,
    pub technical_validation: Option<NaiveDateTime>,
    pub closed_won: Option<NaiveDateTime>,
    pub closed_lost: Option<NaiveDateTime>,
}

impl PipelineDates {
    pub fn get(&self, field: DateField) -> Option<NaiveDateTime> {
        match field {
            DateField::Created => self.created,
            DateField::Discovery => self.discovery,
            DateField::Demo => self.demo,
            DateField::Proposal => self.proposal,
            DateField::TechnicalValidation => self.technical_validation,
            DateField::ClosedWon => self.closed_won,
            DateField::ClosedLost => self.closed_lost,
        }
    }

    pub fn set(&mut self, field: DateField, value: Option<NaiveDateTime>) {
        let slot = match field {
            DateField::Created => &mut self.created,
            DateField::Discovery => &mut self.discovery,
            DateField::Demo => &mut self.demo,
            DateField::Proposal => &mut self.proposal,
            DateField::TechnicalValidation => &mut self.technical_validation,
            DateField::ClosedWon => &mut self.closed_won,
            DateField::ClosedLost => &mut self.closed_lost,
        };
        *slot = value;
    }
}

/// Whole days from creation to each stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageDays {
    pub discovery: Option<i64>,
    pub demo: Option<i64>,
    pub proposal: Option<i64>,
    pub validation: Option<i64>,
    pub final_outcome: Option<i64>,
}

impl StageDays {
    pub fn get(&self, stage: Stage) -> Option<i64> {
        match stage {
            Stage::Discovery => self.discovery,
            Stage::Demo => self.demo,
            Stage::Proposal => self.proposal,
            Stage::Validation => self.validation,
            Stage::Final => self.final_outcome,
        }
    }

    pub fn set(&mut self, stage: Stage, value: Option<i64>) {
        let slot = match stage {
            Stage::Discovery => &mut self.discovery,
            Stage::Demo => &mut self.demo,
            Stage::Proposal => &mut self.proposal,
            Stage::Validation => &mut self.validation,
            Stage::Final => &mut self.final_outcome,
        };
        *slot = value;
    }
}

/// One opportunity from the pipeline export.
///
/// Built by the date normalizer, then completed in place by
/// [`crate::services::metrics::derive_metrics`], which fills `final_date`
/// and `days`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OpportunityRecord {
    pub owner: String,
    pub dates: PipelineDates,
    pub final_date: Option<NaiveDateTime>,
    pub days: StageDays,
    /// Cells of the non-pipeline columns, aligned with
    /// [`PipelineDataset::extra_columns`].
    #[serde(default)]
    pub extra: Vec<Option<String>>,
}

impl OpportunityRecord {
    pub fn new(owner: impl Into<String>, dates: PipelineDates) -> Self {
        Self {
            owner: owner.into(),
            dates,
            final_date: None,
            days: StageDays::default(),
            extra: Vec::new(),
        }
    }
}

/// Allow-listed records plus the header layout of the export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineDataset {
    /// Every source column, in export order.
    pub columns: Vec<String>,
    /// Source columns other than the owner and the date columns.
    pub extra_columns: Vec<String>,
    pub records: Vec<OpportunityRecord>,
}
