use crate::config::DashboardConfig;
use crate::io::{SourceRow, SourceTable};
use crate::models::{DateField, OwnerSelection, Stage, SummaryLabel, OWNER_COLUMN};
use crate::services::{build_dashboard, build_summary, prepare_records};

/// Columns: owner, the seven dates in `DateField::ALL` order, then "Deal Name".
fn table(rows: &[(&str, [&str; 7])]) -> SourceTable {
    let mut columns = vec![OWNER_COLUMN.to_string()];
    columns.extend(DateField::ALL.iter().map(|f| f.column().to_string()));
    columns.push("Deal Name".to_string());

    let rows: Vec<SourceRow> = rows
        .iter()
        .enumerate()
        .map(|(i, (owner, dates))| {
            let mut row = vec![Some(owner.to_string())];
            row.extend(
                dates
                    .iter()
                    .map(|d| if d.is_empty() { None } else { Some(d.to_string()) }),
            );
            row.push(Some(format!("deal-{}", i)));
            row
        })
        .collect();

    SourceTable::from_rows(columns, rows).unwrap()
}

fn config(owners: &[&str]) -> DashboardConfig {
    let mut config = DashboardConfig::default();
    config.source.owners = owners.iter().map(|s| s.to_string()).collect();
    config
}

/// Dates for a record created 2024-01-01 that closed `final_days` later.
fn outcome_row(final_days: u32) -> [&'static str; 7] {
    match final_days {
        10 => ["2024-01-01", "", "", "", "", "2024-01-11", ""],
        20 => ["2024-01-01", "", "", "", "", "", "2024-01-21"],
        // won on day 30, lost on day 45: the earlier outcome counts
        30 => ["2024-01-01", "", "", "", "", "2024-01-31", "2024-02-15"],
        40 => ["2024-01-01", "", "", "", "", "2024-02-10", ""],
        _ => ["2024-01-01", "", "", "", "", "", ""],
    }
}

#[test]
fn test_discovery_only_record() {
    let source = table(&[(
        "a@x",
        ["2024-01-01", "2024-01-11", "", "", "", "", ""],
    )]);
    let records = prepare_records(&source, &["a@x".to_string()]);

    let record = &records.records[0];
    assert_eq!(record.days.discovery, Some(10));
    for stage in [Stage::Demo, Stage::Proposal, Stage::Validation, Stage::Final] {
        assert_eq!(record.days.get(stage), None);
    }
    assert_eq!(record.final_date, None);
}

#[test]
fn test_disallowed_owner_never_appears() {
    let source = table(&[
        ("a@x", outcome_row(10)),
        ("b@x", outcome_row(20)),
        ("c@x", outcome_row(40)),
    ]);
    let cfg = config(&["a@x", "b@x"]);
    let view = build_dashboard(&source, &cfg, &OwnerSelection::all(&cfg.source.owners));

    assert!(view.records.records.iter().all(|r| r.owner != "c@x"));
    assert!(view.summary.iter().all(|r| r.label.as_str() != "c@x"));
    assert!(view.displayed_summary.iter().all(|r| r.label.as_str() != "c@x"));
    assert!(!view.top_performers.contains(&"c@x".to_string()));
    for trace in &view.chart.data {
        assert!(!trace.y.contains(&"c@x".to_string()));
        assert!(!trace.name.contains("c@x"));
    }
}

#[test]
fn test_owner_without_records_is_absent() {
    let source = table(&[("a@x", outcome_row(10))]);
    let cfg = config(&["a@x", "b@x"]);
    let summary = build_summary(&prepare_records(&source, &cfg.source.owners));

    let owners: Vec<&str> = summary.iter().filter_map(|r| r.label.owner()).collect();
    assert_eq!(owners, vec!["a@x"]);
    assert_eq!(summary.len(), 3);
}

#[test]
fn test_summary_counts_and_company_average() {
    let source = table(&[
        ("a@x", outcome_row(10)),
        ("a@x", outcome_row(20)),
        ("a@x", outcome_row(30)),
        ("b@x", outcome_row(40)),
        ("b@x", ["", "", "", "", "", "", ""]),
    ]);
    let cfg = config(&["a@x", "b@x"]);
    let summary = build_summary(&prepare_records(&source, &cfg.source.owners));

    assert_eq!(summary[0].total_opportunities, Some(3.0));
    assert_eq!(summary[1].total_opportunities, Some(1.0));
    assert_eq!(summary[0].mean(Stage::Final), Some(20.0));
    assert_eq!(summary[1].mean(Stage::Final), Some(40.0));

    // Owner-level mean (20 + 40) / 2, not the record-level 25.
    let company = &summary[2];
    assert_eq!(company.label, SummaryLabel::CompanyAverage);
    assert_eq!(company.mean(Stage::Final), Some(30.0));
    assert_eq!(company.total_opportunities, Some(2.0));
    assert_eq!(summary[3].label, SummaryLabel::OwnersAverage);
    assert_eq!(summary[3].stats, company.stats);
}

#[test]
fn test_selection_narrows_display_but_not_values() {
    let source = table(&[
        ("a@x", outcome_row(10)),
        ("b@x", outcome_row(20)),
        ("c@x", outcome_row(40)),
    ]);
    let cfg = config(&["a@x", "b@x", "c@x"]);

    let all = build_dashboard(&source, &cfg, &OwnerSelection::all(&cfg.source.owners));
    let narrowed = build_dashboard(
        &source,
        &cfg,
        &OwnerSelection::from_requested(&cfg.source.owners, ["a@x"]),
    );

    assert_eq!(all.summary, narrowed.summary);
    let labels: Vec<&str> = narrowed
        .displayed_summary
        .iter()
        .map(|r| r.label.as_str())
        .collect();
    assert_eq!(labels, vec!["a@x", "Avg for the Company", "Avg for Contact Owners"]);

    // Top performers come from the full summary and keep their highlight.
    assert_eq!(narrowed.top_performers, vec!["c@x", "b@x"]);
    let highlights: Vec<_> = narrowed
        .chart
        .data
        .iter()
        .filter(|t| t.line.is_some())
        .collect();
    assert_eq!(highlights.len(), 10);
    assert!(highlights.iter().all(|t| t.x.len() == 1));
}

#[test]
fn test_empty_working_set() {
    let source = table(&[("z@x", outcome_row(10))]);
    let cfg = config(&["a@x"]);
    let view = build_dashboard(&source, &cfg, &OwnerSelection::all(&cfg.source.owners));

    assert!(view.records.records.is_empty());
    assert_eq!(view.summary.len(), 2);
    assert!(view.top_performers.is_empty());
    assert_eq!(view.chart.data.len(), 5);
    assert_eq!(view.source.row_count, 1);
}
