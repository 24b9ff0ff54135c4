mod support;

use std::io::Write;

use pipeline_velocity::config::{DashboardConfig, CONFIG_ENV, DEFAULT_OWNERS};
use pipeline_velocity::ReportError;

use support::with_scoped_env;

#[test]
fn test_load_defaults_without_file() {
    let config = with_scoped_env(
        &[
            (CONFIG_ENV, None),
            ("PIPELINE_DATA_PATH", None),
            ("HOST", None),
            ("PORT", None),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.source.owners.len(), DEFAULT_OWNERS.len());
    assert_eq!(config.server.port, 8080);
    assert_eq!(config.chart.top_performers, 2);
}

#[test]
fn test_load_file_then_env_overrides() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[source]\ndata_path = \"from_file.csv\"\nowners = [\"a@x\"]\n\n[server]\nport = 9000\n"
    )
    .unwrap();
    let path = file.path().to_string_lossy().to_string();

    let config = with_scoped_env(
        &[
            (CONFIG_ENV, Some(path.as_str())),
            ("PIPELINE_DATA_PATH", Some("override.csv")),
            ("HOST", None),
            ("PORT", None),
        ],
        DashboardConfig::load,
    )
    .unwrap();

    assert_eq!(config.source.data_path.to_string_lossy(), "override.csv");
    assert_eq!(config.source.owners, vec!["a@x".to_string()]);
    assert_eq!(config.server.port, 9000);
}

#[test]
fn test_invalid_port_override() {
    let result = with_scoped_env(
        &[(CONFIG_ENV, None), ("PORT", Some("eighty"))],
        DashboardConfig::load,
    );
    assert!(matches!(result, Err(ReportError::InvalidSetting { .. })));
}
