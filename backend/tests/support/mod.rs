#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::sync::Mutex;

use tempfile::NamedTempFile;

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Header of a minimal export: owner, the seven date columns and one extra.
pub const HEADER: &str = "Contact Owner,Opp Created Date,Discovery Date,Demo Date,Proposal date,Technical Validation Date,Closed Won,Closed Lost Date,Deal Name";

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Write `lines` (without header) to a temporary CSV export.
pub fn write_export(lines: &[&str]) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    writeln!(file, "{}", HEADER).expect("write header");
    for line in lines {
        writeln!(file, "{}", line).expect("write row");
    }
    file.flush().expect("flush");
    file
}

/// A small export over two allow-listed owners, one outsider and some bad dates.
///
/// - dan: days to final 10 and 30 (won day 30, lost day 45), mean 20
/// - adam: days to final 40, plus one record with an unparsable created date
/// - eve: not allow-listed
pub fn sample_export() -> NamedTempFile {
    write_export(&[
        "dan@rocketramp.ai,2024-01-01,2024-01-03,2024-01-05,,,2024-01-11,,Acme",
        "dan@rocketramp.ai,2024-01-01,,,,,2024-01-31,2024-02-15,Globex",
        "adam@rocketramp.ai,2024-01-01,2024-01-21,,,,,2024-02-10,Initech",
        "adam@rocketramp.ai,not a date,,,,,,,Umbrella",
        "eve@example.com,2024-01-01,,,,,2024-01-02,,Hooli",
    ])
}
