//! Loading the pipeline export.
//!
//! - [`loader`]: reads the CSV into a text [`SourceTable`] and applies the
//!   owner allow-list
//! - [`dates`]: parses the date columns, degrading bad values to missing
//! - [`checksum`]: fingerprint of the loaded file
//!
//! # Example
//!
//! ```no_run
//! use pipeline_velocity::io::{load_source, normalize, restrict_to_owners};
//! use std::path::Path;
//!
//! let table = load_source(Path::new("Project_Quantum_Leap.csv")).expect("Failed to load");
//! let owners = vec!["dan@rocketramp.ai".to_string()];
//! let rows = restrict_to_owners(&table, &owners);
//! let dataset = normalize(&table, &rows);
//! println!("Loaded {} records", dataset.records.len());
//! ```

pub mod checksum;
pub mod dates;
pub mod loader;


pub use dates::{normalize, parse_date};
pub use loader::{load_source, restrict_to_owners, SourceInfo, SourceRow, SourceTable};
