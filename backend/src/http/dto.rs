//! Data Transfer Objects for the HTTP API.
//!
//! Dashboard payloads are serialized straight from the service types; this
//! module only adds the envelopes and the selection query parsing.

use serde::Serialize;

use crate::io::SourceInfo;
use crate::models::{OwnerSelection, OwnerSummary};

/// Query key carrying one selected owner; repeated for multi-select.
pub const OWNER_PARAM: &str = "owner";

/// Query key marking a submitted selection form, so an empty selection is
/// distinguishable from a first visit.
pub const SUBMITTED_PARAM: &str = "submitted";

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
    /// Loaded export
    pub source: SourceInfo,
}

/// Summary table response.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResponse {
    pub rows: Vec<OwnerSummary>,
    pub total: usize,
}

/// Resolve the owner selection from raw query pairs.
///
/// Without any `owner` or `submitted` key the default (every allow-listed
/// owner) applies. Otherwise the listed owners are the selection, possibly
/// none. Unknown keys are rejected.
pub fn selection_from_query(
    pairs: &[(String, String)],
    allow_list: &[String],
) -> Result<OwnerSelection, String> {
    if let Some((key, _)) = pairs
        .iter()
        .find(|(k, _)| k != OWNER_PARAM && k != SUBMITTED_PARAM)
    {
        return Err(format!("Unknown query parameter: {}", key));
    }

    if pairs.is_empty() {
        return Ok(OwnerSelection::all(allow_list));
    }

    let requested = pairs
        .iter()
        .filter(|(k, _)| k == OWNER_PARAM)
        .map(|(_, v)| v.as_str());
    Ok(OwnerSelection::from_requested(allow_list, requested))
}
