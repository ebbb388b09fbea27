//! The export pipeline.
//!
//! A run is a strict sequence: version gate, fetch, optional positional
//! filter, record mapping, one document write. Nothing is retried; any
//! failure aborts before the output file exists.

use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use emdex_core::{
    client_record, session_record, ExportError, ExportRecord, SUPPORTED_DB_VERSION,
};
use emdex_db::Store;

/// Read the stored schema version and fail unless it is the one supported
/// layout. Runs before any row fetch, in every mode.
pub fn ensure_supported_version(store: &Store) -> Result<i64> {
    let version = store
        .schema_version()
        .context("failed to read schema version")?;
    if version != SUPPORTED_DB_VERSION {
        return Err(ExportError::UnsupportedVersion { found: version }.into());
    }
    Ok(version)
}

/// Map every client row, in store-native order.
pub fn export_clients(store: &Store) -> Result<Vec<ExportRecord>> {
    let clients = store.clients().context("failed to fetch client rows")?;
    Ok(clients.iter().map(client_record).collect())
}

/// Map session rows in creation-time order, keeping only the positions in
/// `selection` when one was supplied.
///
/// Selection indices are positions into the fetched ordering; indices past
/// the last row select nothing, and an empty result is a valid empty
/// document.
pub fn export_sessions(
    store: &Store,
    selection: Option<&BTreeSet<usize>>,
) -> Result<Vec<ExportRecord>> {
    let sessions = store.sessions().context("failed to fetch session rows")?;

    let records = sessions
        .iter()
        .enumerate()
        .filter(|(position, _)| selection.map_or(true, |set| set.contains(position)))
        .map(|(_, row)| session_record(row))
        .collect();

    Ok(records)
}

/// Serialize the whole document in memory, then write it in one shot. The
/// output file is either absent or complete, never partial.
pub fn write_document(records: &[ExportRecord], path: &Path) -> Result<()> {
    let document =
        serde_json::to_string_pretty(records).context("failed to serialize export document")?;
    fs::write(path, document).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
