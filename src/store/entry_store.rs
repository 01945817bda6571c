use tracing::{debug, warn};

use super::error::StoreError;
use super::slot::{SlotBackend, SqliteSlots};
use crate::EntryCollection;

pub const ENTRIES_KEY: &str = "cpap_entries";

/// Maps an [`EntryCollection`] to a single JSON string under [`ENTRIES_KEY`].
///
/// Every call is a complete read or a complete write of the whole collection;
/// nothing is cached between calls.
pub struct EntryStore<B = SqliteSlots> {
    backend: B,
}

impl<B: SlotBackend> EntryStore<B> {
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    pub fn load(&self) -> Result<EntryCollection, StoreError> {
        let raw = match self.backend.read(ENTRIES_KEY)? {
            Some(raw) if !raw.trim().is_empty() => raw,
            _ => {
                debug!("no saved entries");
                return Ok(EntryCollection::new());
            }
        };
        let entries: EntryCollection =
            serde_json::from_str(&raw).map_err(|e| StoreError::CorruptStore(Box::new(e)))?;
        debug!(count = entries.len(), "loaded entries");
        Ok(entries)
    }

    /// Like [`load`](Self::load) but falls back to an empty collection on any error.
    pub fn load_or_empty(&self) -> EntryCollection {
        self.load().unwrap_or_else(|e| {
            warn!(error = %e, "could not load entries, starting empty");
            EntryCollection::new()
        })
    }

    pub fn save(&self, entries: &EntryCollection) -> Result<(), StoreError> {
        let raw = serde_json::to_string(entries).map_err(StoreError::Encode)?;
        self.backend.write(ENTRIES_KEY, &raw)?;
        debug!(count = entries.len(), "saved entries");
        Ok(())
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }
}
