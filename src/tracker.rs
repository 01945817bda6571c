use std::future::Future;
use tracing::{info, warn};

use crate::store::{StoreError, StoreWriter};
use crate::{EntryCollection, UsageRecord};

/// In-memory view of the saved entries, mirrored to the store on every change.
pub struct Tracker {
    writer: StoreWriter,
    entries: EntryCollection,
    warning: Option<String>,
}

impl Tracker {
    /// Loads saved entries. A failed load leaves the tracker empty with a warning set.
    pub async fn start(writer: StoreWriter) -> Self {
        let (entries, warning) = match writer.load().await {
            Ok(entries) => {
                info!(count = entries.len(), "tracker started");
                (entries, None)
            }
            Err(e) => {
                warn!(error = %e, "starting with an empty list");
                (EntryCollection::new(), Some(e.to_string()))
            }
        };
        Self {
            writer,
            entries,
            warning,
        }
    }

    pub fn entries(&self) -> &EntryCollection {
        &self.entries
    }

    /// Set when the startup load failed, cleared by the next successful save.
    pub fn warning(&self) -> Option<&str> {
        self.warning.as_deref()
    }

    /// A save replaces whatever is stored, so after a failed load only a forced
    /// record may overwrite the unreadable data.
    pub fn can_record(&self, force: bool) -> bool {
        force || self.warning.is_none()
    }

    /// Appends `record` and queues a full save of the new list.
    ///
    /// The save is queued before this returns. The in-memory list is updated
    /// immediately and kept even if the save fails.
    pub fn record(
        &mut self,
        record: UsageRecord,
    ) -> impl Future<Output = Result<(), StoreError>> + Send + '_ {
        self.entries = self.entries.appended(record);
        let pending = self.writer.save(self.entries.clone());
        async move {
            pending.await?;
            self.warning = None;
            Ok(())
        }
    }

    pub async fn shutdown(self) {
        self.writer.shutdown().await;
    }
}
