use std::future::Future;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tracing::{debug, warn};

use super::entry_store::EntryStore;
use super::error::StoreError;
use super::slot::SlotBackend;
use crate::EntryCollection;

enum Request {
    Load(oneshot::Sender<Result<EntryCollection, StoreError>>),
    Save(EntryCollection, oneshot::Sender<Result<(), StoreError>>),
}

/// Runs an [`EntryStore`] on a single blocking worker.
///
/// Requests are queued when `load`/`save` is called, not when the returned
/// future is polled, so writes are applied in call order even if the caller
/// never awaits them.
pub struct StoreWriter {
    tx: mpsc::UnboundedSender<Request>,
    worker: JoinHandle<()>,
}

impl StoreWriter {
    /// Must be called from within a tokio runtime.
    pub fn spawn<B>(store: EntryStore<B>) -> Self
    where
        B: SlotBackend + Send + 'static,
    {
        let (tx, mut rx) = mpsc::unbounded_channel::<Request>();
        let worker = tokio::task::spawn_blocking(move || {
            while let Some(request) = rx.blocking_recv() {
                match request {
                    Request::Load(reply) => {
                        let _ = reply.send(store.load());
                    }
                    Request::Save(entries, reply) => {
                        let result = store.save(&entries);
                        if let Err(e) = &result {
                            warn!(error = %e, "save failed");
                        }
                        let _ = reply.send(result);
                    }
                }
            }
            debug!("store worker stopped");
        });
        Self { tx, worker }
    }

    pub fn load(
        &self,
    ) -> impl Future<Output = Result<EntryCollection, StoreError>> + Send + 'static {
        let (reply, rx) = oneshot::channel();
        let queued = self.tx.send(Request::Load(reply)).is_ok();
        async move {
            if !queued {
                return Err(StoreError::WorkerGone);
            }
            rx.await.map_err(|_| StoreError::WorkerGone)?
        }
    }

    pub fn save(
        &self,
        entries: EntryCollection,
    ) -> impl Future<Output = Result<(), StoreError>> + Send + 'static {
        let (reply, rx) = oneshot::channel();
        let queued = self.tx.send(Request::Save(entries, reply)).is_ok();
        async move {
            if !queued {
                return Err(StoreError::WorkerGone);
            }
            rx.await.map_err(|_| StoreError::WorkerGone)?
        }
    }

    /// Closes the queue and waits until every queued request has been applied.
    pub async fn shutdown(self) {
        drop(self.tx);
        if let Err(e) = self.worker.await {
            warn!(error = %e, "store worker panicked");
        }
    }
}
