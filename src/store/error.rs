use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("stored entries are corrupt: {0}")]
    CorruptStore(#[source] Box<dyn std::error::Error + Send + Sync>),
    #[error("storage I/O error: {0}")]
    StorageIo(#[from] rusqlite::Error),
    #[error("could not prepare data directory: {0}")]
    Directory(#[from] std::io::Error),
    #[error("could not encode entries: {0}")]
    Encode(#[source] serde_json::Error),
    #[error("store worker has stopped")]
    WorkerGone,
}

impl StoreError {
    pub fn is_corrupt(&self) -> bool {
        matches!(self, StoreError::CorruptStore(_))
    }
}
