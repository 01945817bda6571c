pub mod config;
pub mod model;
pub mod store;
pub mod tracker;

pub use model::*;
pub use store::{EntryStore, StoreError, StoreWriter};
pub use tracker::Tracker;
