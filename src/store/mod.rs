pub mod entry_store;
pub mod error;
pub mod slot;
pub mod writer;

pub use entry_store::*;
pub use error::*;
pub use slot::*;
pub use writer::*;
