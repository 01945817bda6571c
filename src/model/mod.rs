pub mod entry_collection;
pub mod usage_record;

pub use entry_collection::*;
pub use usage_record::*;
