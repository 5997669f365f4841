pub mod repositories;
pub mod seed;
pub mod store;

pub mod mock;

use std::path::Path;

use chrono::NaiveDateTime;
use eyre::Result;

pub use repositories::UpdateOutcome;
pub use store::{FileStore, KeyValueStore, MemoryStore};

/// Opens the file store under `data_dir` and seeds it if it is empty.
pub fn open_store(data_dir: &Path, now: NaiveDateTime) -> Result<FileStore> {
    let store = FileStore::open(data_dir)?;
    seed::initialize_store(&store, now)?;
    Ok(store)
}
