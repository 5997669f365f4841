pub mod store;

use chrono::NaiveDateTime;

use crate::store::MemoryStore;

/// In-memory store holding the seed data, for tests.
pub fn seeded_memory_store(now: NaiveDateTime) -> MemoryStore {
    let store = MemoryStore::new();
    crate::seed::initialize_store(&store, now)
        .unwrap_or_else(|e| panic!("Failed to seed memory store: {}", e));
    store
}
