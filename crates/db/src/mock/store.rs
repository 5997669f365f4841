use mockall::mock;

use crate::store::KeyValueStore;

// Mock storage backend for testing
mock! {
    pub Store {}

    impl KeyValueStore for Store {
        fn get(&self, key: &str) -> eyre::Result<Option<String>>;

        fn set(&self, key: &str, value: &str) -> eyre::Result<()>;

        fn remove(&self, key: &str) -> eyre::Result<()>;
    }
}
