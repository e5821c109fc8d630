use super::StorageBackend;
use crate::error::Result;
use std::collections::HashMap;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<()> {
        self.values.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<()> {
        self.values.remove(key);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::error::BitpadError;
    use crate::model::{Bit, BitDraft};
    use crate::storage::KEY_SNIPPETS;

    /// Backend whose writes always fail, for exercising the
    /// persist-then-commit rejection path. Reads pass through.
    #[derive(Default)]
    pub struct FailingStorage {
        inner: MemoryStorage,
    }

    impl FailingStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn seeded(key: &str, value: &str) -> Self {
            let mut inner = MemoryStorage::new();
            inner.write(key, value).unwrap();
            Self { inner }
        }
    }

    impl StorageBackend for FailingStorage {
        fn read(&self, key: &str) -> Result<Option<String>> {
            self.inner.read(key)
        }

        fn write(&mut self, _key: &str, _value: &str) -> Result<()> {
            Err(BitpadError::Storage("write rejected".to_string()))
        }

        fn remove(&mut self, _key: &str) -> Result<()> {
            Err(BitpadError::Storage("write rejected".to_string()))
        }
    }

    pub fn draft(title: &str) -> BitDraft {
        BitDraft {
            title: title.to_string(),
            description: format!("Description for {}", title),
            html: "<p>hi</p>".to_string(),
            css: "p { color: red }".to_string(),
            javascript: String::new(),
            is_public: false,
            author_id: uuid::Uuid::new_v4(),
            author_username: "tester".to_string(),
        }
    }

    /// A backend whose `snippets` key is pre-populated with the given bits.
    pub fn storage_with_bits(bits: &[Bit]) -> MemoryStorage {
        let mut storage = MemoryStorage::new();
        let value = serde_json::to_string_pretty(bits).unwrap();
        storage.write(KEY_SNIPPETS, &value).unwrap();
        storage
    }
}
