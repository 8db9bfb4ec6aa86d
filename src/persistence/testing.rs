//! Storage double for exercising write failures

use crate::error::{CartError, CartResult};
use crate::persistence::storage::{KeyValueStorage, MemoryStorage};
use async_trait::async_trait;
use std::sync::Mutex;

/// Memory storage whose writes can be made to fail with a given reason
#[derive(Debug, Default)]
pub(crate) struct FlakyStorage {
    inner: MemoryStorage,
    failure: Mutex<Option<String>>,
}

impl FlakyStorage {
    /// Fail every following write with `reason`
    pub(crate) fn fail_with(&self, reason: &str) {
        *self.failure.lock().unwrap() = Some(reason.to_string());
    }

    /// Let writes through again
    pub(crate) fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }
}

#[async_trait]
impl KeyValueStorage for FlakyStorage {
    async fn get(&self, key: &str) -> CartResult<Option<Vec<u8>>> {
        self.inner.get(key).await
    }

    async fn set(&self, key: &str, value: Vec<u8>) -> CartResult<()> {
        let failure = self.failure.lock().unwrap().clone();
        if let Some(reason) = failure {
            return Err(CartError::write_failed(key, reason));
        }
        self.inner.set(key, value).await
    }

    fn backend_name(&self) -> &'static str {
        "flaky"
    }
}
