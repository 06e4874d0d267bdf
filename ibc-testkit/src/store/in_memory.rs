use alloc::collections::BTreeMap;

use ibc_app_interchain_accounts::store::Store;
use ibc_core::primitives::prelude::*;
use tracing::trace;

/// An in-memory store backed by an ordered map.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    state: BTreeMap<Vec<u8>, Vec<u8>>,
}

impl InMemoryStore {
    pub fn len(&self) -> usize {
        self.state.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}

impl Store for InMemoryStore {
    type Error = (); // underlying store ops are infallible

    fn get(&self, key: &[u8]) -> Option<Vec<u8>> {
        trace!("get at key = {}", String::from_utf8_lossy(key));
        self.state.get(key).cloned()
    }

    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error> {
        trace!("set at key = {}", String::from_utf8_lossy(&key));
        Ok(self.state.insert(key, value))
    }

    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error> {
        trace!("delete at key = {}", String::from_utf8_lossy(key));
        Ok(self.state.remove(key))
    }

    fn get_keys(&self, key_prefix: &[u8]) -> Vec<Vec<u8>> {
        self.state
            .range(key_prefix.to_vec()..)
            .map(|(key, _)| key)
            .take_while(|key| key.starts_with(key_prefix))
            .cloned()
            .collect()
    }
}
