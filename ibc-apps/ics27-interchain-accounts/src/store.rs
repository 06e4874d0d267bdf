//! The key-value store the keeper persists its records in.
use core::fmt::Debug;

use ibc_core::primitives::prelude::*;

/// An ordered key-value store, scoped to the interchain accounts module.
///
/// All the writes performed while serving one external call form one unit of
/// work: the host either commits them with [`Store::apply`] or drops them with
/// [`Store::reset`] when its transaction aborts.
pub trait Store {
    /// Error type - expected to envelope all possible errors in store
    type Error: Debug;

    /// Returns the value stored under `key`, if any
    fn get(&self, key: &[u8]) -> Option<Vec<u8>>;

    /// Returns true if a value is stored under `key`
    fn has(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Sets `value` for `key`, returning the previous value
    fn set(&mut self, key: Vec<u8>, value: Vec<u8>) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Deletes `key`, returning the removed value
    fn delete(&mut self, key: &[u8]) -> Result<Option<Vec<u8>>, Self::Error>;

    /// Returns all keys starting with `key_prefix`, in ascending order
    fn get_keys(&self, key_prefix: &[u8]) -> Vec<Vec<u8>>;

    /// Commits the pending unit of work
    fn apply(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Drops the pending unit of work
    fn reset(&mut self) {}
}
