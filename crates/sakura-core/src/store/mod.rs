//! Key-value storage for invitations.
//!
//! The rest of the crate depends only on [`KeyValueStore`], a narrow
//! synchronous string-to-string interface. Two backends are provided:
//!
//! - [`SqliteStore`]: the persistent, device-local store
//! - [`MemoryStore`]: an in-memory map for tests and throwaway sessions
//!
//! # Key layout
//!
//! | Key                     | Value                          |
//! |-------------------------|--------------------------------|
//! | `date-invitation-<id>`  | encoded invitation record      |
//! | `date-invitation-ids`   | JSON array of known IDs        |

use crate::error::Result;

pub mod memory;
pub mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

/// Prefix of every record key.
pub const RECORD_KEY_PREFIX: &str = "date-invitation-";

/// Key holding the list of known invitation IDs.
pub const INDEX_KEY: &str = "date-invitation-ids";

/// Builds the storage key of the record for `id`.
pub fn record_key(id: &str) -> String {
    format!("{RECORD_KEY_PREFIX}{id}")
}

/// A persistent string-keyed, string-valued store.
pub trait KeyValueStore {
    /// Stores `value` under `key`, replacing any previous value.
    fn put(&mut self, key: &str, value: &str) -> Result<()>;

    /// Reads the value under `key`.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Removes `key`. Removing an absent key is not an error.
    fn delete(&mut self, key: &str) -> Result<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn put(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).put(key, value)
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn delete(&mut self, key: &str) -> Result<()> {
        (**self).delete(key)
    }
}
