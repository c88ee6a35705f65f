//! Saved invitations: persistence and lookup.
//!
//! [`Invitations`] owns a [`KeyValueStore`] and keeps two structures in it
//! consistent: one entry per saved record, and the index listing every saved
//! ID in the order it was saved. Every mutation updates both, and rolls the
//! first write back if the second one fails.
//!
//! ```text
//! ┌─────────────────┐    ┌─────────────────┐    ┌─────────────────┐
//! │  WizardEngine   │    │   Invitations   │    │  KeyValueStore  │
//! │    (save)       │───▶│ (index+records) │───▶│ (SQLite/memory) │
//! └─────────────────┘    └─────────────────┘    └─────────────────┘
//! ```

use log::{debug, warn};

use crate::{
    codec,
    error::{InvitationError, Result},
    models::InvitationRecord,
    store::{record_key, KeyValueStore, INDEX_KEY},
};

pub mod builder;


pub use builder::InvitationsBuilder;

/// Saved invitations in a key-value store.
pub struct Invitations<S> {
    store: S,
}

impl<S: KeyValueStore> Invitations<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    /// Persists `record` under `id` and adds `id` to the index.
    ///
    /// An ID that is already indexed is not added twice. If the index write
    /// fails, the record write is undone so the store never holds a record
    /// the index does not list.
    ///
    /// # Errors
    ///
    /// - `InvitationError::InvalidInput` if `id` is blank, padded with
    ///   whitespace or collides with the index key
    /// - `InvitationError::Decode` if the existing index is unreadable
    /// - a store error if either write fails
    pub fn insert(&mut self, id: &str, record: &InvitationRecord) -> Result<()> {
        if validate_id(id)? != id {
            return Err(InvitationError::invalid_input("id")
                .with_reason("Invitation IDs cannot start or end with whitespace"));
        }
        let key = record_key(id);
        if key == INDEX_KEY {
            return Err(InvitationError::invalid_input("id")
                .with_reason(format!("'{id}' is reserved for the invitation index")));
        }
        let encoded = codec::encode(record)?;
        let mut ids = self.load_index()?;
        let previous = self.store.get(&key)?;

        self.store.put(&key, &encoded)?;

        if ids.iter().any(|known| known == id) {
            debug!("Invitation {id} already indexed");
            return Ok(());
        }

        ids.push(id.to_string());
        if let Err(err) = self.write_index(&ids) {
            warn!("Index update failed for {id}, rolling back record write: {err}");
            let rollback = match previous {
                Some(value) => self.store.put(&key, &value),
                None => self.store.delete(&key),
            };
            if let Err(rollback_err) = rollback {
                warn!("Rollback of {key} failed: {rollback_err}");
            }
            return Err(err);
        }

        debug!("Saved invitation {id}");
        Ok(())
    }

    /// Looks up and decodes the invitation saved under `id`.
    ///
    /// # Errors
    ///
    /// - `InvitationError::InvalidInput` if `id` is blank
    /// - `InvitationError::NotFound` if nothing is stored under `id`
    /// - `InvitationError::Decode` if the stored value is unreadable
    pub fn find(&self, id: &str) -> Result<InvitationRecord> {
        let id = validate_id(id)?;
        let key = record_key(id);
        if key == INDEX_KEY {
            return Err(InvitationError::not_found(id));
        }

        match self.store.get(&key)? {
            Some(raw) => codec::decode_at(&key, &raw),
            None => Err(InvitationError::not_found(id)),
        }
    }

    /// IDs of every saved invitation, in the order they were saved.
    pub fn list_known_ids(&self) -> Result<Vec<String>> {
        self.load_index()
    }

    /// Deletes one invitation and its index entry.
    ///
    /// The index entry goes first; if removing the record then fails, the
    /// index is restored.
    ///
    /// # Errors
    ///
    /// Returns `InvitationError::NotFound` if `id` is neither indexed nor
    /// stored, or a store error if a write fails.
    pub fn delete_one(&mut self, id: &str) -> Result<()> {
        let id = validate_id(id)?;
        let key = record_key(id);
        if key == INDEX_KEY {
            return Err(InvitationError::not_found(id));
        }

        let ids = self.load_index()?;
        let remaining: Vec<String> = ids.iter().filter(|known| *known != id).cloned().collect();
        let indexed = remaining.len() != ids.len();
        let stored = self.store.get(&key)?.is_some();

        if !indexed && !stored {
            return Err(InvitationError::not_found(id));
        }

        if indexed {
            self.write_index(&remaining)?;
        }

        if let Err(err) = self.store.delete(&key) {
            if indexed {
                warn!("Deleting {key} failed, restoring index entry: {err}");
                if let Err(restore_err) = self.write_index(&ids) {
                    warn!("Restoring index failed: {restore_err}");
                }
            }
            return Err(err);
        }

        debug!("Deleted invitation {id}");
        Ok(())
    }

    /// Deletes every indexed invitation, then the index itself.
    ///
    /// Returns the number of invitations removed. If a record delete fails
    /// part way, the index is rewritten to list only the records still
    /// present before the error is returned. If the index itself cannot be
    /// deleted, it is overwritten with an empty list instead.
    pub fn clear_all(&mut self) -> Result<usize> {
        let ids = self.load_index()?;

        for (position, id) in ids.iter().enumerate() {
            if let Err(err) = self.store.delete(&record_key(id)) {
                warn!("Clearing stopped at {id}: {err}");
                if let Err(index_err) = self.write_index(&ids[position..]) {
                    warn!("Pruning index failed: {index_err}");
                }
                return Err(err);
            }
        }

        if let Err(err) = self.store.delete(INDEX_KEY) {
            warn!("Deleting the index failed, writing an empty one: {err}");
            if let Err(index_err) = self.write_index(&[]) {
                warn!("Emptying index failed: {index_err}");
                return Err(err);
            }
        }
        debug!("Cleared {} invitations", ids.len());
        Ok(ids.len())
    }

    fn load_index(&self) -> Result<Vec<String>> {
        match self.store.get(INDEX_KEY)? {
            Some(raw) => codec::decode_ids(&raw),
            None => Ok(Vec::new()),
        }
    }

    fn write_index(&mut self, ids: &[String]) -> Result<()> {
        let encoded = codec::encode_ids(ids)?;
        self.store.put(INDEX_KEY, &encoded)
    }
}

/// Trims an ID typed by a user and rejects blank input.
fn validate_id(id: &str) -> Result<&str> {
    let id = id.trim();
    if id.is_empty() {
        return Err(
            InvitationError::invalid_input("id").with_reason("Please enter an invitation ID")
        );
    }
    Ok(id)
}
