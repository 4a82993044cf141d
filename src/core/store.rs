//! Menu store business logic - The ordered collection of committed entries.
//!
//! Every transition takes the current store by value and returns the next one,
//! so a store can be exercised without any UI around it. Newest entries come
//! first. None of the operations can fail: removing an unknown id is a no-op.

use crate::entities::{EntryId, MenuEntry};
use serde::Serialize;
use tracing::debug;

/// Committed menu entries, newest first.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct MenuStore {
    entries: Vec<MenuEntry>,
}

impl MenuStore {
    /// Creates an empty store.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the store with `entry` placed in front of all existing entries.
    ///
    /// Ids stay unique: an entry whose id is already held leaves the store
    /// unchanged.
    #[must_use]
    pub fn add(mut self, entry: MenuEntry) -> Self {
        if self.get(entry.id()).is_some() {
            debug!("Entry {} is already on the menu", entry.id());
            return self;
        }
        self.entries.insert(0, entry);
        self
    }

    /// Returns the store without the entry whose id is `id`.
    ///
    /// Relative order of the remaining entries is kept. An unknown id leaves
    /// the store as it was.
    #[must_use]
    pub fn remove_by_id(self, id: EntryId) -> Self {
        Self {
            entries: self
                .entries
                .into_iter()
                .filter(|entry| entry.id() != id)
                .collect(),
        }
    }

    /// Returns an empty store regardless of prior contents.
    #[must_use]
    pub fn clear(self) -> Self {
        Self::new()
    }

    /// Number of entries currently held.
    #[must_use]
    pub fn count(&self) -> usize {
        self.entries.len()
    }

    /// True when the menu has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in display order (newest first).
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        &self.entries
    }

    /// Looks up an entry by id.
    #[must_use]
    pub fn get(&self, id: EntryId) -> Option<&MenuEntry> {
        self.entries.iter().find(|entry| entry.id() == id)
    }
}
