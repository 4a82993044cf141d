//! Menu entry entity - A committed dish on the menu.
//!
//! Entries are only built by a successful draft commit and are never mutated
//! afterwards. The identifier is opaque and exists for removal only.

use super::course::Course;
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EntryId(Uuid);

impl EntryId {
    /// Generates a fresh random (v4) identifier.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// A committed menu item
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MenuEntry {
    pub(crate) id: EntryId,
    pub(crate) name: String,
    pub(crate) description: String,
    pub(crate) course: Course,
    pub(crate) price: f64,
}

impl MenuEntry {
    /// Identity used for removal; never shown to the user
    #[must_use]
    pub const fn id(&self) -> EntryId {
        self.id
    }

    /// Trimmed, non-empty dish name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Trimmed description, possibly empty
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Course the dish belongs to
    #[must_use]
    pub const fn course(&self) -> Course {
        self.course
    }

    /// Finite, non-negative price
    #[must_use]
    pub const fn price(&self) -> f64 {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_ids_differ() {
        let a = EntryId::generate();
        let b = EntryId::generate();
        assert_ne!(a, b);
        assert_ne!(a.to_string(), b.to_string());
    }
}
