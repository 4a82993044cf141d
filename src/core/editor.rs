//! Menu editor - The single writer that ties the draft and the store together.
//!
//! The presentation layer only talks to a [`MenuEditor`]: it pushes field
//! edits in, asks for a submit, and routes remove/clear through a
//! [`Confirm`] implementation. It reads back the draft, the entries and the
//! count for display.

use super::{
    confirm::{Confirm, ConfirmPrompt, Decision},
    draft::{DraftForm, FieldEdit},
    store::MenuStore,
};
use crate::{
    entities::{EntryId, MenuEntry},
    errors::ValidationError,
};
use serde::Serialize;
use std::mem;
use tracing::{debug, info, trace, warn};

/// Read-only view of everything the editor holds, for handing to an outbound
/// serializer. Entries are newest first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MenuSnapshot<'a> {
    /// Current draft values
    pub draft: &'a DraftForm,
    /// Committed entries in display order
    pub entries: &'a [MenuEntry],
}

/// One draft plus the menu it commits into.
#[derive(Debug, Clone, Default)]
pub struct MenuEditor {
    draft: DraftForm,
    store: MenuStore,
}

impl MenuEditor {
    /// Starts with an empty draft and an empty menu.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Current draft values.
    #[must_use]
    pub const fn draft(&self) -> &DraftForm {
        &self.draft
    }

    /// Current menu.
    #[must_use]
    pub const fn store(&self) -> &MenuStore {
        &self.store
    }

    /// Entries in display order (newest first).
    #[must_use]
    pub fn entries(&self) -> &[MenuEntry] {
        self.store.entries()
    }

    /// Number of entries on the menu.
    #[must_use]
    pub fn count(&self) -> usize {
        self.store.count()
    }

    /// Borrows the draft and the entries together.
    #[must_use]
    pub fn snapshot(&self) -> MenuSnapshot<'_> {
        MenuSnapshot {
            draft: &self.draft,
            entries: self.store.entries(),
        }
    }

    /// Replaces one draft field.
    pub fn edit(&mut self, edit: FieldEdit) {
        trace!("Draft edit: {:?}", edit);
        self.draft = mem::take(&mut self.draft).set_field(edit);
    }

    /// Commits the draft, adds the new entry to the front of the menu and
    /// resets the draft.
    ///
    /// On failure neither the draft nor the menu change.
    ///
    /// # Returns
    /// A copy of the entry that was added
    ///
    /// # Errors
    /// Returns the first [`ValidationError`] the draft fails.
    pub fn submit(&mut self) -> Result<MenuEntry, ValidationError> {
        let entry = self
            .draft
            .commit()
            .inspect_err(|e| warn!("Draft rejected: {:?}", e))?;

        info!(
            "Adding '{}' ({}, {:.2}) to the menu",
            entry.name(),
            entry.course(),
            entry.price()
        );
        self.store = mem::take(&mut self.store).add(entry.clone());
        self.draft = mem::take(&mut self.draft).reset();

        Ok(entry)
    }

    /// Removes the entry with `id` once the user confirms.
    ///
    /// An id that is not on the menu is ignored without asking.
    ///
    /// # Arguments
    /// * `id` - Entry to remove
    /// * `confirm` - Asked once with the entry's name before anything changes
    ///
    /// # Returns
    /// The user's decision, or [`Decision::Cancelled`] for an unknown id
    pub fn remove<C: Confirm + ?Sized>(&mut self, id: EntryId, confirm: &mut C) -> Decision {
        let Some(entry) = self.store.get(id) else {
            debug!("Ignoring removal of unknown entry {}", id);
            return Decision::Cancelled;
        };

        let prompt = ConfirmPrompt::remove_item(entry.name());
        let decision = confirm.confirm(&prompt);
        if decision.is_confirmed() {
            info!("Removing entry {} from the menu", id);
            self.store = mem::take(&mut self.store).remove_by_id(id);
        } else {
            debug!("Removal of entry {} cancelled", id);
        }
        decision
    }

    /// Clears the whole menu once the user confirms.
    ///
    /// The user is asked even when the menu is already empty.
    ///
    /// # Arguments
    /// * `confirm` - Asked once before anything changes
    ///
    /// # Returns
    /// The user's decision
    pub fn clear<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> Decision {
        let decision = confirm.confirm(&ConfirmPrompt::clear_menu());
        if decision.is_confirmed() {
            info!("Clearing {} entries from the menu", self.store.count());
            self.store = mem::take(&mut self.store).clear();
        } else {
            debug!("Clearing the menu cancelled");
        }
        decision
    }
}
