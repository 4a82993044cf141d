//! Confirmation gate for destructive actions.
//!
//! Removing an entry or clearing the menu first asks a [`Confirm`]
//! implementation for a [`Decision`]. The store is only touched on
//! [`Decision::Confirmed`].

/// Outcome of a confirmation question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Go ahead with the action
    Confirmed,
    /// Leave everything as it is
    Cancelled,
}

impl Decision {
    /// True for [`Decision::Confirmed`].
    #[must_use]
    pub const fn is_confirmed(self) -> bool {
        matches!(self, Self::Confirmed)
    }
}

/// What the user is asked before a destructive action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    /// Short heading, e.g. "Clear menu"
    pub title: String,
    /// The question itself
    pub message: String,
}

impl ConfirmPrompt {
    /// Prompt shown before removing a single entry.
    #[must_use]
    pub fn remove_item(name: &str) -> Self {
        Self {
            title: "Remove item".to_string(),
            message: format!("Remove \"{name}\"?"),
        }
    }

    /// Prompt shown before clearing the whole menu.
    #[must_use]
    pub fn clear_menu() -> Self {
        Self {
            title: "Clear menu".to_string(),
            message: "Are you sure you want to remove all menu items?".to_string(),
        }
    }
}

/// Answers confirmation questions synchronously.
pub trait Confirm {
    /// Asks the user and returns their decision.
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision;
}

impl<F> Confirm for F
where
    F: FnMut(&ConfirmPrompt) -> Decision,
{
    fn confirm(&mut self, prompt: &ConfirmPrompt) -> Decision {
        self(prompt)
    }
}
