//! Core business logic - framework-agnostic draft validation and menu management.

/// Confirmation gate for remove and clear
pub mod confirm;
/// Draft form values and the commit step
pub mod draft;
/// Single writer combining one draft and one menu
pub mod editor;
/// Ordered store of committed entries
pub mod store;

pub use confirm::{Confirm, ConfirmPrompt, Decision};
pub use draft::{DraftForm, FieldEdit, parse_price};
pub use editor::{MenuEditor, MenuSnapshot};
pub use store::MenuStore;
