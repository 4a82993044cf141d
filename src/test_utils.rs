//! Shared test utilities for the menu composer.
//!
//! This module provides helpers for building drafts, entries and stores with
//! sensible defaults, plus a tracing subscriber that writes through the test
//! harness.

use crate::{
    core::{
        confirm::{ConfirmPrompt, Decision},
        draft::{DraftForm, FieldEdit},
        store::MenuStore,
    },
    entities::{Course, MenuEntry},
};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}

/// Builds a draft from raw field values.
pub fn draft_with(name: &str, description: &str, course: Course, price_text: &str) -> DraftForm {
    DraftForm::default()
        .set_field(FieldEdit::Name(name.to_string()))
        .set_field(FieldEdit::Description(description.to_string()))
        .set_field(FieldEdit::Course(course))
        .set_field(FieldEdit::PriceText(price_text.to_string()))
}

/// Commits a test entry with sensible defaults.
///
/// # Defaults
/// * `description`: empty
/// * `course`: `Main`
/// * `price`: 10.0
pub fn test_entry(name: &str) -> MenuEntry {
    draft_with(name, "", Course::Main, "10")
        .commit()
        .unwrap_or_else(|e| panic!("test entry '{name}' failed to commit: {e}"))
}

/// Adds entries "A", "B" and "C" in that order.
/// Returns (store, a, b, c); the store iterates as [C, B, A].
pub fn store_with_three() -> (MenuStore, MenuEntry, MenuEntry, MenuEntry) {
    let a = test_entry("A");
    let b = test_entry("B");
    let c = test_entry("C");
    let store = MenuStore::new()
        .add(a.clone())
        .add(b.clone())
        .add(c.clone());
    (store, a, b, c)
}

/// A confirmer that always gives the same answer.
pub fn always(decision: Decision) -> impl FnMut(&ConfirmPrompt) -> Decision {
    move |_| decision
}
