//! Entity module - The data the menu is made of.
//! These types carry no behaviour beyond construction and accessors; the
//! transitions that create and drop them live in `core`.

pub mod course;
pub mod menu_entry;

pub use course::Course;
pub use menu_entry::{EntryId, MenuEntry};
