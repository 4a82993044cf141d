//! Draft business logic - The uncommitted form values for a new menu entry.
//!
//! A [`DraftForm`] accepts any text in any field. Nothing is checked until
//! [`DraftForm::commit`], which validates the values in a fixed order (name
//! before price) and, on success, builds an immutable [`MenuEntry`] with a
//! fresh identifier. Committing never touches the store or resets the draft;
//! the caller does both, in that order, only when the commit succeeds.

use crate::{
    entities::{Course, EntryId, MenuEntry},
    errors::ValidationError,
};
use serde::Serialize;

/// A single field edit pushed in from the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    /// Replace the dish name
    Name(String),
    /// Replace the description
    Description(String),
    /// Select a course
    Course(Course),
    /// Replace the raw price text
    PriceText(String),
}

/// In-progress, uncommitted form values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct DraftForm {
    /// Dish name as typed
    pub name: String,
    /// Description as typed
    pub description: String,
    /// Selected course, `Main` by default
    pub course: Course,
    /// Price exactly as typed; parsed only at commit
    pub price_text: String,
}

impl DraftForm {
    /// Returns the draft with one field replaced. No validation happens here.
    #[must_use]
    pub fn set_field(mut self, edit: FieldEdit) -> Self {
        match edit {
            FieldEdit::Name(name) => self.name = name,
            FieldEdit::Description(description) => self.description = description,
            FieldEdit::Course(course) => self.course = course,
            FieldEdit::PriceText(price_text) => self.price_text = price_text,
        }
        self
    }

    /// Returns a fresh draft with every field at its default.
    #[must_use]
    pub fn reset(self) -> Self {
        Self::default()
    }

    /// Validates the draft and builds a new entry from it.
    ///
    /// The name is checked before the price, and only the first failure is
    /// reported. The draft itself is left as it was either way.
    ///
    /// # Returns
    /// A new [`MenuEntry`] with a fresh id, the trimmed name and description,
    /// the selected course and the parsed price
    ///
    /// # Errors
    /// - [`ValidationError::EmptyName`] if the trimmed name is empty
    /// - [`ValidationError::InvalidPrice`] if the price text is not a finite,
    ///   non-negative decimal number
    pub fn commit(&self) -> Result<MenuEntry, ValidationError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        let price = parse_price(&self.price_text)?;

        Ok(MenuEntry {
            id: EntryId::generate(),
            name: name.to_string(),
            description: self.description.trim().to_string(),
            course: self.course,
            price,
        })
    }
}

/// Parses price text as a plain decimal number.
///
/// Surrounding whitespace is ignored. Currency symbols, thousands separators,
/// negative values and non-finite values (`inf`, `NaN`) are rejected.
///
/// # Arguments
/// * `text` - Price text exactly as the user typed it
///
/// # Returns
/// The price as a finite, non-negative `f64` (`-0` comes back as `0.0`)
///
/// # Errors
/// Returns [`ValidationError::InvalidPrice`] if the text is not an acceptable price.
pub fn parse_price(text: &str) -> Result<f64, ValidationError> {
    let price: f64 = text
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidPrice)?;
    if !price.is_finite() || price < 0.0 {
        return Err(ValidationError::InvalidPrice);
    }

    // -0.0 passes the sign check; store it as 0.0
    Ok(price + 0.0)
}
