//! Screen rendering for the terminal front-end.
//!
//! All functions write to any `io::Write` so the output can be captured in
//! tests.

use crate::{
    config::DisplayConfig,
    core::DraftForm,
    entities::{Course, MenuEntry},
};
use std::io::{self, Write};

/// Shown in place of the list when the menu is empty
pub const EMPTY_MENU_TEXT: &str = "No menu items yet. Add one above.";

/// "1 item", "0 items", "2 items" ...
#[must_use]
pub fn count_label(count: usize) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} item{suffix}")
}

/// Price with the configured currency symbol and two decimals.
#[must_use]
pub fn format_price(currency_symbol: &str, price: f64) -> String {
    format!("{currency_symbol}{price:.2}")
}

/// Writes the screen title and subtitle.
pub fn render_header<W: Write>(out: &mut W, display: &DisplayConfig) -> io::Result<()> {
    writeln!(out, "{}", display.title)?;
    writeln!(out, "{}", display.subtitle)?;
    writeln!(out)
}

/// Writes the current menu: heading with count, then one card per entry.
pub fn render_menu<W: Write>(
    out: &mut W,
    entries: &[MenuEntry],
    display: &DisplayConfig,
) -> io::Result<()> {
    writeln!(out, "Current Menu ({})", count_label(entries.len()))?;

    if entries.is_empty() {
        return writeln!(out, "  {EMPTY_MENU_TEXT}");
    }

    for (position, entry) in entries.iter().enumerate() {
        writeln!(out, "  {}. {}", position + 1, entry.name())?;
        writeln!(
            out,
            "     {} • {}",
            entry.course(),
            format_price(&display.currency_symbol, entry.price())
        )?;
        if !entry.description().is_empty() {
            writeln!(out, "     {}", entry.description())?;
        }
    }
    Ok(())
}

/// Writes the draft values as currently typed.
pub fn render_draft<W: Write>(out: &mut W, draft: &DraftForm) -> io::Result<()> {
    writeln!(out, "Dish name:   {}", draft.name)?;
    writeln!(out, "Description: {}", draft.description)?;
    writeln!(out, "Course:      {}", draft.course)?;
    writeln!(out, "Price:       {}", draft.price_text)
}

/// Writes the course names in picker order.
pub fn render_courses<W: Write>(out: &mut W) -> io::Result<()> {
    let names = Course::ALL.map(Course::as_str);
    writeln!(out, "Courses: {}", names.join(", "))
}

/// Writes the command summary.
pub fn render_help<W: Write>(out: &mut W) -> io::Result<()> {
    let help_text = "Commands:\n\
        \x20 name <text>      Set the dish name\n\
        \x20 desc <text>      Set the description\n\
        \x20 course <course>  Choose Starter, Main, Dessert, Side or Drink\n\
        \x20 price <number>   Set the price, e.g. 49.99\n\
        \x20 add              Add the dish to the menu\n\
        \x20 remove <n>       Remove item number n from the menu\n\
        \x20 clear            Remove every item from the menu\n\
        \x20 list             Show the menu\n\
        \x20 draft            Show the dish being entered\n\
        \x20 courses          Show the available courses\n\
        \x20 help             Show this help\n\
        \x20 quit             Leave";
    writeln!(out, "{help_text}")
}
