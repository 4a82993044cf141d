//! Terminal command parsing.
//!
//! Each input line is one command. Field commands take the rest of the line,
//! as typed, as the new field value.

use crate::{
    core::FieldEdit,
    entities::Course,
    errors::{Error, Result},
};

/// A parsed terminal command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replace a draft field
    Edit(FieldEdit),
    /// Commit the draft to the menu
    Add,
    /// Remove the item at a 1-based list position
    Remove(usize),
    /// Remove every item
    Clear,
    /// Show the menu
    List,
    /// Show the draft
    Draft,
    /// Show the available courses
    Courses,
    /// Show the command summary
    Help,
    /// Leave the program
    Quit,
}

/// Parses one line of input. Blank lines yield `None`.
///
/// # Errors
/// Returns an error for unknown commands, unknown course names and item
/// numbers that are not positive integers.
pub fn parse_command(line: &str) -> Result<Option<Command>> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = line
        .split_once(char::is_whitespace)
        .unwrap_or((line, ""));

    let command = match word.to_ascii_lowercase().as_str() {
        "name" => Command::Edit(FieldEdit::Name(rest.to_string())),
        "desc" | "description" => Command::Edit(FieldEdit::Description(rest.to_string())),
        "course" => Command::Edit(FieldEdit::Course(rest.parse::<Course>()?)),
        "price" => Command::Edit(FieldEdit::PriceText(rest.to_string())),
        "add" => Command::Add,
        "remove" | "rm" => Command::Remove(parse_position(rest)?),
        "clear" => Command::Clear,
        "list" | "ls" => Command::List,
        "draft" => Command::Draft,
        "courses" => Command::Courses,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ => {
            return Err(Error::UnknownCommand {
                command: word.to_string(),
            });
        }
    };

    Ok(Some(command))
}

fn parse_position(text: &str) -> Result<usize> {
    let text = text.trim();
    match text.parse::<usize>() {
        Ok(position) if position > 0 => Ok(position),
        _ => Err(Error::InvalidPosition {
            text: text.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    fn parse(line: &str) -> Command {
        parse_command(line).unwrap().unwrap()
    }

    #[test]
    fn test_field_commands_keep_text_as_typed() {
        assert_eq!(
            parse("name Lemon Chicken"),
            Command::Edit(FieldEdit::Name("Lemon Chicken".to_string()))
        );
        assert_eq!(
            parse("desc  Zesty "),
            Command::Edit(FieldEdit::Description(" Zesty ".to_string()))
        );
        assert_eq!(
            parse("price 49.99\n"),
            Command::Edit(FieldEdit::PriceText("49.99".to_string()))
        );
        assert_eq!(parse("name"), Command::Edit(FieldEdit::Name(String::new())));
    }

    #[test]
    fn test_course_command() {
        assert_eq!(
            parse("course dessert"),
            Command::Edit(FieldEdit::Course(Course::Dessert))
        );
        assert!(matches!(
            parse_command("course Brunch").unwrap_err(),
            Error::UnknownCourse { .. }
        ));
    }

    #[test]
    fn test_simple_commands() {
        assert_eq!(parse("add"), Command::Add);
        assert_eq!(parse("  ADD  "), Command::Add);
        assert_eq!(parse("clear"), Command::Clear);
        assert_eq!(parse("list"), Command::List);
        assert_eq!(parse("draft"), Command::Draft);
        assert_eq!(parse("courses"), Command::Courses);
        assert_eq!(parse("help"), Command::Help);
        assert_eq!(parse("exit"), Command::Quit);
    }

    #[test]
    fn test_remove_positions() {
        assert_eq!(parse("remove 2"), Command::Remove(2));
        assert_eq!(parse("rm 1"), Command::Remove(1));

        for bad in ["remove", "remove 0", "remove -1", "remove two"] {
            assert!(
                matches!(parse_command(bad).unwrap_err(), Error::InvalidPosition { .. }),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_blank_and_unknown_lines() {
        assert!(parse_command("").unwrap().is_none());
        assert!(parse_command("   \n").unwrap().is_none());
        assert!(matches!(
            parse_command("fly away").unwrap_err(),
            Error::UnknownCommand { command } if command == "fly"
        ));
    }
}
