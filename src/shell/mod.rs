//! Shell layer - the line-based terminal front-end for the menu editor.
//!
//! The shell reads one command per line, pushes field edits into a
//! [`MenuEditor`], asks for confirmation before remove and clear, and renders
//! the menu after every change. It is generic over its input and output so it
//! can be driven from tests.

/// Terminal command parsing
pub mod commands;
/// Yes/no confirmation prompt
pub mod prompt;
/// Screen rendering
pub mod render;

use crate::{config::DisplayConfig, core::MenuEditor, entities::MenuEntry, errors::Result};
use commands::{Command, parse_command};
use prompt::LineConfirm;
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument};

/// Whether the read loop keeps going after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// Terminal session over one editor.
pub struct Shell<R, W> {
    input: R,
    output: W,
    editor: MenuEditor,
    display: DisplayConfig,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a session with an empty draft and menu.
    pub fn new(input: R, output: W, display: DisplayConfig) -> Self {
        Self {
            input,
            output,
            editor: MenuEditor::new(),
            display,
        }
    }

    /// The editor driven by this session.
    pub const fn editor(&self) -> &MenuEditor {
        &self.editor
    }

    /// Consumes the session, returning its output stream.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs the read loop until `quit` or end of input.
    ///
    /// Bad commands and validation failures are reported on screen and the
    /// loop continues. Bytes that are not valid UTF-8 are replaced with
    /// U+FFFD rather than ending the session.
    ///
    /// # Errors
    /// Returns an error only if reading input or writing output fails.
    #[instrument(skip_all)]
    pub fn run(&mut self) -> Result<()> {
        render::render_header(&mut self.output, &self.display)?;
        render::render_menu(&mut self.output, self.editor.entries(), &self.display)?;
        writeln!(self.output, "Type 'help' for the list of commands.")?;

        let mut buf = Vec::new();
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            buf.clear();
            if self.input.read_until(b'\n', &mut buf)? == 0 {
                debug!("End of input");
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let flow = match parse_command(&line) {
                Ok(Some(command)) => self.execute(command)?,
                Ok(None) => Flow::Continue,
                Err(e) => {
                    writeln!(self.output, "{e}")?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!("Session ended with {} menu items", self.editor.count());
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<Flow> {
        match command {
            Command::Edit(edit) => self.editor.edit(edit),
            Command::Add => match self.editor.submit() {
                Ok(entry) => {
                    writeln!(self.output, "Added \"{}\".", entry.name())?;
                    self.show_menu()?;
                }
                Err(e) => writeln!(self.output, "Validation: {e}")?,
            },
            Command::Remove(position) => self.remove_at(position)?,
            Command::Clear => {
                let Self {
                    input,
                    output,
                    editor,
                    ..
                } = &mut *self;
                let decision = editor.clear(&mut LineConfirm::new(input, output));
                if decision.is_confirmed() {
                    self.show_menu()?;
                } else {
                    writeln!(self.output, "Cancelled.")?;
                }
            }
            Command::List => self.show_menu()?,
            Command::Draft => render::render_draft(&mut self.output, self.editor.draft())?,
            Command::Courses => render::render_courses(&mut self.output)?,
            Command::Help => render::render_help(&mut self.output)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn remove_at(&mut self, position: usize) -> Result<()> {
        let Some(id) = position
            .checked_sub(1)
            .and_then(|index| self.editor.entries().get(index))
            .map(MenuEntry::id)
        else {
            writeln!(self.output, "No menu item at position {position}.")?;
            return Ok(());
        };

        let Self {
            input,
            output,
            editor,
            ..
        } = &mut *self;
        let decision = editor.remove(id, &mut LineConfirm::new(input, output));
        if decision.is_confirmed() {
            self.show_menu()?;
        } else {
            writeln!(self.output, "Cancelled.")?;
        }
        Ok(())
    }

    fn show_menu(&mut self) -> Result<()> {
        render::render_menu(&mut self.output, self.editor.entries(), &self.display)?;
        Ok(())
    }
}
