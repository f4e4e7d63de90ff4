//! Line-oriented admin shell driving a [`CatalogEditor`].

use std::io::{BufRead, Write};

use anyhow::Result;
use catalog_core::{render_text, CatalogEditor, Confirm, DeleteOutcome};
use clap::{Parser, Subcommand};
use shared::{
    domain::{ProductField, ProductId},
    error::CatalogError,
};
use storage::{RecordStore, UpsertOutcome};

/// One shell input line.
#[derive(Parser, Debug)]
#[command(name = "catalog-admin", no_binary_name = true, disable_version_flag = true)]
struct ShellLine {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Show the listings table.
    #[command(visible_alias = "ls")]
    List,
    /// Open the form for a new listing.
    #[command(visible_alias = "add")]
    New,
    /// Open the form for an existing listing.
    Edit { id: ProductId },
    /// Change a field of the open form.
    Set {
        /// name, price, owner, category, description or image
        field: ProductField,
        /// New value; leave it out to clear the field.
        #[arg(num_args = 0.., trailing_var_arg = true, allow_hyphen_values = true)]
        value: Vec<String>,
    },
    /// Commit the open form.
    Save,
    /// Close the form without saving.
    #[command(visible_alias = "close")]
    Cancel,
    /// Delete a listing after confirmation.
    #[command(visible_alias = "rm")]
    Delete { id: ProductId },
    /// Show listing totals.
    Stats,
    /// Leave the shell.
    #[command(visible_alias = "exit")]
    Quit,
}

/// Parses one input line. Blank lines yield `None`; `help` comes back as a
/// [`clap::error::ErrorKind::DisplayHelp`] error carrying the help text.
pub fn parse_command(line: &str) -> Result<Option<Command>, clap::Error> {
    let words: Vec<&str> = line.split_whitespace().collect();
    if words.is_empty() {
        return Ok(None);
    }
    ShellLine::try_parse_from(words).map(|parsed| Some(parsed.command))
}

/// Reads the answer to a confirmation prompt from the shell's own input.
struct LinePrompt<'a, R, W> {
    input: &'a mut R,
    output: &'a mut W,
}

impl<R: BufRead, W: Write> Confirm for LinePrompt<'_, R, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.output, "{prompt} [y/N] ").is_err() || self.output.flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        match self.input.read_line(&mut answer) {
            Ok(0) | Err(_) => false,
            Ok(_) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
        }
    }
}

pub struct Shell<S, R, W> {
    editor: CatalogEditor<S>,
    input: R,
    output: W,
}

impl<S: RecordStore, R: BufRead, W: Write> Shell<S, R, W> {
    pub fn new(editor: CatalogEditor<S>, input: R, output: W) -> Self {
        Self {
            editor,
            input,
            output,
        }
    }

    pub fn editor(&self) -> &CatalogEditor<S> {
        &self.editor
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn run(&mut self) -> Result<()> {
        self.print_view()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }

            match parse_command(&line) {
                Ok(None) => {}
                Ok(Some(Command::Quit)) => break,
                Ok(Some(command)) => {
                    if let Err(err) = self.execute(command) {
                        tracing::debug!(code = ?err.code, "command rejected");
                        writeln!(self.output, "error: {}", err.message)?;
                    }
                }
                Err(err) => {
                    tracing::debug!(kind = ?err.kind(), "line not parsed");
                    write!(self.output, "{}", err.render())?;
                }
            }
        }
        Ok(())
    }

    fn execute(&mut self, command: Command) -> Result<(), CatalogError> {
        match command {
            Command::List => {}
            Command::New => {
                self.editor.add_new()?;
            }
            Command::Edit { id } => self.editor.edit(id)?,
            Command::Set { field, value } => self.editor.set_field(field, &value.join(" "))?,
            Command::Save => {
                let message = match self.editor.save()? {
                    UpsertOutcome::Inserted => "listing added",
                    UpsertOutcome::Updated { .. } => "listing updated",
                };
                self.say(message)?;
            }
            Command::Cancel => self.editor.cancel(),
            Command::Delete { id } => {
                let mut prompt = LinePrompt {
                    input: &mut self.input,
                    output: &mut self.output,
                };
                let message = match self.editor.delete(id, &mut prompt)? {
                    DeleteOutcome::Deleted(_) => "listing deleted",
                    DeleteOutcome::Missing => "no listing with that id",
                    DeleteOutcome::Declined => "delete cancelled",
                };
                self.say(message)?;
            }
            Command::Stats => {
                let stats = self.editor.stats();
                let label = self.editor.labels().total_listings;
                return self.say(&format!("{label}: {}", stats.total_listings));
            }
            Command::Quit => return Ok(()),
        }
        self.print_view()
    }

    fn say(&mut self, message: &str) -> Result<(), CatalogError> {
        writeln!(self.output, "{message}").map_err(io_error)
    }

    fn print_view(&mut self) -> Result<(), CatalogError> {
        let text = render_text(&self.editor.view());
        write!(self.output, "{text}").map_err(io_error)
    }
}

fn io_error(err: std::io::Error) -> CatalogError {
    CatalogError::internal(format!("failed to write output: {err}"))
}

#[cfg(test)]
#[path = "tests/shell_tests.rs"]
mod tests;
