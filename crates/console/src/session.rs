//! Line-oriented interaction loop.
//!
//! A session reads commands from any `BufRead` and writes to any `Write`, so
//! the same loop serves an interactive terminal, a script file and tests.

use std::io::{BufRead, Write};

use crate::commands::AppState;
use crate::error::ConsoleError;
use crate::forms::{self, FormKind, Submission};
use crate::notify::Toast;
use crate::render;
use crate::types::{BookRow, OutputFormat};

/// A parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConsoleCommand {
    List,
    Search(String),
    Open(FormKind, Vec<String>),
    Activity,
    Help,
    Quit,
    Blank,
    Unknown(String),
}

impl ConsoleCommand {
    pub fn parse(line: &str) -> Self {
        // Only the separator after the verb is consumed: a search query keeps
        // its own spaces.
        let line = line.trim_start();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" => ConsoleCommand::Blank,
            "list" | "ls" => ConsoleCommand::List,
            "search" | "find" => ConsoleCommand::Search(rest.to_string()),
            "add" => ConsoleCommand::Open(FormKind::AddBook, forms::split_inline(rest)),
            "issue" => ConsoleCommand::Open(FormKind::IssueBook, forms::split_inline(rest)),
            "return" => ConsoleCommand::Open(FormKind::ReturnBook, forms::split_inline(rest)),
            "delete" | "rm" => ConsoleCommand::Open(FormKind::DeleteBook, forms::split_inline(rest)),
            "activity" => ConsoleCommand::Activity,
            "help" | "?" => ConsoleCommand::Help,
            "quit" | "exit" => ConsoleCommand::Quit,
            other => ConsoleCommand::Unknown(other.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct Session<R, W> {
    state: AppState,
    input: R,
    output: W,
    format: OutputFormat,
}

impl<R, W> Session<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(state: AppState, input: R, output: W, format: OutputFormat) -> Self {
        Self {
            state,
            input,
            output,
            format,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Show the catalog, then process commands until `quit` or end of input.
    pub fn run(&mut self) -> Result<(), ConsoleError> {
        self.show_all()?;
        loop {
            write!(self.output, "> ")?;
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                writeln!(self.output)?;
                break;
            };
            if self.handle_line(&line)? == Flow::Quit {
                break;
            }
        }
        tracing::debug!("session finished");
        Ok(())
    }

    pub fn handle_line(&mut self, line: &str) -> Result<Flow, ConsoleError> {
        let command = ConsoleCommand::parse(line);
        tracing::trace!(?command, "console command");

        match command {
            ConsoleCommand::Blank => {}
            ConsoleCommand::List => self.show_all()?,
            ConsoleCommand::Search(query) => {
                let rows: Vec<BookRow> = self.state.search(&query).map(BookRow::from).collect();
                render::write_table(&mut self.output, &rows, self.format)?;
            }
            ConsoleCommand::Open(kind, inline) => self.open_form(kind, inline)?,
            ConsoleCommand::Activity => {
                let format = self.format;
                render::write_activity(&mut self.output, self.state.activity(), format)?;
            }
            ConsoleCommand::Help => writeln!(self.output, "{}", render::HELP)?,
            ConsoleCommand::Quit => return Ok(Flow::Quit),
            ConsoleCommand::Unknown(verb) => {
                let toast = Toast::error(format!("Error: Unknown command '{verb}'. Type help."));
                writeln!(self.output, "{toast}")?;
            }
        }
        Ok(Flow::Continue)
    }

    fn open_form(&mut self, kind: FormKind, inline: Vec<String>) -> Result<(), ConsoleError> {
        if let Err(err) = kind.check_inline(&inline) {
            writeln!(self.output, "{}", Toast::error(format!("Error: {err}.")))?;
            return Ok(());
        }

        let Some(values) = self.fill_form(kind, inline)? else {
            writeln!(self.output, "{} cancelled.", kind.title())?;
            return Ok(());
        };

        let submission = Submission::from_values(kind, &values)?;
        let toast = self.state.submit(submission);
        writeln!(self.output, "{toast}")?;

        // Successful changes redraw the whole catalog, dropping any filter.
        if toast.is_success() {
            self.show_all()?;
        }
        Ok(())
    }

    /// Collect a value for every field, prompting for anything not given
    /// inline and re-prompting after an invalid entry. `None` means the form
    /// was closed.
    fn fill_form(
        &mut self,
        kind: FormKind,
        inline: Vec<String>,
    ) -> Result<Option<Vec<String>>, ConsoleError> {
        let mut inline = inline.into_iter();
        let mut values = Vec::with_capacity(kind.fields().len());

        for field in kind.fields() {
            let mut candidate = inline.next().filter(|v| !v.is_empty());
            let value = loop {
                let raw = match candidate.take() {
                    Some(raw) => raw,
                    None => {
                        write!(self.output, "{}: ", field.label)?;
                        self.output.flush()?;
                        match self.read_line()? {
                            Some(line) if line.trim() == forms::CANCEL => return Ok(None),
                            Some(line) => line,
                            None => return Ok(None),
                        }
                    }
                };
                match field.validate(&raw) {
                    Ok(value) => break value,
                    Err(err) => {
                        writeln!(self.output, "{}", Toast::error(format!("Error: {err}.")))?;
                    }
                }
            };
            values.push(value);
        }
        Ok(Some(values))
    }

    fn show_all(&mut self) -> Result<(), ConsoleError> {
        let rows: Vec<BookRow> = self.state.list_all().iter().map(BookRow::from).collect();
        render::write_table(&mut self.output, &rows, self.format)
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        while line.ends_with('\n') || line.ends_with('\r') {
            line.pop();
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_verbs_and_inline_values() {
        assert_eq!(ConsoleCommand::parse("  LIST "), ConsoleCommand::List);
        assert_eq!(
            ConsoleCommand::parse("search  clean code "),
            ConsoleCommand::Search(" clean code ".to_string())
        );
        assert_eq!(ConsoleCommand::parse("search t "), ConsoleCommand::Search("t ".to_string()));
        assert_eq!(ConsoleCommand::parse("search "), ConsoleCommand::Search(String::new()));
        assert_eq!(ConsoleCommand::parse("search"), ConsoleCommand::Search(String::new()));
        assert_eq!(
            ConsoleCommand::parse("issue B-101 | Alice"),
            ConsoleCommand::Open(
                FormKind::IssueBook,
                vec!["B-101".to_string(), "Alice".to_string()]
            )
        );
        assert_eq!(ConsoleCommand::parse("return"), ConsoleCommand::Open(FormKind::ReturnBook, vec![]));
        assert_eq!(ConsoleCommand::parse(""), ConsoleCommand::Blank);
        assert_eq!(
            ConsoleCommand::parse("borrow x"),
            ConsoleCommand::Unknown("borrow".to_string())
        );
    }
}
