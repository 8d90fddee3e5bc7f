//! Writing tables, notifications and the activity log to the terminal.

use std::io::Write;

use crate::error::ConsoleError;
use crate::types::{ActivityEntry, BookRow, OutputFormat};

pub const EMPTY_TABLE: &str = "No books found in records.";

const HEADERS: [&str; 5] = ["ID", "Title", "Author", "Qty", "Status"];

pub fn write_table<W: Write>(
    out: &mut W,
    rows: &[BookRow],
    format: OutputFormat,
) -> Result<(), ConsoleError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, rows)?;
            writeln!(out)?;
        }
        OutputFormat::Table => write_text_table(out, rows)?,
    }
    Ok(())
}

fn write_text_table<W: Write>(out: &mut W, rows: &[BookRow]) -> Result<(), ConsoleError> {
    if rows.is_empty() {
        writeln!(out, "{EMPTY_TABLE}")?;
        return Ok(());
    }

    let cells: Vec<[String; 5]> = rows
        .iter()
        .map(|row| {
            [
                row.id.clone(),
                row.title.clone(),
                row.author.clone(),
                row.quantity.to_string(),
                row.status.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for line in &cells {
        for (width, cell) in widths.iter_mut().zip(line) {
            *width = (*width).max(cell.chars().count());
        }
    }

    write_row(out, &HEADERS.map(str::to_string), &widths)?;
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    writeln!(out, "{}", rule.join("-+-"))?;
    for line in &cells {
        write_row(out, line, &widths)?;
    }
    Ok(())
}

fn write_row<W: Write>(out: &mut W, cells: &[String; 5], widths: &[usize; 5]) -> std::io::Result<()> {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    writeln!(out, "{}", padded.join(" | ").trim_end())
}

pub fn write_activity<W: Write>(
    out: &mut W,
    entries: &[ActivityEntry],
    format: OutputFormat,
) -> Result<(), ConsoleError> {
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, entries)?;
            writeln!(out)?;
        }
        OutputFormat::Table => {
            if entries.is_empty() {
                writeln!(out, "No activity yet.")?;
            }
            for entry in entries {
                writeln!(
                    out,
                    "#{:<3} {} {:<8} {}",
                    entry.sequence,
                    entry.occurred_at.format("%H:%M:%S"),
                    entry.book_id,
                    entry.summary
                )?;
            }
        }
    }
    Ok(())
}

pub const HELP: &str = "\
Commands:
  list                     show every book
  search [text]            filter by id, title or author (ignores case)
  add [id|title|author|qty]
  issue [id|student]
  return [id]
  delete [id]
  activity                 changes made this session
  help                     this text
  quit                     leave
Fields left off a command are prompted for; type :cancel to close a form.";

#[cfg(test)]
mod tests {
    use super::*;

    fn row(id: &str, title: &str, quantity: u64) -> BookRow {
        BookRow {
            id: id.to_string(),
            title: title.to_string(),
            author: "Author".to_string(),
            quantity,
            status: if quantity > 0 { "Available" } else { "Out of Stock" },
        }
    }

    fn render(rows: &[BookRow], format: OutputFormat) -> String {
        let mut out = Vec::new();
        write_table(&mut out, rows, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn empty_table_shows_placeholder() {
        assert_eq!(render(&[], OutputFormat::Table), "No books found in records.\n");
    }

    #[test]
    fn text_table_aligns_columns() {
        let text = render(&[row("B-1", "Dune", 2), row("B-22", "It", 0)], OutputFormat::Table);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "ID   | Title | Author | Qty | Status");
        assert_eq!(lines[2], "B-1  | Dune  | Author | 2   | Available");
        assert_eq!(lines[3], "B-22 | It    | Author | 0   | Out of Stock");
    }

    #[test]
    fn json_table_is_an_array_of_rows() {
        let text = render(&[row("B-1", "Dune", 0)], OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value[0]["id"], "B-1");
        assert_eq!(value[0]["status"], "Out of Stock");
        assert_eq!(value[0]["quantity"], 0);
    }
}
