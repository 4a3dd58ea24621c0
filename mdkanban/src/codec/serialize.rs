//! [`Board`] → Markdown text

use super::parse::NOTE_INDENT;
use crate::types::{Board, Task};
use std::fmt::Write;

/// Serialize a board to its canonical text.
///
/// Tags are always written in the order id, Priority, Comments, whatever
/// order they had when read. Each column is followed by a blank line.
pub fn serialize(board: &Board) -> String {
    let mut out = String::new();
    for column in board.columns() {
        let _ = writeln!(out, "## {}", single_line(&column.name));
        for task in &column.tasks {
            write_task(&mut out, task);
        }
        out.push('\n');
    }
    out
}

fn write_task(out: &mut String, task: &Task) {
    let _ = write!(
        out,
        "- [{}] {} [id: {}] [Priority: {}]",
        if task.done { 'x' } else { ' ' },
        single_line(&task.text),
        task.id,
        task.priority
    );
    if let Some(comments) = task.comments() {
        let comments: Vec<String> = comments.iter().map(|c| single_line(c)).collect();
        let _ = write!(out, " [Comments: {}]", comments.join(" | "));
    }
    out.push('\n');

    if let Some(notes) = task.notes.as_deref() {
        for line in notes.split('\n') {
            out.push_str(NOTE_INDENT);
            out.push_str(line.strip_suffix('\r').unwrap_or(line));
            out.push('\n');
        }
    }
}

/// Single-line fields would split the task line; fold line breaks into spaces
fn single_line(s: &str) -> String {
    let is_break = |c: char| c == '\n' || c == '\r';
    if s.contains(is_break) {
        s.split(is_break)
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        s.to_string()
    }
}
