//! Markdown text → [`Board`]

use super::tags::split_tags;
use crate::ids::IdGenerator;
use crate::types::{Board, Column, Priority, Task, TaskId};
use std::collections::HashSet;
use tracing::{trace, warn};

/// Indentation that marks a note line
pub(crate) const NOTE_INDENT: &str = "    ";

/// Result of parsing board text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedBoard {
    pub board: Board,
    /// Ids were generated while parsing (missing or duplicated in the text).
    /// The caller should write the board back so the ids become stable.
    pub ids_generated: bool,
}

/// Parse board text.
///
/// Grammar:
/// - `## Name` starts a column. If the heading carries no name, the next
///   non-blank line is taken as the name.
/// - `- [ ] tail` / `- [x] tail` is a task; the tail carries the text and tags.
/// - Lines indented by four spaces directly after a task (or its previous
///   note line) are note lines.
///
/// Everything else, including text before the first heading, is dropped.
pub fn parse(text: &str, ids: &dyn IdGenerator) -> ParsedBoard {
    let mut parser = Parser::new(ids);
    for line in text.lines() {
        parser.line(line);
    }
    parser.finish()
}

struct Parser<'a> {
    ids: &'a dyn IdGenerator,
    columns: Vec<Column>,
    /// Index into `columns` of the column being filled
    current: Option<usize>,
    /// A heading with no name was seen; the next non-blank line names the column
    awaiting_name: bool,
    /// The previous line was a task or one of its notes
    in_task: bool,
    seen_ids: HashSet<TaskId>,
    ids_generated: bool,
}

impl<'a> Parser<'a> {
    fn new(ids: &'a dyn IdGenerator) -> Self {
        Self {
            ids,
            columns: Vec::new(),
            current: None,
            awaiting_name: false,
            in_task: false,
            seen_ids: HashSet::new(),
            ids_generated: false,
        }
    }

    fn line(&mut self, line: &str) {
        if let Some(rest) = heading(line) {
            self.in_task = false;
            self.current = None;
            let name = rest.trim();
            if name.is_empty() {
                self.awaiting_name = true;
            } else {
                self.open_column(name);
            }
            return;
        }

        if self.awaiting_name {
            let name = line.trim();
            if !name.is_empty() {
                self.open_column(name);
            }
            return;
        }

        let Some(column) = self.current else {
            trace!(line, "dropping line outside any column");
            return;
        };

        if let Some((done, tail)) = checklist(line) {
            let task = self.task(done, tail);
            self.columns[column].tasks.push(task);
            self.in_task = true;
            return;
        }

        if self.in_task {
            if let Some(note) = line.strip_prefix(NOTE_INDENT) {
                if let Some(task) = self.columns[column].tasks.last_mut() {
                    task.push_note_line(note);
                }
                return;
            }
        }

        self.in_task = false;
    }

    fn open_column(&mut self, name: &str) {
        self.awaiting_name = false;
        let index = match self.columns.iter().position(|c| c.name == name) {
            Some(index) => {
                warn!(column = name, "duplicate column heading, merging tasks");
                index
            }
            None => {
                self.columns.push(Column::new(name));
                self.columns.len() - 1
            }
        };
        self.current = Some(index);
    }

    fn task(&mut self, done: bool, tail: &str) -> Task {
        let tags = split_tags(tail);

        let priority = match tags.priority.as_deref() {
            None => Priority::default(),
            Some(value) => Priority::parse(value).unwrap_or_else(|| {
                warn!(value, "unknown priority, using Medium");
                Priority::default()
            }),
        };

        let id = match tags.id.map(TaskId::from) {
            Some(id) if !self.seen_ids.contains(&id) => id,
            Some(id) => {
                warn!(%id, "duplicate task id, assigning a new one");
                self.fresh_id()
            }
            None => self.fresh_id(),
        };
        self.seen_ids.insert(id.clone());

        let task = Task::new(tags.text)
            .with_id(id)
            .with_done(done)
            .with_priority(priority);
        match tags.comments {
            Some(comments) => task.with_comments(comments),
            None => task,
        }
    }

    /// Generate an id not yet used on this board
    fn fresh_id(&mut self) -> TaskId {
        self.ids_generated = true;
        loop {
            let id = self.ids.generate();
            if !self.seen_ids.contains(&id) {
                return id;
            }
            trace!(%id, "generated id already on the board, retrying");
        }
    }

    fn finish(self) -> ParsedBoard {
        let board = self
            .columns
            .into_iter()
            .map(|mut column| {
                for task in &mut column.tasks {
                    // a lone blank note line leaves an empty string behind
                    let notes = task.notes.take();
                    task.set_notes(notes);
                }
                column
            })
            .fold(Board::new(), Board::with_column);

        ParsedBoard {
            board,
            ids_generated: self.ids_generated,
        }
    }
}

/// Match `##` followed by whitespace or end of line, returning the rest
fn heading(line: &str) -> Option<&str> {
    let rest = line.strip_prefix("##")?;
    if rest.is_empty() || rest.starts_with(char::is_whitespace) {
        Some(rest)
    } else {
        None
    }
}

/// Match `- [ ]` / `- [x]`, returning the done flag and the tail
fn checklist(line: &str) -> Option<(bool, &str)> {
    let rest = line.strip_prefix("- [")?;
    let done = match rest.as_bytes().first()? {
        b' ' => false,
        b'x' => true,
        _ => return None,
    };
    let tail = rest[1..].strip_prefix(']')?;
    Some((done, tail.strip_prefix(' ').unwrap_or(tail)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;

    fn parse_text(text: &str) -> ParsedBoard {
        parse(text, &SequentialIds::new("gen"))
    }

    #[test]
    fn test_empty_columns() {
        let parsed = parse_text("## Todo\n\n## In Progress\n\n## Done\n\n");
        assert_eq!(
            parsed.board.column_names(),
            vec!["Todo", "In Progress", "Done"]
        );
        assert_eq!(parsed.board.task_count(), 0);
        assert!(!parsed.ids_generated);
    }

    #[test]
    fn test_task_line() {
        let parsed =
            parse_text("## Todo\n- [x] Ship it [id: a1] [Priority: Highest] [Comments: ok | go]\n");
        let task = &parsed.board.tasks_in("Todo")[0];
        assert_eq!(task.id, "a1");
        assert_eq!(task.text, "Ship it");
        assert!(task.done);
        assert_eq!(task.priority, Priority::Highest);
        assert_eq!(
            task.comments(),
            Some(&["ok".to_string(), "go".to_string()][..])
        );
        assert!(!parsed.ids_generated);
    }

    #[test]
    fn test_missing_id_is_generated() {
        let parsed = parse_text("## Todo\n- [ ] first\n- [ ] second [id: keep]\n");
        let tasks = parsed.board.tasks_in("Todo");
        assert_eq!(tasks[0].id, "gen-1");
        assert_eq!(tasks[1].id, "keep");
        assert_eq!(tasks[0].priority, Priority::Medium);
        assert!(parsed.ids_generated);
    }

    #[test]
    fn test_duplicate_id_is_replaced() {
        let parsed = parse_text("## A\n- [ ] one [id: x]\n## B\n- [ ] two [id: x]\n");
        assert_eq!(parsed.board.tasks_in("A")[0].id, "x");
        assert_eq!(parsed.board.tasks_in("B")[0].id, "gen-1");
        assert!(parsed.ids_generated);
    }

    #[test]
    fn test_generated_id_skips_ids_in_text() {
        let parsed = parse_text("## Todo\n- [ ] a [id: gen-1]\n- [ ] b\n");
        let tasks = parsed.board.tasks_in("Todo");
        assert_eq!(tasks[0].id, "gen-1");
        assert_eq!(tasks[1].id, "gen-2");
    }

    #[test]
    fn test_uppercase_x_is_not_a_task() {
        let parsed = parse_text("## Todo\n- [X] shouted [id: 1]\n- [x] done [id: 2]\n");
        let tasks = parsed.board.tasks_in("Todo");
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].id, "2");
    }

    #[test]
    fn test_unknown_priority_falls_back_to_medium() {
        let parsed = parse_text("## A\n- [ ] t [id: 1] [Priority: urgent]\n");
        assert_eq!(parsed.board.tasks_in("A")[0].priority, Priority::Medium);
    }

    #[test]
    fn test_notes() {
        let text = "## Todo\n- [ ] t [id: 1]\n    Line 1\n      indented\n    \n    Line 4\nprose\n    not a note\n- [ ] u [id: 2]\n";
        let parsed = parse_text(text);
        let tasks = parsed.board.tasks_in("Todo");
        assert_eq!(
            tasks[0].notes.as_deref(),
            Some("Line 1\n  indented\n\nLine 4")
        );
        assert_eq!(tasks[1].notes, None);
    }

    #[test]
    fn test_blank_line_ends_notes() {
        let parsed = parse_text("## Todo\n- [ ] t [id: 1]\n    a\n\n    b\n");
        assert_eq!(parsed.board.tasks_in("Todo")[0].notes.as_deref(), Some("a"));
    }

    #[test]
    fn test_lone_blank_note_is_absent() {
        let parsed = parse_text("## Todo\n- [ ] t [id: 1]\n    \n");
        assert_eq!(parsed.board.tasks_in("Todo")[0].notes, None);
    }

    #[test]
    fn test_unrecognised_content_is_dropped() {
        let text = "# Title\nintro\n## Todo\nsome prose\n### Sub\n- [ ] t [id: 1]\n* bullet\n- [?] odd\n";
        let parsed = parse_text(text);
        assert_eq!(parsed.board.column_names(), vec!["Todo"]);
        assert_eq!(parsed.board.tasks_in("Todo").len(), 1);
    }

    #[test]
    fn test_heading_without_name_uses_next_line() {
        let parsed = parse_text("##\n\nBacklog\n- [ ] t [id: 1]\n");
        assert_eq!(parsed.board.column_names(), vec!["Backlog"]);
        assert_eq!(parsed.board.tasks_in("Backlog").len(), 1);
    }

    #[test]
    fn test_duplicate_heading_merges() {
        let parsed = parse_text("## A\n- [ ] 1 [id: 1]\n## B\n## A\n- [ ] 2 [id: 2]\n");
        assert_eq!(parsed.board.column_names(), vec!["A", "B"]);
        assert_eq!(parsed.board.tasks_in("A").len(), 2);
    }

    #[test]
    fn test_crlf_line_endings() {
        let parsed = parse_text("## Todo\r\n- [x] t [id: 1]\r\n    note\r\n");
        let task = &parsed.board.tasks_in("Todo")[0];
        assert_eq!(task.text, "t");
        assert_eq!(task.notes.as_deref(), Some("note"));
    }

    #[test]
    fn test_checklist_matcher() {
        assert_eq!(checklist("- [ ] a"), Some((false, "a")));
        assert_eq!(checklist("- [x] a"), Some((true, "a")));
        assert_eq!(checklist("- [X] a"), None);
        assert_eq!(checklist("- [ ]"), Some((false, "")));
        assert_eq!(checklist("- [] a"), None);
        assert_eq!(checklist("  - [ ] a"), None);
        assert_eq!(checklist("- a"), None);
    }

    #[test]
    fn test_heading_matcher() {
        assert_eq!(heading("## Todo"), Some(" Todo"));
        assert_eq!(heading("##\tTodo"), Some("\tTodo"));
        assert_eq!(heading("##"), Some(""));
        assert_eq!(heading("###"), None);
        assert_eq!(heading("##Todo"), None);
        assert_eq!(heading("# Todo"), None);
    }
}
