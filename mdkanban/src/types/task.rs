//! Task types: Task, Priority

use super::ids::TaskId;
use crate::error::KanbanError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority level of a task
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    Highest,
    High,
    #[default]
    Medium,
    Low,
    Lowest,
}

impl Priority {
    /// All levels, highest first
    pub const ALL: [Priority; 5] = [
        Priority::Highest,
        Priority::High,
        Priority::Medium,
        Priority::Low,
        Priority::Lowest,
    ];

    /// Canonical name as written in the `[Priority: ...]` tag
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Highest => "Highest",
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::Lowest => "Lowest",
        }
    }

    /// Match a level name case-insensitively, ignoring surrounding whitespace
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value))
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = KanbanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            KanbanError::invalid_value(
                "priority",
                format!("'{s}' is not one of Highest, High, Medium, Low, Lowest"),
            )
        })
    }
}

/// A single checklist item on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: TaskId,
    pub text: String,
    #[serde(default)]
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,

    /// Free-form notes; line breaks are significant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    /// Ordered comments. Absent rather than empty when there are none.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "non_empty_comments"
    )]
    comments: Option<Vec<String>>,
}

fn non_empty_comments<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let comments = Option::<Vec<String>>::deserialize(deserializer)?;
    Ok(comments.filter(|c| !c.is_empty()))
}

impl Task {
    /// Create a task with no id yet, not done, at medium priority
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            id: TaskId::default(),
            text: text.into(),
            done: false,
            priority: Priority::default(),
            notes: None,
            comments: None,
        }
    }

    /// Set the id
    pub fn with_id(mut self, id: impl Into<TaskId>) -> Self {
        self.id = id.into();
        self
    }

    /// Set the priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the done flag
    pub fn with_done(mut self, done: bool) -> Self {
        self.done = done;
        self
    }

    /// Set the notes. Empty notes are stored as absent.
    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.set_notes(Some(notes.into()));
        self
    }

    /// Set the comments. An empty list is stored as absent.
    pub fn with_comments<I, S>(mut self, comments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let comments: Vec<String> = comments.into_iter().map(Into::into).collect();
        self.comments = (!comments.is_empty()).then_some(comments);
        self
    }

    /// Replace the notes, normalizing an empty string to absent
    pub fn set_notes(&mut self, notes: Option<String>) {
        self.notes = notes.filter(|n| !n.is_empty());
    }

    /// Append a line to the notes
    pub fn push_note_line(&mut self, line: &str) {
        match self.notes.as_mut() {
            Some(notes) => {
                notes.push('\n');
                notes.push_str(line);
            }
            None => self.notes = Some(line.to_string()),
        }
    }

    /// The comment list, or `None` when the task has no comments
    pub fn comments(&self) -> Option<&[String]> {
        self.comments.as_deref()
    }

    /// Append a comment, creating the list if needed
    pub fn add_comment(&mut self, comment: impl Into<String>) {
        self.comments.get_or_insert_with(Vec::new).push(comment.into());
    }

    /// Replace the comment at `index`. Returns false if there is no such comment.
    pub fn update_comment(&mut self, index: usize, comment: impl Into<String>) -> bool {
        match self.comments.as_mut().and_then(|c| c.get_mut(index)) {
            Some(slot) => {
                *slot = comment.into();
                true
            }
            None => false,
        }
    }

    /// Remove the comment at `index`. Returns false if there is no such comment.
    ///
    /// Removing the last comment clears the list to absent.
    pub fn remove_comment(&mut self, index: usize) -> bool {
        let Some(comments) = self.comments.as_mut() else {
            return false;
        };
        if index >= comments.len() {
            return false;
        }
        comments.remove(index);
        if comments.is_empty() {
            self.comments = None;
        }
        true
    }
}
