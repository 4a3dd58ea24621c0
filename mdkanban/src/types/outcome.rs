//! Result shape of tolerant, position-addressed mutations

use serde::Serialize;

/// Whether a tolerant mutation changed the board.
///
/// `Unchanged` is not an error: it is returned when the addressed column,
/// task or comment does not exist, and nothing is written to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    /// The board was mutated and persisted
    Applied,
    /// The request addressed nothing; board and storage are untouched
    Unchanged,
}

impl Outcome {
    /// True if the board was mutated
    pub fn is_applied(self) -> bool {
        matches!(self, Self::Applied)
    }
}

impl From<bool> for Outcome {
    fn from(applied: bool) -> Self {
        if applied {
            Self::Applied
        } else {
            Self::Unchanged
        }
    }
}
