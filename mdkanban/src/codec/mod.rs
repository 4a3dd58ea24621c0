//! Bidirectional codec between board text and [`crate::Board`]
//!
//! ```text
//! ## Todo
//! - [ ] Write tests [id: 3f2c...] [Priority: High] [Comments: soon | really]
//!     first note line
//!     second note line
//!
//! ## Done
//! - [x] Set up repo [id: 9a41...] [Priority: Medium]
//!
//! ```
//!
//! Parsing is lossy outside this grammar: prose, blank lines and other
//! heading levels are dropped. For boards whose text, notes and comments
//! contain no tag-shaped brackets, line breaks in single-line fields or `|`
//! in comments, `parse(serialize(board))` reproduces the board exactly.

mod parse;
mod serialize;
mod tags;

pub use parse::{parse, ParsedBoard};
pub use serialize::serialize;
pub use tags::{split_tags, TaskTags};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ids::SequentialIds;
    use crate::types::{Board, Column, Priority, Task};

    fn sample_board() -> Board {
        Board::new()
            .with_column(Column::new("Todo").with_tasks([
                Task::new("Write tests")
                    .with_id("1")
                    .with_priority(Priority::High)
                    .with_notes("Line 1\nLine 2"),
                Task::new("Refactor").with_id("2").with_comments(["later", "maybe"]),
            ]))
            .with_column(Column::new("In Progress"))
            .with_column(Column::new("Done").with_tasks([Task::new("Init")
                .with_id("3")
                .with_done(true)
                .with_priority(Priority::Lowest)]))
    }

    #[test]
    fn test_round_trip() {
        let board = sample_board();
        let parsed = parse(&serialize(&board), &SequentialIds::default());
        assert_eq!(parsed.board, board);
        assert!(!parsed.ids_generated);
    }

    #[test]
    fn test_serialize_is_canonical() {
        let messy = "## Todo\n\n\n- [ ] Write tests [Priority: high] [id: 1]\nstray prose\n## Done\n";
        let once = serialize(&parse(messy, &SequentialIds::default()).board);
        let twice = serialize(&parse(&once, &SequentialIds::default()).board);
        assert_eq!(once, "## Todo\n- [ ] Write tests [id: 1] [Priority: High]\n\n## Done\n\n");
        assert_eq!(once, twice);
    }
}
