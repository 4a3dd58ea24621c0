//! Bracket-tag extraction from the tail of a task line.
//!
//! A task tail looks like `Write docs [id: 42] [Priority: High] [Comments: a | b]`.
//! Tags are recognised by a single left-to-right scan: at each `[` the scanner
//! checks for one of the keywords `id`, `Priority` or `Comments` (any case)
//! followed by `:`, and takes the value up to the next `]`. Only the first tag
//! of each kind is consumed; later ones stay in the text. A consumed tag is
//! removed together with the whitespace in front of it.
//!
//! Literal `[id: ...]`-shaped text inside a task is indistinguishable from a
//! tag. The format has no escaping, so such text is consumed as a tag.

/// Tags found in a task tail, plus the remaining display text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskTags {
    /// Trimmed `[id: ...]` value, `None` if missing or blank
    pub id: Option<String>,
    /// Trimmed `[Priority: ...]` value, not yet validated
    pub priority: Option<String>,
    /// `[Comments: ...]` split on `|`, trimmed, empties dropped; `None` if nothing is left
    pub comments: Option<Vec<String>>,
    /// Tail with consumed tags removed, trimmed
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TagKind {
    Id,
    Priority,
    Comments,
}

impl TagKind {
    const ALL: [TagKind; 3] = [TagKind::Id, TagKind::Priority, TagKind::Comments];

    fn keyword(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Priority => "priority",
            Self::Comments => "comments",
        }
    }

    /// Match `<keyword>:` at the start of `s`, returning the byte length matched
    fn match_at(self, s: &str) -> Option<usize> {
        let kw = self.keyword();
        let head = s.get(..kw.len())?;
        if head.eq_ignore_ascii_case(kw) && s[kw.len()..].starts_with(':') {
            Some(kw.len() + 1)
        } else {
            None
        }
    }
}

/// Split a task tail into its tags and display text
pub fn split_tags(tail: &str) -> TaskTags {
    let mut tags = TaskTags::default();
    let mut taken: Vec<TagKind> = Vec::with_capacity(3);
    let mut text = String::with_capacity(tail.len());
    let mut kept_from = 0;
    let mut cursor = 0;

    while let Some(offset) = tail[cursor..].find('[') {
        let open = cursor + offset;
        let after = open + 1;

        let matched = TagKind::ALL.into_iter().find_map(|kind| {
            if taken.contains(&kind) {
                return None;
            }
            let value_start = after + kind.match_at(&tail[after..])?;
            let close = value_start + tail[value_start..].find(']')?;
            // `[id:]` has no value and is not a tag
            (close > value_start).then_some((kind, value_start, close))
        });

        let Some((kind, value_start, close)) = matched else {
            cursor = after;
            continue;
        };

        text.push_str(tail[kept_from..open].trim_end());
        let value = &tail[value_start..close];
        match kind {
            TagKind::Id => {
                let id = value.trim();
                tags.id = (!id.is_empty()).then(|| id.to_string());
            }
            TagKind::Priority => tags.priority = Some(value.trim().to_string()),
            TagKind::Comments => {
                let comments: Vec<String> = value
                    .split('|')
                    .map(str::trim)
                    .filter(|c| !c.is_empty())
                    .map(String::from)
                    .collect();
                tags.comments = (!comments.is_empty()).then_some(comments);
            }
        }
        taken.push(kind);
        kept_from = close + 1;
        cursor = kept_from;
    }

    text.push_str(&tail[kept_from..]);
    tags.text = text.trim().to_string();
    tags
}
