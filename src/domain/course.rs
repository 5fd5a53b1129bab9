//! Course records as read from the catalog file

use std::fmt;

/// One course record.
///
/// The id is the catalog key and is compared byte-wise wherever ordering
/// matters; no case normalization happens at this level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Course {
    /// Course identifier, e.g. "CS201"
    pub id: String,
    /// Human-readable title
    pub title: String,
    /// Prerequisite course ids in file order (may repeat, never deduplicated)
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Parse one comma-delimited catalog line.
    ///
    /// Field 0 is the id, field 1 the title, every further non-empty field
    /// a prerequisite id. Lines with fewer than two fields yield `None`.
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut fields = line.split(',');
        let id = fields.next()?.to_string();
        let title = fields.next()?.to_string();
        let prerequisites = fields
            .filter(|field| !field.is_empty())
            .map(str::to_string)
            .collect();

        Some(Self {
            id,
            title,
            prerequisites,
        })
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.id, self.title)
    }
}
