use serde::{Deserialize, Serialize};

/// A named code construct with a line range (spec §3 `Symbol`, GLOSSARY).
/// Immutable value carried inside a [`crate::models::SearchResult`]; used for
/// symbol boosting and symbol-specific chain search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Symbol {
    pub name: String,
    pub kind: String,
    pub start_line: u32,
    pub end_line: u32,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, start_line: u32, end_line: u32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            start_line,
            end_line,
        }
    }

    pub fn range(&self) -> (u32, u32) {
        (self.start_line, self.end_line)
    }
}
