use serde::{Deserialize, Serialize};

/// Tagged identifier for a retrieval backend (spec §3, §4.3). A sum type
/// rather than a bare string, per the "Multi-backend adapters in a static
/// type system" design note — adapters are registered in a table keyed by
/// this enum instead of discovered by runtime subclassing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceId {
    Exact,
    Fuzzy,
    Vector,
    Splade,
    Binary,
    Dense,
}

impl SourceId {
    pub const ALL: [SourceId; 6] = [
        SourceId::Exact,
        SourceId::Fuzzy,
        SourceId::Vector,
        SourceId::Splade,
        SourceId::Binary,
        SourceId::Dense,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SourceId::Exact => "exact",
            SourceId::Fuzzy => "fuzzy",
            SourceId::Vector => "vector",
            SourceId::Splade => "splade",
            SourceId::Binary => "binary",
            SourceId::Dense => "dense",
        }
    }
}

impl std::fmt::Display for SourceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
