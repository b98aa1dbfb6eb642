use serde::{Deserialize, Serialize};

/// which commits to read from the log
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CommitRange {
    /// the whole history reachable from HEAD
    All,
    /// commits reachable from HEAD but not from the given tag
    Since(String),
}

impl CommitRange {
    /// range from an optional tag name
    pub fn since_tag(tag: Option<String>) -> Self {
        match tag {
            Some(tag) => CommitRange::Since(tag),
            None => CommitRange::All,
        }
    }

    /// revision argument for `git log`, if any
    pub fn to_rev_arg(&self) -> Option<String> {
        match self {
            CommitRange::All => None,
            CommitRange::Since(tag) => Some(format!("{}..", tag)),
        }
    }
}
