// changelog data structures

use serde::{Deserialize, Serialize};

/// marker that opens a version section in the changelog
pub const SECTION_MARKER: &str = "## ";

/// qualifier that keeps a version section from being released
pub const UNRELEASED_MARKER: &str = "unreleased";

/// release notes taken from the most recent changelog entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseNotes {
    /// the full header line (e.g., "## 1.0.0")
    pub header: String,
    /// version token from the header, without a leading `v`
    pub version: String,
    /// trimmed body of the section
    pub body: String,
}

impl ReleaseNotes {
    pub fn new(header: String, version: String, body: String) -> Self {
        Self {
            header,
            version,
            body,
        }
    }
}

/// a commit subject that matched one of the configured prefixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedCommit {
    pub prefix: String,
    pub category: String,
    /// the rendered list line (e.g., "- adds auto-changelog script (#1)")
    pub line: String,
}

impl ParsedCommit {
    pub fn new(prefix: String, category: String, line: String) -> Self {
        Self {
            prefix,
            category,
            line,
        }
    }
}

/// one category section of a generated changelog draft
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSection {
    pub category: String,
    pub entries: Vec<String>,
}

/// changelog draft built from commit subjects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangelogDraft {
    /// optional title line rendered above the sections
    pub title: Option<String>,
    /// sections in output order; only non-empty sections are kept
    pub sections: Vec<DraftSection>,
    /// subjects that did not match any prefix
    pub skipped: Vec<String>,
}

impl ChangelogDraft {
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    pub fn entry_count(&self) -> usize {
        self.sections.iter().map(|s| s.entries.len()).sum()
    }
}
