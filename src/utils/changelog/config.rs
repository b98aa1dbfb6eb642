// changelog configuration

use serde::{Deserialize, Serialize};

/// maps one conventional commit prefix to the section it is filed under
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrefixCategory {
    /// commit prefix without the colon (e.g., "feat")
    pub prefix: String,
    /// section heading in the generated changelog (e.g., "Features")
    pub category: String,
}

impl PrefixCategory {
    pub fn new(prefix: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            category: category.into(),
        }
    }
}

/// configuration for changelog validation and draft generation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChangelogConfig {
    /// name of the changelog file (default: "CHANGELOG.md")
    pub changelog_file_name: String,

    /// name of the generated draft file (default: "CHANGELOG_MERGE.md")
    pub draft_file_name: String,

    /// ordered prefix to category mapping; the first matching prefix wins
    pub prefixes: Vec<PrefixCategory>,

    /// prefixes whose categories are written to the draft, in output order
    pub include: Vec<String>,
}

impl ChangelogConfig {
    /// create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    pub fn changelog_file_name(mut self, name: impl Into<String>) -> Self {
        self.changelog_file_name = name.into();
        self
    }

    pub fn draft_file_name(mut self, name: impl Into<String>) -> Self {
        self.draft_file_name = name.into();
        self
    }

    pub fn prefixes(mut self, prefixes: Vec<PrefixCategory>) -> Self {
        self.prefixes = prefixes;
        self
    }

    pub fn include(mut self, include: Vec<String>) -> Self {
        self.include = include;
        self
    }

    /// look up the category a prefix is filed under
    pub fn category_for(&self, prefix: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .find(|p| p.prefix == prefix)
            .map(|p| p.category.as_str())
    }
}

impl Default for ChangelogConfig {
    fn default() -> Self {
        Self {
            changelog_file_name: "CHANGELOG.md".to_string(),
            draft_file_name: "CHANGELOG_MERGE.md".to_string(),
            prefixes: vec![
                PrefixCategory::new("feat", "Features"),
                PrefixCategory::new("mod", "Other Changes"),
                PrefixCategory::new("fix", "Fixes"),
                PrefixCategory::new("docs", "Documentation"),
                PrefixCategory::new("test", "Tests"),
                PrefixCategory::new("deprec", "Deprecates"),
                PrefixCategory::new("remove", "Removes"),
                PrefixCategory::new("perf", "Other Changes"),
                PrefixCategory::new("ci", "Continuous Integration"),
            ],
            include: vec![
                "feat".to_string(),
                "fix".to_string(),
                "mod".to_string(),
                "deprec".to_string(),
                "remove".to_string(),
                "docs".to_string(),
            ],
        }
    }
}
