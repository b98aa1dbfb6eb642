// changelog validation and draft generation

pub mod config;
pub mod generator;
pub mod parser;
pub mod types;
pub mod validator;

pub use config::{ChangelogConfig, PrefixCategory};
pub use generator::{build_draft, parse_commit, strip_issue_closers};
pub use parser::{
    changelog_lines, extract_body, find_most_recent_header, header_version, read_changelog,
};
pub use types::{ChangelogDraft, DraftSection, ParsedCommit, ReleaseNotes};
pub use validator::{
    header_matches_version, is_finalized, validate_changelog_content, validate_release_entry,
};
