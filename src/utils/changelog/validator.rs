// changelog validator

use super::parser::{changelog_lines, extract_body, find_most_recent_header, header_version};
use super::types::{ReleaseNotes, UNRELEASED_MARKER};
use crate::error::{Error, Result};

/// check if a header's version token is literally the requested version
///
/// no numeric normalization happens: "## 0.01.0" does not match "0.1.0"
pub fn header_matches_version(header: &str, requested_version: &str) -> bool {
    header_version(header) == requested_version
}

/// check if a header is final, i.e. not marked unreleased (any case)
pub fn is_finalized(header: &str) -> bool {
    !header.to_lowercase().contains(UNRELEASED_MARKER)
}

/// validate the most recent changelog entry against a requested version
///
/// checks run in a fixed order and the first failure is returned:
/// no entry, version mismatch, not finalized, empty body.
pub fn validate_release_entry<S: AsRef<str>>(
    lines: &[S],
    requested_version: &str,
) -> Result<ReleaseNotes> {
    let header = find_most_recent_header(lines).ok_or(Error::NoChangelogEntry)?;

    if !header_matches_version(header, requested_version) {
        return Err(Error::VersionMismatch {
            found: header_version(header).to_string(),
            expected: requested_version.to_string(),
        });
    }

    if !is_finalized(header) {
        return Err(Error::NotFinalized {
            header: header.trim_end().to_string(),
        });
    }

    let body = extract_body(lines);
    if body.is_empty() {
        return Err(Error::EmptyChangelog {
            version: requested_version.to_string(),
        });
    }

    Ok(ReleaseNotes::new(
        header.trim_end().to_string(),
        header_version(header).to_string(),
        body,
    ))
}

/// validate changelog file contents (line breaks in the body are kept)
pub fn validate_changelog_content(content: &str, requested_version: &str) -> Result<ReleaseNotes> {
    validate_release_entry(&changelog_lines(content), requested_version)
}
