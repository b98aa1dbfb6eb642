// version parsing and comparison

use super::types::SemanticVersion;
use std::cmp::Ordering;

fn strip_version_prefix(text: &str) -> &str {
    text.strip_prefix(['v', 'V']).unwrap_or(text)
}

/// parse a `[v|V]<major>.<minor>.<patch>` string
///
/// returns `None` for anything else: a wrong number of components, an empty
/// component, or any character other than digits and `.` after the prefix.
/// leading zeros are accepted (`02` is `2`).
///
/// components are `u64`: a component above `u64::MAX` does not fit and the
/// whole string is rejected like any other malformed version. leading zeros
/// do not count against the bound.
pub fn parse_version(text: &str) -> Option<SemanticVersion> {
    let body = strip_version_prefix(text);

    if !body.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return None;
    }

    let mut parts = body.split('.');
    let major = parts.next()?.parse::<u64>().ok()?;
    let minor = parts.next()?.parse::<u64>().ok()?;
    let patch = parts.next()?.parse::<u64>().ok()?;

    if parts.next().is_some() {
        return None; // more than two separators
    }

    Some(SemanticVersion::new(major, minor, patch))
}

/// compare two versions by (major, minor, patch)
pub fn compare(lhs: &SemanticVersion, rhs: &SemanticVersion) -> Ordering {
    lhs.cmp(rhs)
}

/// check if `candidate` is strictly higher than `baseline`
pub fn is_new_version_higher(candidate: &SemanticVersion, baseline: &SemanticVersion) -> bool {
    compare(candidate, baseline) == Ordering::Greater
}

/// find the highest released version among raw tag names
///
/// each tag is trimmed and parsed with [`parse_version`]; tags that do not
/// parse are ignored. `None` means no tag looked like a release, which is
/// not the same as a `0.0.0` release.
pub fn extract_latest_released<I, S>(tags: I) -> Option<SemanticVersion>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    tags.into_iter()
        .filter_map(|tag| parse_version(tag.as_ref().trim()))
        .max()
}
