// glossary page sorting

use crate::error::{Error, Result};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// heading that introduces each glossary term
pub const TERM_MARKER: &str = "### ";

/// sort a glossary page alphabetically by term
///
/// the page is split on `### `; chunks that are blank or whose first line
/// starts with `#` (the page title) are dropped. a repeated term keeps its
/// last definition. definitions are emitted verbatim.
pub fn sort_glossary(content: &str) -> Result<String> {
    let mut terms: BTreeMap<String, &str> = BTreeMap::new();

    for chunk in content.split(TERM_MARKER) {
        if chunk.trim().is_empty() {
            continue;
        }

        let (term, definition) = chunk.split_once('\n').ok_or_else(|| Error::GlossaryError {
            reason: format!("term '{}' has no definition", chunk.trim()),
        })?;

        if term.starts_with('#') {
            continue;
        }
        terms.insert(term.trim().to_string(), definition);
    }

    let mut out = String::new();
    for (term, definition) in terms {
        out.push_str(TERM_MARKER);
        out.push_str(&term);
        out.push('\n');
        out.push_str(definition);
    }

    Ok(out)
}

/// read and sort a glossary file
pub fn sort_glossary_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    sort_glossary(&content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_glossary() {
        let page = "# Glossary\n\n### Lockfile\nRecords exact versions.\n\n### Catalog\nSet of known ips.\n\n### Manifest\nDescribes an ip.\n";
        let sorted = sort_glossary(page).unwrap();
        assert_eq!(
            sorted,
            "### Catalog\nSet of known ips.\n\n### Lockfile\nRecords exact versions.\n\n### Manifest\nDescribes an ip.\n"
        );
    }

    #[test]
    fn test_sort_glossary_duplicate_keeps_last() {
        let page = "### B\nfirst\n### A\nalpha\n### B\nsecond\n";
        assert_eq!(sort_glossary(page).unwrap(), "### A\nalpha\n### B\nsecond\n");
    }

    #[test]
    fn test_sort_glossary_term_without_definition() {
        let err = sort_glossary("### Dangling").unwrap_err();
        assert!(matches!(err, Error::GlossaryError { .. }));
    }

    #[test]
    fn test_sort_glossary_empty() {
        assert_eq!(sort_glossary("# Glossary\n\n").unwrap(), "");
    }
}
