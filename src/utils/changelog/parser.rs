// changelog parser

use super::types::SECTION_MARKER;
use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// read a changelog file into a string
pub fn read_changelog<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// split changelog contents into lines that keep their terminators
///
/// [`extract_body`] joins lines without a separator, so lines from a file
/// should go through here to keep the body's line breaks.
pub fn changelog_lines(content: &str) -> Vec<&str> {
    content.split_inclusive('\n').collect()
}

/// first line that opens a version section, if any
pub fn find_most_recent_header<S: AsRef<str>>(lines: &[S]) -> Option<&str> {
    lines
        .iter()
        .map(|line| line.as_ref())
        .find(|line| line.starts_with(SECTION_MARKER))
}

/// version token of a header line, without the marker or a leading `v`
///
/// `"## v1.0.0 - unreleased"` gives `"1.0.0"`
pub fn header_version(header: &str) -> &str {
    let rest = header.strip_prefix(SECTION_MARKER).unwrap_or(header);
    let token = rest.split_whitespace().next().unwrap_or("");
    token.strip_prefix(['v', 'V']).unwrap_or(token)
}

/// body text of the most recent version section
///
/// lines strictly between the first and second section markers are joined
/// as-is, with nothing inserted between them, and the result is trimmed.
/// without a second marker the body runs to the end of the document.
pub fn extract_body<S: AsRef<str>>(lines: &[S]) -> String {
    let mut body = String::new();
    let mut recording = false;

    for line in lines {
        let line = line.as_ref();
        if line.starts_with(SECTION_MARKER) {
            if recording {
                break;
            }
            recording = true;
            continue;
        }
        if recording {
            body.push_str(line);
        }
    }

    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: [&str; 10] = [
        "# Changelog",
        "",
        "## 0.1.1",
        "",
        "- change 1",
        "- fix 1",
        "",
        "## 0.1.0",
        "",
        "- feature 1",
    ];

    #[test]
    fn test_find_most_recent_header() {
        assert_eq!(find_most_recent_header(&SAMPLE), Some("## 0.1.1"));
    }

    #[test]
    fn test_find_most_recent_header_none() {
        let lines = ["# Changelog", "", "### 0.1.0", "#0.0.1"];
        assert_eq!(find_most_recent_header(&lines), None);
        assert_eq!(find_most_recent_header::<&str>(&[]), None);
    }

    #[test]
    fn test_header_version() {
        assert_eq!(header_version("## 0.1.0"), "0.1.0");
        assert_eq!(header_version("## v0.1.0"), "0.1.0");
        assert_eq!(header_version("##   V2.0.0 - unreleased\n"), "2.0.0");
        assert_eq!(header_version("## "), "");
    }

    #[test]
    fn test_extract_body_joins_without_separator() {
        assert_eq!(extract_body(&SAMPLE), "- change 1- fix 1");
    }

    #[test]
    fn test_extract_body_whitespace_only() {
        let lines = ["# Changelog", "## 0.2.0", "\t", "   ", "", "## 0.1.0", "- old"];
        assert_eq!(extract_body(&lines), "");
    }

    #[test]
    fn test_extract_body_runs_to_end_without_second_header() {
        let lines = ["## 1.0.0", "- first", "- second"];
        assert_eq!(extract_body(&lines), "- first- second");
    }

    #[test]
    fn test_extract_body_keeps_line_breaks_from_file() {
        let content = "# Changelog\n\n## 1.0.0\n\n- added a\n- fixed b\n\n## 0.9.0\n- old\n";
        let lines = changelog_lines(content);
        assert_eq!(extract_body(&lines), "- added a\n- fixed b");
    }

    #[test]
    fn test_extract_body_no_header() {
        let lines = ["# Changelog", "- loose line"];
        assert_eq!(extract_body(&lines), "");
    }
}
