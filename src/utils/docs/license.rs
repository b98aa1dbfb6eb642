// license header maintenance for rust sources

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// state of a source file's header before the update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderStatus {
    /// already starts with the current header
    Latest,
    /// started with the previous header, which was replaced
    Updated,
    /// had no known header; the current one was prepended
    Missing,
}

/// bring `content` up to date with `header`
///
/// `previous` is the header being phased out; an empty `previous` never
/// matches
pub fn apply_header(content: &str, header: &str, previous: &str) -> (HeaderStatus, String) {
    if content.starts_with(header) {
        return (HeaderStatus::Latest, content.to_string());
    }

    if !previous.is_empty()
        && let Some(rest) = content.strip_prefix(previous)
    {
        return (HeaderStatus::Updated, format!("{}{}", header, rest));
    }

    (HeaderStatus::Missing, format!("{}{}", header, content))
}

/// counts of files per header status after a run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LicenseReport {
    pub files: usize,
    pub latest: usize,
    pub updated: usize,
    pub missing: usize,
}

impl LicenseReport {
    fn record(&mut self, status: HeaderStatus) {
        self.files += 1;
        match status {
            HeaderStatus::Latest => self.latest += 1,
            HeaderStatus::Updated => self.updated += 1,
            HeaderStatus::Missing => self.missing += 1,
        }
    }
}

/// rewrites license headers across every `.rs` file below a directory
pub struct LicenseUpdater {
    pub header: String,
    pub previous_header: String,
}

impl LicenseUpdater {
    pub fn new(header: impl Into<String>, previous_header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            previous_header: previous_header.into(),
        }
    }

    /// find all rust source files below `root`, sorted by path
    pub fn find_sources<P: AsRef<Path>>(root: P) -> Result<Vec<PathBuf>> {
        let mut files = Vec::new();
        Self::find_sources_recursive(root.as_ref(), &mut files)?;
        files.sort();
        Ok(files)
    }

    fn find_sources_recursive(directory: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
        for entry in fs::read_dir(directory)? {
            let path = entry?.path();

            if path.is_dir() {
                Self::find_sources_recursive(&path, files)?;
            } else if path.extension().is_some_and(|ext| ext == "rs") {
                files.push(path);
            }
        }
        Ok(())
    }

    /// update every source file below `root`; files already current are not rewritten
    pub fn run<P: AsRef<Path>>(&self, root: P) -> Result<LicenseReport> {
        let mut report = LicenseReport::default();

        for path in Self::find_sources(root)? {
            let content = fs::read_to_string(&path).map_err(|e| Error::FileReadError {
                path: path.clone(),
                source: e,
            })?;

            let (status, updated) = apply_header(&content, &self.header, &self.previous_header);
            if status != HeaderStatus::Latest {
                fs::write(&path, updated).map_err(|e| Error::FileWriteError {
                    path: path.clone(),
                    source: e,
                })?;
            }
            report.record(status);
        }

        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const NEW: &str = "//\n//  Copyright (C) 2022-2024\n//\n\n";
    const OLD: &str = "//\n//  Copyright (C) 2022-2023\n//\n\n";

    #[test]
    fn test_apply_header_statuses() {
        let body = "fn main() {}\n";

        let (status, out) = apply_header(&format!("{}{}", NEW, body), NEW, OLD);
        assert_eq!(status, HeaderStatus::Latest);
        assert_eq!(out, format!("{}{}", NEW, body));

        let (status, out) = apply_header(&format!("{}{}", OLD, body), NEW, OLD);
        assert_eq!(status, HeaderStatus::Updated);
        assert_eq!(out, format!("{}{}", NEW, body));

        let (status, out) = apply_header(body, NEW, OLD);
        assert_eq!(status, HeaderStatus::Missing);
        assert_eq!(out, format!("{}{}", NEW, body));
    }

    #[test]
    fn test_apply_header_empty_previous() {
        let (status, out) = apply_header("mod a;\n", NEW, "");
        assert_eq!(status, HeaderStatus::Missing);
        assert_eq!(out, format!("{}mod a;\n", NEW));
    }

    #[test]
    fn test_run_over_tree() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        fs::create_dir_all(src.join("core")).unwrap();
        fs::write(src.join("main.rs"), format!("{}fn main() {{}}\n", NEW)).unwrap();
        fs::write(src.join("lib.rs"), format!("{}pub mod core;\n", OLD)).unwrap();
        fs::write(src.join("core").join("mod.rs"), "pub fn f() {}\n").unwrap();
        fs::write(src.join("notes.md"), "not rust\n").unwrap();

        let report = LicenseUpdater::new(NEW, OLD).run(&src).unwrap();
        assert_eq!(
            report,
            LicenseReport {
                files: 3,
                latest: 1,
                updated: 1,
                missing: 1,
            }
        );

        let lib = fs::read_to_string(src.join("lib.rs")).unwrap();
        assert_eq!(lib, format!("{}pub mod core;\n", NEW));
        let core = fs::read_to_string(src.join("core").join("mod.rs")).unwrap();
        assert!(core.starts_with(NEW));
        assert_eq!(fs::read_to_string(src.join("notes.md")).unwrap(), "not rust\n");
    }
}
