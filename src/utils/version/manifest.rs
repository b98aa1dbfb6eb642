// crate manifest lookups (version, package name)

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// find the value of the first `<key> = ...` line
///
/// this is a line scan, not a toml parse: the first line whose key is `key`
/// wins, whatever table it sits in. a leading `"` or `'` is taken as the
/// quote delimiter and stripped from both ends.
/// an empty value gives `Some("")`; no matching key gives `None`.
pub fn extract_manifest_value<I, S>(lines: I, key: &str) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for line in lines {
        let Some((name, value)) = line.as_ref().split_once('=') else {
            continue;
        };
        if name.trim() != key {
            continue;
        }

        let value = value.trim();
        return Some(match value.chars().next() {
            Some(delim @ ('"' | '\'')) => value.trim_matches(delim).to_string(),
            _ => value.to_string(),
        });
    }
    None
}

/// find the value of the first `version = ...` line
pub fn extract_manifest_version<I, S>(lines: I) -> Option<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    extract_manifest_value(lines, "version")
}

fn read_manifest(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// read a manifest file and return its declared version
///
/// a manifest without a `version` key is an error here, since every caller
/// of this function needs the version to continue.
pub fn read_manifest_version<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = read_manifest(path)?;

    extract_manifest_version(content.lines()).ok_or_else(|| Error::MissingManifestVersion {
        path: path.to_path_buf(),
    })
}

/// read a manifest file and return its package name
pub fn read_manifest_name<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let content = read_manifest(path)?;

    extract_manifest_value(content.lines(), "name")
        .filter(|name| !name.is_empty())
        .ok_or_else(|| Error::MissingManifestName {
            path: path.to_path_buf(),
        })
}
