// version placeholder substitution for documentation pages

use crate::error::{Error, Result};
use std::fs;
use std::path::Path;

/// replace every occurrence of `token` in `contents` with `version`
///
/// returns `None` when nothing was replaced
pub fn replace_placeholder(contents: &str, token: &str, version: &str) -> Option<String> {
    if token.is_empty() || !contents.contains(token) {
        return None;
    }
    Some(contents.replace(token, version))
}

/// substitute the version into a file in place
pub fn sync_file_version<P: AsRef<Path>>(path: P, token: &str, version: &str) -> Result<()> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let swapped =
        replace_placeholder(&contents, token, version).ok_or_else(|| Error::PlaceholderNotFound {
            path: path.to_path_buf(),
            token: token.to_string(),
        })?;

    fs::write(path, swapped).map_err(|e| Error::FileWriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
