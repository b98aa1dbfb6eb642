// sha256 checksums for release artifacts

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;
use std::fs;
use std::path::Path;

/// checksum of one file, listed by base name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileChecksum {
    /// lower-case hex sha256 digest
    pub digest: String,
    pub name: String,
}

impl fmt::Display for FileChecksum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.digest, self.name)
    }
}

/// compute the sha256 of a byte slice as lower-case hex
pub fn compute_sha256(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// checksum a single file
pub fn checksum_file<P: AsRef<Path>>(path: P) -> Result<FileChecksum> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|e| Error::FileReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string());

    Ok(FileChecksum {
        digest: compute_sha256(&bytes),
        name,
    })
}

/// checksum every file in order, stopping at the first unreadable one
pub fn checksum_files<I, P>(paths: I) -> Result<Vec<FileChecksum>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().map(checksum_file).collect()
}
