// release packaging: stage the built binary and its companion files under
// target/<name>/, then zip that directory

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::SimpleFileOptions;

/// what a pack run produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackReport {
    pub staging_dir: PathBuf,
    pub archive: PathBuf,
    /// archive entries, relative to the package directory
    pub entries: Vec<String>,
}

/// packages one platform build of a binary
pub struct Packager {
    root: PathBuf,
    name: String,
    target: String,
    release_dir: PathBuf,
    files: Vec<String>,
}

impl Packager {
    /// `target` is the platform suffix of the archive name (e.g., x86_64-linux)
    pub fn new(
        root: impl Into<PathBuf>,
        name: impl Into<String>,
        target: impl Into<String>,
    ) -> Self {
        let root = root.into();
        Self {
            release_dir: root.join("target").join("release"),
            root,
            name: name.into(),
            target: target.into(),
            files: vec!["LICENSE".to_string()],
        }
    }

    pub fn release_dir(mut self, release_dir: impl Into<PathBuf>) -> Self {
        self.release_dir = release_dir.into();
        self
    }

    /// files (relative to the root) copied to the package root
    pub fn files(mut self, files: Vec<String>) -> Self {
        self.files = files;
        self
    }

    /// windows targets get the `.exe` binary
    pub fn binary_name(&self) -> String {
        if self.target.to_lowercase().contains("windows") {
            format!("{}.exe", self.name)
        } else {
            self.name.clone()
        }
    }

    pub fn staging_dir(&self) -> PathBuf {
        self.root.join("target").join(&self.name)
    }

    pub fn archive_path(&self) -> PathBuf {
        self.root.join(format!("{}-{}.zip", self.name, self.target))
    }

    /// (source, entry) pairs: the binary under bin/, the rest at the top
    fn sources(&self) -> Vec<(PathBuf, String)> {
        let binary = self.binary_name();
        let mut sources = vec![(self.release_dir.join(&binary), format!("bin/{}", binary))];
        for file in &self.files {
            let entry = Path::new(file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| file.clone());
            sources.push((self.root.join(file), entry));
        }
        sources
    }

    /// recreate the staging directory and copy every source into it
    ///
    /// all sources are checked before anything is removed
    pub fn stage(&self) -> Result<Vec<String>> {
        let sources = self.sources();
        if let Some((missing, _)) = sources.iter().find(|(source, _)| !source.is_file()) {
            return Err(Error::MissingPackSource {
                path: missing.clone(),
            });
        }

        let staging = self.staging_dir();
        if staging.exists() {
            fs::remove_dir_all(&staging).map_err(|e| Error::FileWriteError {
                path: staging.clone(),
                source: e,
            })?;
        }

        let mut entries = Vec::new();
        for (source, entry) in sources {
            let dest = staging.join(&entry);
            if let Some(parent) = dest.parent() {
                fs::create_dir_all(parent).map_err(|e| Error::FileWriteError {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
            fs::copy(&source, &dest).map_err(|e| Error::FileWriteError {
                path: dest.clone(),
                source: e,
            })?;
            entries.push(entry);
        }

        Ok(entries)
    }

    /// zip the staged entries; every path in the archive starts with `<name>/`
    pub fn archive(&self, entries: &[String]) -> Result<PathBuf> {
        let staging = self.staging_dir();
        let archive_path = self.archive_path();
        let file = fs::File::create(&archive_path).map_err(|e| Error::FileWriteError {
            path: archive_path.clone(),
            source: e,
        })?;

        let mut zip = zip::ZipWriter::new(file);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        let mut directories = vec![String::new()];
        zip.add_directory(format!("{}/", self.name), options)?;

        for entry in entries {
            if let Some((dir, _)) = entry.rsplit_once('/')
                && !directories.iter().any(|known| known == dir)
            {
                zip.add_directory(format!("{}/{}/", self.name, dir), options)?;
                directories.push(dir.to_string());
            }

            let source = staging.join(entry);
            let bytes = fs::read(&source).map_err(|e| Error::FileReadError {
                path: source.clone(),
                source: e,
            })?;

            let permissions = if entry.starts_with("bin/") { 0o755 } else { 0o644 };
            zip.start_file(
                format!("{}/{}", self.name, entry),
                options.unix_permissions(permissions),
            )?;
            zip.write_all(&bytes)?;
        }

        zip.finish()?;
        Ok(archive_path)
    }

    pub fn run(&self) -> Result<PackReport> {
        let entries = self.stage()?;
        let archive = self.archive(&entries)?;

        Ok(PackReport {
            staging_dir: self.staging_dir(),
            archive,
            entries,
        })
    }
}
