use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    FileWriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    GitError(Box<dyn std::error::Error + Send + Sync>),
    GitDiscoverError(Box<gix::discover::Error>),
    IoError(std::io::Error),
    MalformedVersion {
        input: String,
    },
    MissingManifestVersion {
        path: PathBuf,
    },
    MissingManifestName {
        path: PathBuf,
    },
    NoChangelogEntry,
    VersionMismatch {
        found: String,
        expected: String,
    },
    NotFinalized {
        header: String,
    },
    EmptyChangelog {
        version: String,
    },
    PlaceholderNotFound {
        path: PathBuf,
        token: String,
    },
    GlossaryError {
        reason: String,
    },
    CommandDocError {
        command: String,
        reason: String,
    },
    MissingPackSource {
        path: PathBuf,
    },
    ArchiveError(zip::result::ZipError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::FileWriteError { path, source } => {
                write!(f, "failed to write file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::GitError(err) => {
                write!(f, "git error: {}", err)
            }
            Error::GitDiscoverError(err) => {
                write!(f, "git discover error: {}", err)
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
            Error::MalformedVersion { input } => {
                write!(
                    f,
                    "malformed version '{}' (expected <major>.<minor>.<patch>)",
                    input
                )
            }
            Error::MissingManifestVersion { path } => {
                write!(
                    f,
                    "could not find a crate version in manifest: {}",
                    path.display()
                )
            }
            Error::MissingManifestName { path } => {
                write!(
                    f,
                    "could not find a package name in manifest: {}",
                    path.display()
                )
            }
            Error::NoChangelogEntry => {
                write!(f, "changelog has no version entry (no line starts with '## ')")
            }
            Error::VersionMismatch { found, expected } => {
                write!(
                    f,
                    "most recent changelog entry is for version '{}', but '{}' was requested",
                    found, expected
                )
            }
            Error::NotFinalized { header } => {
                write!(
                    f,
                    "most recent changelog entry is not finalized (marked unreleased): '{}'",
                    header
                )
            }
            Error::EmptyChangelog { version } => {
                write!(f, "changelog entry for version {} has no notes", version)
            }
            Error::PlaceholderNotFound { path, token } => {
                write!(
                    f,
                    "no replacement occurred: '{}' not found in {}",
                    token,
                    path.display()
                )
            }
            Error::GlossaryError { reason } => {
                write!(f, "glossary error: {}", reason)
            }
            Error::CommandDocError { command, reason } => {
                write!(f, "invalid documentation for command '{}': {}", command, reason)
            }
            Error::MissingPackSource { path } => {
                write!(f, "{} does not exist in current filesystem", path.display())
            }
            Error::ArchiveError(err) => {
                write!(f, "archive error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::FileWriteError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::GitError(err) => Some(err.as_ref()),
            Error::GitDiscoverError(err) => Some(err.as_ref()),
            Error::IoError(err) => Some(err),
            Error::ArchiveError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<gix::discover::Error> for Error {
    fn from(err: gix::discover::Error) -> Self {
        Error::GitDiscoverError(Box::new(err))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ArchiveError(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

// Helper function to convert various git errors
impl Error {
    pub fn from_git_error<T: std::error::Error + Send + Sync + 'static>(err: T) -> Self {
        Error::GitError(Box::new(err))
    }

    /// check if this error is one of the release-notes validation failures
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            Error::NoChangelogEntry
                | Error::VersionMismatch { .. }
                | Error::NotFinalized { .. }
                | Error::EmptyChangelog { .. }
        )
    }
}
