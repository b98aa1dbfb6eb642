use super::changelog::ChangelogConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// name of the configuration file looked up in the repository root
pub const CONFIG_FILE_NAME: &str = "relkit.toml";

/// documentation-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DocsConfig {
    /// crate manifest the release version is read from
    pub manifest_file: String,

    /// glossary page sorted by `sort-gloss`
    pub glossary_file: String,

    /// token replaced with the crate version by `sync-docs`
    pub version_placeholder: String,

    /// directory scanned by `license`
    pub source_root: String,

    /// header every source file must start with
    pub license_header: Option<String>,

    /// header being replaced by `license_header`
    pub previous_license_header: Option<String>,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            manifest_file: "Cargo.toml".to_string(),
            glossary_file: "docs/src/glossary.md".to_string(),
            version_placeholder: "CARGO_CRATE_VERSION".to_string(),
            source_root: "src".to_string(),
            license_header: None,
            previous_license_header: None,
        }
    }
}

/// command documentation generated by `mansync`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct MansyncConfig {
    /// toml file holding one table per command
    pub commands_file: String,

    /// table naming the program itself (defaults to the manifest package name)
    pub program: Option<String>,

    /// directory for markdown manual pages
    pub markdown_dir: String,

    /// directory for rust `MANUAL` constants
    pub manual_dir: String,

    /// directory for rust `HELP` constants
    pub help_dir: String,
}

impl Default for MansyncConfig {
    fn default() -> Self {
        Self {
            commands_file: "docs/commands.toml".to_string(),
            program: None,
            markdown_dir: "docs/src/commands".to_string(),
            manual_dir: "src/commands/manuals".to_string(),
            help_dir: "src/commands/helps".to_string(),
        }
    }
}

/// release archive layout used by `pack`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PackConfig {
    /// package and binary name (defaults to the manifest package name)
    pub name: Option<String>,

    /// directory holding the release build of the binary
    pub release_dir: String,

    /// extra files copied to the package root
    pub files: Vec<String>,
}

impl Default for PackConfig {
    fn default() -> Self {
        Self {
            name: None,
            release_dir: "target/release".to_string(),
            files: vec!["LICENSE".to_string()],
        }
    }
}

/// main configuration for relkit
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RelkitConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// documentation-related configuration
    #[serde(default)]
    pub docs: DocsConfig,

    #[serde(default)]
    pub mansync: MansyncConfig,

    #[serde(default)]
    pub pack: PackConfig,
}

impl RelkitConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: RelkitConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration file in repository
    ///
    /// returns default config if the file is not found; a file that exists
    /// but does not parse is an error
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Result<Self> {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => Self::load_from_file(&config_path),
            None => Ok(Self::default()),
        }
    }

    /// find configuration file in repository
    ///
    /// looks for `relkit.toml` in the repository root
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let repo_path = repo_path.as_ref();
        let config_path = repo_path.join(CONFIG_FILE_NAME);

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = RelkitConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config.changelog.changelog_file_name, "CHANGELOG.md");
        assert_eq!(config.docs.version_placeholder, "CARGO_CRATE_VERSION");
        assert!(config.docs.license_header.is_none());
        assert_eq!(config.mansync.commands_file, "docs/commands.toml");
        assert!(config.mansync.program.is_none());
        assert_eq!(config.pack.release_dir, "target/release");
        assert_eq!(config.pack.files, vec!["LICENSE"]);
    }

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(CONFIG_FILE_NAME),
            r#"
                [changelog]
                changelog_file_name = "docs/CHANGELOG.md"
                include = ["feat", "fix"]

                [[changelog.prefixes]]
                prefix = "feat"
                category = "New"

                [[changelog.prefixes]]
                prefix = "fix"
                category = "Bugfixes"

                [docs]
                license_header = "// MIT\n\n"

                [mansync]
                program = "orbit"
                help_dir = "src/helps"

                [pack]
                files = ["LICENSE", "README.md"]
            "#,
        )
        .unwrap();

        let config = RelkitConfig::load_or_default(temp_dir.path()).unwrap();
        assert_eq!(config.changelog.changelog_file_name, "docs/CHANGELOG.md");
        assert_eq!(config.changelog.draft_file_name, "CHANGELOG_MERGE.md");
        assert_eq!(config.changelog.category_for("fix"), Some("Bugfixes"));
        assert_eq!(config.changelog.include, vec!["feat", "fix"]);
        assert_eq!(config.docs.license_header.as_deref(), Some("// MIT\n\n"));
        assert_eq!(config.docs.glossary_file, "docs/src/glossary.md");
        assert_eq!(config.mansync.program.as_deref(), Some("orbit"));
        assert_eq!(config.mansync.help_dir, "src/helps");
        assert_eq!(config.mansync.manual_dir, "src/commands/manuals");
        assert_eq!(config.pack.files, vec!["LICENSE", "README.md"]);
        assert!(config.pack.name.is_none());
    }

    #[test]
    fn test_load_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(CONFIG_FILE_NAME), "[changelog\n").unwrap();

        let err = RelkitConfig::load_or_default(temp_dir.path()).unwrap_err();
        assert!(matches!(err, Error::TomlParseError { .. }));
    }
}
