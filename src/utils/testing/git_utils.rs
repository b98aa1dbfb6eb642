use crate::error::{Error, Result};
use std::path::Path;
use std::process::Command;

/// Test git repository utilities for controlled testing
pub struct TestGitRepo {
    repo_path: std::path::PathBuf,
}

impl TestGitRepo {
    /// Initialize a new git repository at the given path
    pub fn init<P: AsRef<Path>>(path: P) -> Result<Self> {
        let repo = Self {
            repo_path: path.as_ref().to_path_buf(),
        };

        repo.git(&["init"])?;

        // Configure user for commits
        repo.git(&["config", "user.name", "Test User"])?;
        repo.git(&["config", "user.email", "test@example.com"])?;

        // Disable GPG signing for tests
        repo.git(&["config", "commit.gpgsign", "false"])?;
        repo.git(&["config", "tag.gpgsign", "false"])?;

        Ok(repo)
    }

    fn git(&self, args: &[&str]) -> Result<String> {
        let output = Command::new("git")
            .args(args)
            .current_dir(&self.repo_path)
            .output()
            .map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git {} failed: {}",
                args.join(" "),
                String::from_utf8_lossy(&output.stderr)
            )))));
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }

    /// Write a file (creating parent directories) without committing it
    pub fn write_file(&self, file_path: &str, content: &str) -> Result<()> {
        let full_path = self.repo_path.join(file_path);

        if let Some(parent) = full_path.parent() {
            std::fs::create_dir_all(parent).map_err(Error::IoError)?;
        }

        std::fs::write(full_path, content).map_err(Error::IoError)
    }

    /// Stage everything and create a commit (empty commits are allowed)
    pub fn commit(&self, message: &str) -> Result<()> {
        self.git(&["add", "."])?;
        self.git(&["commit", "--allow-empty", "-m", message])?;
        Ok(())
    }

    /// Create a lightweight tag at HEAD
    pub fn tag(&self, name: &str) -> Result<()> {
        self.git(&["tag", name])?;
        Ok(())
    }

    /// Create an annotated tag at HEAD
    pub fn annotated_tag(&self, name: &str, message: &str) -> Result<()> {
        self.git(&["tag", "-a", name, "-m", message])?;
        Ok(())
    }

    /// Get the repository path
    pub fn path(&self) -> &Path {
        &self.repo_path
    }
}
