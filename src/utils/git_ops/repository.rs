use super::types::CommitRange;
use crate::error::{Error, Result};
use crate::utils::version::{SemanticVersion, parse_version};
use gix::bstr::ByteSlice;
use std::path::Path;

pub struct GitOps;

impl GitOps {
    /// list all tag names in the repository (without the refs/tags/ prefix)
    pub fn list_tags<P: AsRef<Path>>(repo_path: P) -> Result<Vec<String>> {
        let repo = gix::discover(repo_path.as_ref())?;

        let mut tags = Vec::new();

        let references = repo.references().map_err(Error::from_git_error)?;
        for reference_result in references.tags().map_err(Error::from_git_error)? {
            if let Ok(reference) = reference_result
                && let Ok(name) = reference.name().as_bstr().to_str()
                && let Some(tag_name) = name.strip_prefix("refs/tags/")
            {
                tags.push(tag_name.to_string());
            }
        }

        tags.sort();
        Ok(tags)
    }

    /// find the tag naming the highest released version
    ///
    /// returns the raw tag name (e.g., "v1.2.0") with its parsed version,
    /// or `None` when no tag parses as a version
    pub fn latest_release_tag<P: AsRef<Path>>(
        repo_path: P,
    ) -> Result<Option<(String, SemanticVersion)>> {
        let tags = Self::list_tags(repo_path)?;

        Ok(tags
            .into_iter()
            .filter_map(|tag| parse_version(tag.trim()).map(|version| (tag, version)))
            .max_by_key(|(_, version)| *version))
    }

    /// list commit subjects, newest first
    pub fn commit_subjects<P: AsRef<Path>>(repo_path: P, range: &CommitRange) -> Result<Vec<String>> {
        let repo_path = repo_path.as_ref();
        let _repo = gix::discover(repo_path)?;

        // use git command for the log (simpler than walking revisions with gix)
        let mut command = std::process::Command::new("git");
        command
            .arg("-C")
            .arg(repo_path)
            .arg("log")
            .arg("--pretty=format:%s");
        if let Some(rev) = range.to_rev_arg() {
            command.arg(rev);
        }

        let output = command.output().map_err(Error::IoError)?;

        if !output.status.success() {
            return Err(Error::GitError(Box::new(std::io::Error::other(format!(
                "git log failed: {}",
                String::from_utf8_lossy(&output.stderr).trim()
            )))));
        }

        let output_str = String::from_utf8_lossy(&output.stdout);
        Ok(output_str
            .lines()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty())
            .collect())
    }
}
