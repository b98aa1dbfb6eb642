// release gate: is the manifest version newer than the last release?

use super::parser::{extract_latest_released, is_new_version_higher};
use super::types::SemanticVersion;
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// outcome of comparing the requested version with released tags
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseGate {
    pub requested: SemanticVersion,
    /// highest released version, `None` when nothing was tagged yet
    pub previous: Option<SemanticVersion>,
    pub proceed: bool,
}

impl ReleaseGate {
    /// compare a manifest version string against raw tag names
    ///
    /// with no parseable tag the baseline is `0.0.0`
    pub fn evaluate<I, S>(manifest_version: &str, tags: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let requested: SemanticVersion = manifest_version.parse()?;
        let previous = extract_latest_released(tags);
        let baseline = previous.unwrap_or_else(SemanticVersion::zero);

        Ok(Self {
            requested,
            previous,
            proceed: is_new_version_higher(&requested, &baseline),
        })
    }

    /// `1` to proceed with the release, `0` to block it
    pub fn as_flag(&self) -> &'static str {
        if self.proceed { "1" } else { "0" }
    }
}
