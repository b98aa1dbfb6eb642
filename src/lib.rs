pub mod error;
pub mod utils;

pub use error::*;
pub use utils::changelog::{
    ChangelogConfig, ChangelogDraft, PrefixCategory, ReleaseNotes, build_draft, extract_body,
    find_most_recent_header, header_matches_version, is_finalized, parse_commit,
    validate_changelog_content, validate_release_entry,
};
pub use utils::checksum::{FileChecksum, checksum_file, checksum_files, compute_sha256};
pub use utils::config::{DocsConfig, MansyncConfig, PackConfig, RelkitConfig};
pub use utils::docs::{
    CommandBook, HeaderStatus, LicenseReport, LicenseUpdater, ManualWriter, MansyncReport,
    sort_glossary,
};
pub use utils::git_ops::{CommitRange, GitOps};
pub use utils::pack::{PackReport, Packager};
pub use utils::version::{
    ReleaseGate, SemanticVersion, compare, extract_latest_released, extract_manifest_version,
    is_new_version_higher, parse_version, read_manifest_name, read_manifest_version,
};
