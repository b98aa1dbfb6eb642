// release version comparison

pub mod gate;
pub mod manifest;
pub mod parser;
pub mod types;

pub use gate::ReleaseGate;
pub use manifest::{
    extract_manifest_value, extract_manifest_version, read_manifest_name, read_manifest_version,
};
pub use parser::{compare, extract_latest_released, is_new_version_higher, parse_version};
pub use types::SemanticVersion;
