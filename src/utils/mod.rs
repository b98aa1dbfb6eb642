pub mod changelog;
pub mod checksum;
pub mod config;
pub mod docs;
pub mod git_ops;
pub mod pack;
pub mod version;

pub mod testing;
