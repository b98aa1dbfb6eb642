// testing utilities for building throwaway git repositories

pub mod git_utils;

pub use git_utils::TestGitRepo;
