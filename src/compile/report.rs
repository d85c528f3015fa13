//! Summary of a compile run.

use std::path::PathBuf;

use serde::Serialize;

use super::PackageCacheOutcome;

/// What a compile run did, or would do in a dry run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CompileReport {
    pub build_dir: PathBuf,
    pub cache_dir: PathBuf,
    /// Dependency directories moved into the build directory.
    pub restored: Vec<String>,
    /// Dependency directories not found in the cache. Only filled by dry runs;
    /// a real run fails on the first missing directory instead.
    pub missing: Vec<String>,
    pub package_cache: PackageCacheOutcome,
    pub dry_run: bool,
}

impl CompileReport {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
