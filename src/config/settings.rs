//! Settings for a single compile run.

use std::path::{Path, PathBuf};

use crate::error::{Result, StowawayError};

use super::PackageCachePolicy;

/// Everything one compile run needs.
#[derive(Debug, Clone)]
pub struct CompileConfig {
    /// Workspace the dependencies are restored into.
    pub build_dir: PathBuf,
    /// Directory persisted across builds.
    pub cache_dir: PathBuf,
    /// What to do with the NuGet package cache.
    pub package_cache: PackageCachePolicy,
    /// Report planned work without touching the filesystem.
    pub dry_run: bool,
}

impl CompileConfig {
    /// Create a config that keeps the package cache.
    pub fn new(build_dir: impl Into<PathBuf>, cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            build_dir: build_dir.into(),
            cache_dir: cache_dir.into(),
            package_cache: PackageCachePolicy::Keep,
            dry_run: false,
        }
    }

    /// Set the package cache policy.
    pub fn with_package_cache(mut self, policy: PackageCachePolicy) -> Self {
        self.package_cache = policy;
        self
    }

    /// Enable or disable dry-run mode.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Check that both directories exist and are directories.
    ///
    /// The compile steps themselves only rely on what `rename` and
    /// `remove_dir_all` report; this check exists so the CLI can fail with
    /// a readable message before any step runs.
    pub fn validate(&self) -> Result<()> {
        check_dir(&self.build_dir)?;
        check_dir(&self.cache_dir)
    }
}

fn check_dir(path: &Path) -> Result<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(StowawayError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: "not a directory".into(),
        }),
        Err(e) => Err(StowawayError::InvalidDirectory {
            path: path.to_path_buf(),
            reason: e.to_string(),
        }),
    }
}
