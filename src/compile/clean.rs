//! Clearing the NuGet package cache.

use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;
use tracing::debug;

use crate::config::PackageCachePolicy;
use crate::ui::BuildLog;

use super::layout::PACKAGE_CACHE_DIR;

/// Step message announced right before the package cache is removed.
pub const CLEAR_STEP: &str = "Clearing NuGet packages cache";

/// What happened to the package cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCacheOutcome {
    /// There was no package cache to clean.
    Absent,
    /// The cache exists and the policy kept it.
    Retained,
    /// The cache was removed.
    Cleared,
}

/// Removes the package cache under the cache directory when asked to.
#[derive(Debug, Clone)]
pub struct PackageCacheCleaner {
    cache_dir: PathBuf,
    dir_name: &'static str,
}

impl PackageCacheCleaner {
    /// Create a cleaner for `<cache_dir>/.nuget`.
    pub fn new(cache_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            dir_name: PACKAGE_CACHE_DIR,
        }
    }

    /// Clean a differently named package cache directory.
    pub fn with_dir_name(mut self, dir_name: &'static str) -> Self {
        self.dir_name = dir_name;
        self
    }

    /// Full path of the package cache.
    pub fn path(&self) -> PathBuf {
        self.cache_dir.join(self.dir_name)
    }

    /// Check whether the package cache exists.
    ///
    /// "Not found" is `Ok(false)`; any other probe failure is an error.
    pub fn exists(&self) -> io::Result<bool> {
        self.path().try_exists()
    }

    /// Decide what [`clean`](Self::clean) would do, without removing anything.
    pub fn plan(&self, policy: PackageCachePolicy) -> io::Result<PackageCacheOutcome> {
        if !self.exists()? {
            return Ok(PackageCacheOutcome::Absent);
        }
        Ok(if policy.clears() {
            PackageCacheOutcome::Cleared
        } else {
            PackageCacheOutcome::Retained
        })
    }

    /// Remove the package cache if it exists and the policy says to.
    ///
    /// Only the clearing branch writes to the log.
    pub fn clean(
        &self,
        policy: PackageCachePolicy,
        log: &mut dyn BuildLog,
    ) -> io::Result<PackageCacheOutcome> {
        let path = self.path();

        if !path.try_exists()? {
            debug!("No package cache at {}", path.display());
            return Ok(PackageCacheOutcome::Absent);
        }

        if !policy.clears() {
            debug!("Keeping package cache at {}", path.display());
            return Ok(PackageCacheOutcome::Retained);
        }

        log.begin_step(CLEAR_STEP);
        fs::remove_dir_all(&path)?;
        Ok(PackageCacheOutcome::Cleared)
    }
}
