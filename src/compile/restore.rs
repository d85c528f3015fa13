//! Restoring dependency directories from the buildpack cache.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::ui::BuildLog;

use super::layout::DEPENDENCY_DIRS;

/// Step message announced before the first directory is moved.
pub const RESTORE_STEP: &str = "Restoring files from buildpack cache";

/// Moves cached dependency directories into the build directory.
///
/// Each directory is relocated with a single `rename`, so the cache loses
/// the entry as the build directory gains it. The first failure stops the
/// restore; directories moved before it stay in the build directory.
#[derive(Debug, Clone)]
pub struct CacheRestorer {
    cache_dir: PathBuf,
    build_dir: PathBuf,
    dependencies: &'static [&'static str],
}

/// Planned relocation of one dependency directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedMove {
    pub name: &'static str,
    pub from: PathBuf,
    pub to: PathBuf,
    /// Whether an entry of that name currently exists in the cache.
    pub present: bool,
}

impl CacheRestorer {
    /// Create a restorer over [`DEPENDENCY_DIRS`].
    pub fn new(cache_dir: impl Into<PathBuf>, build_dir: impl Into<PathBuf>) -> Self {
        Self {
            cache_dir: cache_dir.into(),
            build_dir: build_dir.into(),
            dependencies: DEPENDENCY_DIRS,
        }
    }

    /// Restore a different fixed set of directories.
    pub fn with_dependencies(mut self, dependencies: &'static [&'static str]) -> Self {
        self.dependencies = dependencies;
        self
    }

    /// The directories this restorer moves, in order.
    pub fn dependencies(&self) -> &'static [&'static str] {
        self.dependencies
    }

    /// Move every dependency directory from the cache into the build directory.
    ///
    /// Returns the names that were moved, in order. The underlying
    /// `io::Error` of the first failed move is returned as is.
    pub fn restore(&self, log: &mut dyn BuildLog) -> io::Result<Vec<String>> {
        log.begin_step(RESTORE_STEP);

        let mut restored = Vec::with_capacity(self.dependencies.len());
        for name in self.dependencies {
            let from = self.cache_dir.join(name);
            let to = self.build_dir.join(name);
            fs::rename(&from, &to)?;
            debug!("Restored {} to {}", from.display(), to.display());
            restored.push((*name).to_string());
        }

        Ok(restored)
    }

    /// Describe what [`restore`](Self::restore) would do, without moving anything.
    ///
    /// Presence is probed the same way the package cache is: "not found" is
    /// absent, any other probe failure is returned.
    pub fn plan(&self) -> io::Result<Vec<PlannedMove>> {
        self.dependencies
            .iter()
            .map(|&name| {
                let from = self.cache_dir.join(name);
                Ok(PlannedMove {
                    name,
                    present: from.try_exists()?,
                    to: self.build_dir.join(name),
                    from,
                })
            })
            .collect()
    }
}
