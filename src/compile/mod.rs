//! The cache restoration step of the compile phase.
//!
//! A compile run is two steps, in order:
//!
//! 1. [`CacheRestorer`] moves the cached runtime dependencies into the build
//!    directory.
//! 2. [`PackageCacheCleaner`] removes the NuGet package cache when
//!    `CACHE_NUGET_PACKAGES=false`.
//!
//! [`Compiler::run`] stops at the first failing step, writes one error line
//! to the build log and returns the failure.
//!
//! # Example
//!
//! ```
//! use stowaway::compile::Compiler;
//! use stowaway::config::{CompileConfig, PackageCachePolicy};
//! use stowaway::ui::MockLog;
//!
//! let build = tempfile::tempdir().unwrap();
//! let cache = tempfile::tempdir().unwrap();
//! for name in [".dotnet", ".node", "libunwind"] {
//!     std::fs::create_dir(cache.path().join(name)).unwrap();
//! }
//!
//! let config = CompileConfig::new(build.path(), cache.path())
//!     .with_package_cache(PackageCachePolicy::Clear);
//! let mut log = MockLog::new();
//! let report = Compiler::new(config).run(&mut log).unwrap();
//!
//! assert_eq!(report.restored, vec![".dotnet", ".node", "libunwind"]);
//! ```

pub mod clean;
pub mod layout;
pub mod report;
pub mod restore;

pub use clean::{PackageCacheCleaner, PackageCacheOutcome, CLEAR_STEP};
pub use layout::{DEPENDENCY_DIRS, PACKAGE_CACHE_DIR};
pub use report::CompileReport;
pub use restore::{CacheRestorer, PlannedMove, RESTORE_STEP};

use tracing::debug;

use crate::config::CompileConfig;
use crate::error::{Result, StowawayError};
use crate::ui::BuildLog;

/// Runs the cache restoration step for one build.
#[derive(Debug, Clone)]
pub struct Compiler {
    config: CompileConfig,
    restorer: CacheRestorer,
    cleaner: PackageCacheCleaner,
}

impl Compiler {
    /// Create a compiler over the standard cache layout.
    pub fn new(config: CompileConfig) -> Self {
        let restorer = CacheRestorer::new(&config.cache_dir, &config.build_dir);
        let cleaner = PackageCacheCleaner::new(&config.cache_dir);
        Self {
            config,
            restorer,
            cleaner,
        }
    }

    /// Restore a different fixed set of dependency directories.
    pub fn with_dependencies(mut self, dependencies: &'static [&'static str]) -> Self {
        self.restorer = self.restorer.with_dependencies(dependencies);
        self
    }

    /// Use a differently named package cache directory.
    pub fn with_package_cache_dir(mut self, dir_name: &'static str) -> Self {
        self.cleaner = self.cleaner.with_dir_name(dir_name);
        self
    }

    /// Run the step, or only describe it when the config asks for a dry run.
    pub fn run(&self, log: &mut dyn BuildLog) -> Result<CompileReport> {
        if self.config.dry_run {
            return self.plan(log);
        }

        debug!(
            "Compiling with build dir {} and cache dir {}",
            self.config.build_dir.display(),
            self.config.cache_dir.display()
        );

        let restored = self.restorer.restore(log).map_err(|e| {
            log.error(&format!("Unable to restore buildpack cache: {}", e));
            StowawayError::RestoreCache(e)
        })?;

        let package_cache = self
            .cleaner
            .clean(self.config.package_cache, log)
            .map_err(|e| {
                log.error(&format!("Unable to clear NuGet packages cache: {}", e));
                StowawayError::ClearPackageCache(e)
            })?;

        Ok(CompileReport {
            build_dir: self.config.build_dir.clone(),
            cache_dir: self.config.cache_dir.clone(),
            restored,
            missing: Vec::new(),
            package_cache,
            dry_run: false,
        })
    }

    /// Describe what [`run`](Self::run) would do without touching the filesystem.
    ///
    /// Missing dependencies are reported as warnings instead of failing.
    pub fn plan(&self, log: &mut dyn BuildLog) -> Result<CompileReport> {
        log.begin_step("Dry run: no files will be moved or removed");

        let planned_moves = self.restorer.plan().map_err(|e| {
            log.error(&format!("Unable to restore buildpack cache: {}", e));
            StowawayError::RestoreCache(e)
        })?;

        let mut restored = Vec::new();
        let mut missing = Vec::new();
        for planned in planned_moves {
            if planned.present {
                log.info(&format!("Would restore {}", planned.name));
                restored.push(planned.name.to_string());
            } else {
                log.warning(&format!("Missing from buildpack cache: {}", planned.name));
                missing.push(planned.name.to_string());
            }
        }

        let package_cache = self
            .cleaner
            .plan(self.config.package_cache)
            .map_err(|e| {
                log.error(&format!("Unable to clear NuGet packages cache: {}", e));
                StowawayError::ClearPackageCache(e)
            })?;
        if package_cache == PackageCacheOutcome::Cleared {
            log.info("Would clear NuGet packages cache");
        }

        Ok(CompileReport {
            build_dir: self.config.build_dir.clone(),
            cache_dir: self.config.cache_dir.clone(),
            restored,
            missing,
            package_cache,
            dry_run: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PackageCachePolicy;
    use crate::ui::{LogLevel, MockLog};
    use std::fs;
    use tempfile::TempDir;

    fn setup(names: &[&str]) -> (TempDir, TempDir) {
        let build = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        for name in names {
            fs::create_dir_all(cache.path().join(name)).unwrap();
        }
        (build, cache)
    }

    #[test]
    fn runs_both_steps_in_order() {
        let (build, cache) = setup(&[".dotnet", ".node", "libunwind", ".nuget"]);
        let config = CompileConfig::new(build.path(), cache.path())
            .with_package_cache(PackageCachePolicy::Clear);
        let mut log = MockLog::new();

        let report = Compiler::new(config).run(&mut log).unwrap();

        assert_eq!(log.steps(), vec![RESTORE_STEP, CLEAR_STEP]);
        assert_eq!(report.package_cache, PackageCacheOutcome::Cleared);
        assert!(report.missing.is_empty());
        assert!(!report.dry_run);
        assert!(!cache.path().join(".nuget").exists());
    }

    #[test]
    fn restore_failure_skips_cleaning() {
        let (build, cache) = setup(&[".dotnet", ".nuget"]);
        let config = CompileConfig::new(build.path(), cache.path())
            .with_package_cache(PackageCachePolicy::Clear);
        let mut log = MockLog::new();

        let err = Compiler::new(config).run(&mut log).unwrap_err();

        assert!(matches!(err, StowawayError::RestoreCache(_)));
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
        assert!(cache.path().join(".nuget").is_dir());
        assert!(!log.has_step(CLEAR_STEP));
        assert_eq!(log.errors().len(), 1);
        assert!(log.has_error("Unable to restore buildpack cache: "));
        assert_eq!(log.entries().last().unwrap().level, LogLevel::Error);
    }

    #[test]
    fn logged_error_matches_returned_error() {
        let (build, cache) = setup(&[]);
        let mut log = MockLog::new();

        let err = Compiler::new(CompileConfig::new(build.path(), cache.path()))
            .run(&mut log)
            .unwrap_err();

        assert_eq!(log.errors(), vec![err.to_string().as_str()]);
    }

    #[cfg(unix)]
    #[test]
    fn clean_failure_is_reported() {
        use std::os::unix::fs::PermissionsExt;

        // SAFETY: geteuid() is a simple syscall that returns the effective user ID
        if unsafe { libc::geteuid() } == 0 {
            // Root can delete from read-only directories.
            return;
        }

        let (build, cache) = setup(&[".dotnet", ".node", "libunwind"]);
        let locked = cache.path().join(".nuget").join("locked");
        fs::create_dir_all(&locked).unwrap();
        fs::write(locked.join("pkg"), "x").unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o555)).unwrap();

        let config = CompileConfig::new(build.path(), cache.path())
            .with_package_cache(PackageCachePolicy::Clear);
        let mut log = MockLog::new();
        let result = Compiler::new(config).run(&mut log);

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        let err = result.unwrap_err();
        assert!(matches!(err, StowawayError::ClearPackageCache(_)));
        assert!(log.has_error("Unable to clear NuGet packages cache: "));
        assert!(build.path().join("libunwind").is_dir());
    }

    #[test]
    fn dry_run_touches_nothing() {
        let (build, cache) = setup(&[".dotnet", "libunwind", ".nuget"]);
        let config = CompileConfig::new(build.path(), cache.path())
            .with_package_cache(PackageCachePolicy::Clear)
            .with_dry_run(true);
        let mut log = MockLog::new();

        let report = Compiler::new(config).run(&mut log).unwrap();

        assert!(report.dry_run);
        assert_eq!(report.restored, vec![".dotnet", "libunwind"]);
        assert_eq!(report.missing, vec![".node"]);
        assert_eq!(report.package_cache, PackageCacheOutcome::Cleared);
        assert!(cache.path().join(".dotnet").is_dir());
        assert!(cache.path().join(".nuget").is_dir());
        assert!(!build.path().join(".dotnet").exists());
        assert_eq!(log.warnings(), vec!["Missing from buildpack cache: .node"]);
        assert!(log.infos().contains(&"Would clear NuGet packages cache"));
    }

    #[test]
    fn dry_run_matches_real_run_for_file_entries() {
        let (build, cache) = setup(&[".node", "libunwind"]);
        fs::write(cache.path().join(".dotnet"), "archive").unwrap();

        let config = CompileConfig::new(build.path(), cache.path());
        let mut log = MockLog::new();
        let planned = Compiler::new(config.clone().with_dry_run(true))
            .run(&mut log)
            .unwrap();
        assert!(planned.missing.is_empty());
        assert!(log.warnings().is_empty());

        let report = Compiler::new(config).run(&mut log).unwrap();
        assert_eq!(report.restored, planned.restored);
        assert!(build.path().join(".dotnet").is_file());
    }

    #[test]
    fn custom_layout() {
        const DEPS: &[&str] = &["depA"];
        let (build, cache) = setup(&["depA", ".pkgcache"]);
        let config = CompileConfig::new(build.path(), cache.path())
            .with_package_cache(PackageCachePolicy::Clear);
        let mut log = MockLog::new();

        Compiler::new(config)
            .with_dependencies(DEPS)
            .with_package_cache_dir(".pkgcache")
            .run(&mut log)
            .unwrap();

        assert!(build.path().join("depA").is_dir());
        assert!(!cache.path().join(".pkgcache").exists());
    }
}
