//! Compile command implementation.
//!
//! `stowaway compile <BUILD_DIR> <CACHE_DIR>` restores cached dependencies
//! and applies the NuGet cache policy.

use crate::cli::args::CompileArgs;
use crate::compile::Compiler;
use crate::config::{CompileConfig, PackageCachePolicy};
use crate::error::Result;
use crate::ui::BuildLog;

use super::dispatcher::{Command, CommandResult};

/// The compile command implementation.
pub struct CompileCommand {
    args: CompileArgs,
}

impl CompileCommand {
    /// Create a new compile command.
    pub fn new(args: CompileArgs) -> Self {
        Self { args }
    }

    /// Build the compile configuration from the arguments.
    pub fn config(&self) -> CompileConfig {
        let policy = PackageCachePolicy::from_flag(self.args.cache_nuget_packages.as_deref());
        CompileConfig::new(&self.args.build_dir, &self.args.cache_dir)
            .with_package_cache(policy)
            .with_dry_run(self.args.dry_run)
    }
}

impl Command for CompileCommand {
    fn execute(&self, log: &mut dyn BuildLog) -> Result<CommandResult> {
        let config = self.config();
        if let Err(e) = config.validate() {
            log.error(&e.to_string());
            return Err(e);
        }

        let report = Compiler::new(config).run(log)?;

        if self.args.json {
            let json = report.to_json().map_err(|e| {
                log.error(&format!("Unable to render report: {}", e));
                e
            })?;
            log.output(&json);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StowawayError;
    use crate::ui::MockLog;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn args(build: PathBuf, cache: PathBuf) -> CompileArgs {
        CompileArgs {
            build_dir: build,
            cache_dir: cache,
            cache_nuget_packages: None,
            dry_run: false,
            json: false,
        }
    }

    #[test]
    fn config_reads_flag() {
        let mut a = args("/b".into(), "/c".into());
        a.cache_nuget_packages = Some("false".into());
        let config = CompileCommand::new(a).config();
        assert_eq!(config.package_cache, PackageCachePolicy::Clear);
        assert!(!config.dry_run);
    }

    #[test]
    fn config_without_flag_keeps() {
        let config = CompileCommand::new(args("/b".into(), "/c".into())).config();
        assert_eq!(config.package_cache, PackageCachePolicy::Keep);
    }

    #[test]
    fn missing_build_dir_is_logged() {
        let cache = TempDir::new().unwrap();
        let missing = cache.path().join("missing");
        let mut log = MockLog::new();

        let err = CompileCommand::new(args(missing, cache.path().to_path_buf()))
            .execute(&mut log)
            .unwrap_err();

        assert!(matches!(err, StowawayError::InvalidDirectory { .. }));
        assert_eq!(log.errors().len(), 1);
        assert!(log.steps().is_empty());
    }

    #[test]
    fn executes_pipeline() {
        let build = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        for name in [".dotnet", ".node", "libunwind", ".nuget"] {
            fs::create_dir(cache.path().join(name)).unwrap();
        }
        let mut a = args(build.path().to_path_buf(), cache.path().to_path_buf());
        a.cache_nuget_packages = Some("false".into());
        let mut log = MockLog::new();

        let result = CompileCommand::new(a).execute(&mut log).unwrap();

        assert!(result.success);
        assert!(!cache.path().join(".nuget").exists());
        assert_eq!(log.steps().len(), 2);
        assert!(log.outputs().is_empty());
    }

    #[test]
    fn json_report_goes_through_log() {
        let build = TempDir::new().unwrap();
        let cache = TempDir::new().unwrap();
        for name in [".dotnet", ".node", "libunwind"] {
            fs::create_dir(cache.path().join(name)).unwrap();
        }
        let mut a = args(build.path().to_path_buf(), cache.path().to_path_buf());
        a.json = true;
        let mut log = MockLog::new();

        CompileCommand::new(a).execute(&mut log).unwrap();

        let outputs = log.outputs();
        assert_eq!(outputs.len(), 1);
        let report: serde_json::Value = serde_json::from_str(outputs[0]).unwrap();
        assert_eq!(report["restored"][2], "libunwind");
        assert_eq!(log.entries().last().unwrap().level, crate::ui::LogLevel::Output);
    }
}
