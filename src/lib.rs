//! Stowaway - Buildpack cache restoration.
//!
//! Stowaway runs during a buildpack's compile phase. It moves the runtime
//! dependencies saved by the previous build (`.dotnet`, `.node`,
//! `libunwind`) from the cache directory back into the build directory and
//! clears the NuGet package cache when `CACHE_NUGET_PACKAGES=false`.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`compile`] - Cache restoration and package cache cleaning
//! - [`config`] - Compile configuration and the package cache policy
//! - [`error`] - Error types and result aliases
//! - [`ui`] - The build log sink and its implementations
//!
//! # Example
//!
//! ```
//! use stowaway::compile::{PackageCacheCleaner, PackageCacheOutcome};
//! use stowaway::config::PackageCachePolicy;
//! use stowaway::ui::MockLog;
//!
//! let cache = tempfile::tempdir().unwrap();
//! let mut log = MockLog::new();
//! let outcome = PackageCacheCleaner::new(cache.path())
//!     .clean(PackageCachePolicy::Clear, &mut log)
//!     .unwrap();
//!
//! assert_eq!(outcome, PackageCacheOutcome::Absent);
//! assert!(log.is_empty());
//! ```

pub mod cli;
pub mod compile;
pub mod config;
pub mod error;
pub mod ui;

pub use error::{Result, StowawayError};
