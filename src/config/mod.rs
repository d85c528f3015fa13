//! Compile configuration.
//!
//! The staging framework hands Stowaway two directories and an environment.
//! This module turns those into plain values so the compile steps never read
//! process state themselves.
//!
//! - [`PackageCachePolicy`] - whether the NuGet cache should be cleared
//! - [`CompileConfig`] - everything one compile run needs

pub mod policy;
pub mod settings;

pub use policy::{PackageCachePolicy, CACHE_NUGET_PACKAGES_ENV};
pub use settings::CompileConfig;
