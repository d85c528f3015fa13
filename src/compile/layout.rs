//! Well-known names inside the cache directory.

/// Dependency directories restored from the cache, in restore order.
pub const DEPENDENCY_DIRS: &[&str] = &[".dotnet", ".node", "libunwind"];

/// NuGet package cache kept under the cache directory.
pub const PACKAGE_CACHE_DIR: &str = ".nuget";
