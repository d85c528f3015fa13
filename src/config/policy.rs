//! NuGet package cache policy.

use serde::Serialize;

/// Environment variable that gates clearing of the NuGet package cache.
pub const CACHE_NUGET_PACKAGES_ENV: &str = "CACHE_NUGET_PACKAGES";

/// What to do with an existing NuGet package cache.
///
/// The flag is read as "should packages stay cached": only the exact value
/// `false` asks for the cache to be cleared. Anything else, including an
/// unset variable, keeps it.
///
/// # Example
///
/// ```
/// use stowaway::config::PackageCachePolicy;
///
/// assert_eq!(PackageCachePolicy::from_flag(Some("false")), PackageCachePolicy::Clear);
/// assert_eq!(PackageCachePolicy::from_flag(Some("FALSE")), PackageCachePolicy::Keep);
/// assert_eq!(PackageCachePolicy::from_flag(None), PackageCachePolicy::Keep);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageCachePolicy {
    /// Remove the package cache if it exists.
    Clear,
    /// Leave the package cache alone.
    #[default]
    Keep,
}

impl PackageCachePolicy {
    /// Resolve the policy from the raw flag value.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some("false") => Self::Clear,
            _ => Self::Keep,
        }
    }

    /// Whether this policy asks for the cache to be cleared.
    pub fn clears(&self) -> bool {
        matches!(self, Self::Clear)
    }
}
