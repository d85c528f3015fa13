//! Error types for Stowaway operations.
//!
//! This module defines [`StowawayError`], the error returned by the compile
//! pipeline and the CLI, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - The restore and clean steps return plain [`std::io::Error`]s so the
//!   filesystem failure reaches the caller untouched
//! - The pipeline wraps that error once, in a variant whose message is the
//!   line written to the build log, keeping the original as its `source()`

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Stowaway operations.
#[derive(Debug, Error)]
pub enum StowawayError {
    /// Moving a dependency directory out of the cache failed.
    #[error("Unable to restore buildpack cache: {0}")]
    RestoreCache(#[source] io::Error),

    /// Probing or removing the NuGet package cache failed.
    #[error("Unable to clear NuGet packages cache: {0}")]
    ClearPackageCache(#[source] io::Error),

    /// A directory handed to the CLI is unusable.
    #[error("Invalid directory {path}: {reason}")]
    InvalidDirectory { path: PathBuf, reason: String },

    /// Failed to render the compile report.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl StowawayError {
    /// The kind of the underlying filesystem error, if there is one.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::RestoreCache(e) | Self::ClearPackageCache(e) => Some(e.kind()),
            _ => None,
        }
    }
}

/// Result type alias for Stowaway operations.
pub type Result<T> = std::result::Result<T, StowawayError>;
