//! Error types for organization domain validation.

use thiserror::Error;

/// Errors returned while constructing organization domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrganizationDomainError {
    /// The organization name is empty after trimming.
    #[error("organization name must not be empty")]
    EmptyName,

    /// The slug is empty after trimming.
    #[error("organization slug must not be empty")]
    EmptySlug,

    /// The slug contains characters outside `[a-z0-9-]`.
    #[error(
        "organization slug '{0}' contains invalid characters (only lowercase alphanumeric and hyphens allowed)"
    )]
    InvalidSlug(String),

    /// The slug exceeds the 100-character limit.
    #[error("organization slug exceeds 100 character limit: {0}")]
    SlugTooLong(String),
}
