//! Validated organization slug, the routing key for an organization.

use super::OrganizationDomainError;
use serde::Serialize;
use std::fmt;

/// Maximum slug length, matching the upstream `SlugField(max_length=100)`.
const MAX_SLUG_LENGTH: usize = 100;

/// Lowercase alphanumeric-plus-hyphens organization identifier.
///
/// # Examples
///
/// ```
/// use taskboard::organization::domain::OrganizationSlug;
///
/// let slug = OrganizationSlug::from_name("Acme Widgets, Inc.").expect("valid");
/// assert_eq!(slug.as_str(), "acme-widgets-inc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OrganizationSlug(String);

impl OrganizationSlug {
    /// Creates a validated slug.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9-]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::EmptySlug`] when the value is empty
    /// after trimming, [`OrganizationDomainError::InvalidSlug`] when it
    /// contains other characters, or [`OrganizationDomainError::SlugTooLong`]
    /// when it exceeds 100 characters.
    pub fn new(value: impl Into<String>) -> Result<Self, OrganizationDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(OrganizationDomainError::EmptySlug);
        }

        if normalized.len() > MAX_SLUG_LENGTH {
            return Err(OrganizationDomainError::SlugTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');

        if !is_valid {
            return Err(OrganizationDomainError::InvalidSlug(raw));
        }

        Ok(Self(normalized))
    }

    /// Derives a slug from a display name.
    ///
    /// Runs of characters outside `[a-z0-9]` collapse into a single hyphen
    /// and leading or trailing hyphens are dropped.
    ///
    /// # Errors
    ///
    /// Returns [`OrganizationDomainError::EmptySlug`] when the name has no
    /// alphanumeric characters, or [`OrganizationDomainError::SlugTooLong`]
    /// when the derived slug exceeds 100 characters.
    pub fn from_name(name: &str) -> Result<Self, OrganizationDomainError> {
        let mut slug = String::with_capacity(name.len());
        let mut pending_hyphen = false;
        for c in name.chars() {
            if c.is_ascii_alphanumeric() {
                if pending_hyphen && !slug.is_empty() {
                    slug.push('-');
                }
                pending_hyphen = false;
                slug.push(c.to_ascii_lowercase());
            } else {
                pending_hyphen = true;
            }
        }
        Self::new(slug)
    }

    /// Returns the slug as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for OrganizationSlug {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for OrganizationSlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
