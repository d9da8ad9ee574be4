//! Envelope returned by every remote mutation.

use serde::Serialize;

/// Outcome of a remote mutation.
///
/// `success == false` is authoritative: the caller must surface `errors`
/// and must not apply the change locally, even when the local transition
/// policy allowed the attempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MutationResponse<T> {
    success: bool,
    errors: Vec<String>,
    entity: Option<T>,
}

impl<T> MutationResponse<T> {
    /// Creates a successful response carrying the mutated entity.
    #[must_use]
    pub const fn succeeded(entity: T) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            entity: Some(entity),
        }
    }

    /// Creates a rejected response carrying the remote error messages.
    #[must_use]
    pub fn rejected(errors: impl IntoIterator<Item = String>) -> Self {
        Self {
            success: false,
            errors: errors.into_iter().collect(),
            entity: None,
        }
    }

    /// Creates a response from raw envelope fields.
    #[must_use]
    pub const fn from_parts(success: bool, errors: Vec<String>, entity: Option<T>) -> Self {
        Self {
            success,
            errors,
            entity,
        }
    }

    /// Returns `true` when the remote side applied the mutation.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.success
    }

    /// Returns the remote error messages.
    #[must_use]
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Returns the mutated entity, if the remote side sent one back.
    #[must_use]
    pub const fn entity(&self) -> Option<&T> {
        self.entity.as_ref()
    }

    /// Consumes the response, returning the error messages.
    #[must_use]
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
