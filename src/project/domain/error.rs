//! Error types for project domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing project snapshots.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ProjectDomainError {
    /// The project name is empty after trimming.
    #[error("project name must not be empty")]
    EmptyName,
}

/// Error returned while parsing project statuses from external input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown project status: {0}")]
pub struct ParseProjectStatusError(pub String);
