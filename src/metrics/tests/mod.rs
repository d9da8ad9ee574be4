//! Unit tests for derived metrics.
