//! Projects and the organization overview.
//!
//! Projects are read-only snapshots grouped under an organization. The
//! overview service combines them with derived completion, deadline and
//! affordance metrics.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
