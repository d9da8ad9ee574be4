//! Tasks and their status lifecycle.
//!
//! Tasks are owned by the remote API; this module reads snapshots, decides
//! which status changes to offer, and submits changes for the API to
//! accept or refuse. The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The client-side transition table in [`policy`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod policy;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
