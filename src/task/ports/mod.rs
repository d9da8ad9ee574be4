//! Port contracts for talking to the remote task API.
//!
//! Ports define transport-agnostic interfaces used by task services.

pub mod gateway;
pub mod mutation;

pub use gateway::{TaskGateway, TaskGatewayError, TaskGatewayResult};
pub use mutation::MutationResponse;

#[cfg(test)]
pub use gateway::MockTaskGateway;
