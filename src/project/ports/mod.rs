//! Port contracts for reading projects from the remote API.

pub mod gateway;

pub use gateway::{ProjectGateway, ProjectGatewayError, ProjectGatewayResult};

#[cfg(test)]
pub use gateway::MockProjectGateway;
