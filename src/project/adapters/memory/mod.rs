//! In-memory project gateway for tests and local wiring.

mod project;

pub use project::InMemoryProjectGateway;
