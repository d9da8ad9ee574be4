//! In-memory task gateway for tests and local wiring.

mod task;

pub use task::InMemoryTaskGateway;
