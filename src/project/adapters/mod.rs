//! Adapter implementations of the project gateway port.

pub mod memory;
pub mod wire;
