//! Organizations: the tenants that own projects.
//!
//! Organizations are addressed externally by their slug. The module only
//! holds snapshot types; fetching is done through the project gateway.

pub mod domain;

#[cfg(test)]
mod tests;
