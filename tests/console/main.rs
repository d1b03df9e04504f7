//! Console API Tests
//!
//! End-to-end tests through the public facade:
//! - Command dispatch over the fixture data
//! - Invariants that must hold after any sequence of mutations
//! - Error categories and atomicity of rejected mutations

mod common;

mod command_dispatch;
mod error_handling;
mod invariants;
