//! # Console Mock Executor
//!
//! The public API of the console mock: an in-memory stand-in for the
//! management API of a multi-tenant messaging platform.
//!
//! This is the only crate users need to import. It provides:
//! - [`Executor`] - runs commands against an owned console
//! - [`Command`]/[`Output`] - the serializable instruction set
//! - [`Error`] - the serializable error taxonomy
//!
//! ## Quick Start
//!
//! ```
//! use consolemock_executor::{AddressSpaceInput, Command, Executor, Output};
//!
//! let mut executor = Executor::seeded(42).unwrap();
//!
//! let created = executor
//!     .execute(Command::CreateAddressSpace {
//!         input: AddressSpaceInput::new("venus", "app1_ns", "standard-small", "standard"),
//!     })
//!     .unwrap();
//! assert!(matches!(created, Output::AddressSpace(_)));
//! ```
//!
//! ## Resources
//!
//! | Resource | Key | Notes |
//! |----------|-----|-------|
//! | **AddressSpace** | (Name, Namespace) | Bound to a plan and type |
//! | **Address** | (Name, Namespace) | Name starts with `<space>.` |
//! | **Connection** | ContainerId | Seeded only |
//! | **Link** | Name | Seeded only, one per connection |

#![warn(missing_docs)]

mod command;
mod convert;
mod error;
mod executor;
mod output;
mod types;

// Handler modules
mod handlers;

// Test modules
#[cfg(test)]
mod tests;

// =============================================================================
// Public API - Everything users need is re-exported here
// =============================================================================

pub use command::Command;
pub use error::Error;
pub use executor::Executor;
pub use output::Output;
pub use types::*;

// Re-export engine types so users don't need consolemock-engine directly
pub use consolemock_engine::{Console, ConsoleConfig, CONFIG_FILE_NAME};

/// Result type for executor operations
pub type Result<T> = std::result::Result<T, Error>;
