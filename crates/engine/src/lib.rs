//! Engine for the console mock
//!
//! This crate holds the state and behavior behind every command:
//! - Catalog: namespaces and plans (read-only)
//! - ResourceStore: ordered address spaces, addresses, connections, links
//! - RelationshipIndex: connections per space, round-robin link assignment
//! - Console: queries, mutations and metric synthesis over the above
//! - ConsoleConfig: settings loaded from `consolemock.toml`

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod catalog;
pub mod config;
pub mod console;
pub mod index;
pub mod metrics;
pub mod store;

pub use catalog::Catalog;
pub use config::{ConfigError, ConsoleConfig, CONFIG_FILE_NAME, LOG_LEVELS};
pub use console::Console;
pub use index::RelationshipIndex;
pub use metrics::QueryPath;
pub use store::{Collection, Keyed, ResourceStore};

pub use consolemock_core::{Error, Result};
