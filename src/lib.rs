//! consolemock - in-memory mock of a messaging platform management API
//!
//! The mock serves the catalog (namespaces, plans, types), address spaces,
//! addresses, connections and links of a multi-tenant messaging platform,
//! with synthesized metrics, so a management front end can be developed
//! without the real backend.
//!
//! # Quick Start
//!
//! ```
//! use consolemock::{Command, Executor, Output};
//!
//! // Fixture data with a reproducible random source
//! let mut executor = Executor::seeded(42).unwrap();
//!
//! let output = executor
//!     .execute(Command::Connections {
//!         namespace: Some("app1_ns".into()),
//!         address_space: None,
//!         first: Some(10),
//!         offset: None,
//!     })
//!     .unwrap();
//! match output {
//!     Output::ConnectionPage(page) => {
//!         assert_eq!(page.total, 22);
//!         assert_eq!(page.items.len(), 10);
//!     }
//!     _ => unreachable!(),
//! }
//! ```
//!
//! # Architecture
//!
//! All operations go through the [`Executor`], which dispatches serializable
//! [`Command`]s to the console engine. The engine itself (store, index,
//! metric synthesis) is not exposed; only the executor API is public.

// Re-export the public API from consolemock-executor
pub use consolemock_executor::*;
