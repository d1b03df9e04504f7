//! Command handlers organized by resource.
//!
//! | Module | Commands |
//! |--------|----------|
//! | `catalog` | Hello, Namespaces, type and plan listings |
//! | `address_space` | AddressSpaces, AddressSpaceConnections, create/patch/delete |
//! | `address` | Addresses, AddressLinks, create/patch/delete |
//! | `connection` | Connections, ConnectionLinks |
//!
//! List handlers attach synthesized metrics to every item on the page.

pub mod address;
pub mod address_space;
pub mod catalog;
pub mod connection;
