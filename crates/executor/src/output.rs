//! Output enum for command execution results.
//!
//! Every command produces exactly one output type. The mapping is fixed:
//! the same command always produces the same output variant (though the
//! values differ with console state and the random source).

use serde::{Deserialize, Serialize};

use crate::types::*;

/// Successful command execution results.
///
/// Each [`Command`](crate::Command) variant maps to exactly one `Output` variant.
///
/// # Example
///
/// ```
/// use consolemock_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::seeded(1).unwrap();
/// match executor.execute(Command::Hello).unwrap() {
///     Output::Text(text) => assert_eq!(text, "world"),
///     _ => unreachable!("Hello always returns Text"),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Output {
    // ==================== Scalars ====================
    /// Plain text (hello)
    Text(String),

    /// The resource was removed
    Deleted,

    // ==================== Catalog ====================
    /// Namespaces
    Namespaces(Vec<Namespace>),

    /// Address types
    AddressTypes(Vec<AddressType>),

    /// Address space types
    AddressSpaceTypes(Vec<AddressSpaceType>),

    /// Address space plans
    AddressSpacePlans(Vec<AddressSpacePlan>),

    /// Address plans
    AddressPlans(Vec<AddressPlan>),

    // ==================== Pages ====================
    /// Address spaces with metrics
    AddressSpacePage(Page<AddressSpaceItem>),

    /// Addresses with metrics
    AddressPage(Page<AddressItem>),

    /// Connections with metrics
    ConnectionPage(Page<ConnectionItem>),

    /// Links with metrics
    LinkPage(Page<LinkItem>),

    // ==================== Single resources ====================
    /// A created or patched address space
    AddressSpace(AddressSpace),

    /// A created or patched address
    Address(Address),
}
