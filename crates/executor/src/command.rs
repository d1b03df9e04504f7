//! Command enum defining every console operation.
//!
//! Commands are the instruction set of the console mock. Every query and
//! mutation a client can issue is represented as a variant of this enum.
//!
//! Commands are:
//! - **Self-contained**: All parameters needed for execution are in the variant
//! - **Serializable**: Can be converted to/from JSON for the CLI runner
//! - **Typed**: No generic fallback, every operation has explicit types

use serde::{Deserialize, Serialize};

use crate::types::*;

/// A command is a self-contained, serializable operation.
///
/// # Command Categories
///
/// | Category | Count | Description |
/// |----------|-------|-------------|
/// | Catalog | 6 | Namespaces, type enumerations, plans |
/// | Lists | 3 | Paged address spaces, addresses, connections |
/// | Nested lists | 3 | Connections of a space, links of an address or connection |
/// | Mutations | 6 | Create, patch and delete address spaces and addresses |
///
/// # Paging
///
/// List commands take optional `first` (page size, non-positive means
/// unlimited) and `offset` (start index, non-positive means zero).
///
/// # Example
///
/// ```
/// use consolemock_executor::Command;
///
/// let cmd: Command = serde_json::from_str(
///     r#"{"Addresses": {"namespace": "app1_ns", "address_space": "jupiter_as1", "first": 5}}"#,
/// )
/// .unwrap();
/// assert!(!cmd.is_mutation());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub enum Command {
    // ==================== Catalog (6) ====================
    /// Liveness probe.
    /// Returns: `Output::Text("world")`
    Hello,

    /// List namespaces.
    /// Returns: `Output::Namespaces`
    Namespaces,

    /// List address types.
    /// Returns: `Output::AddressTypes`
    AddressTypes,

    /// List address space types.
    /// Returns: `Output::AddressSpaceTypes`
    AddressSpaceTypes,

    /// List address space plans by display order, optionally of one
    /// address space type (`standard`, `brokered`). An unknown type name
    /// lists no plans.
    /// Returns: `Output::AddressSpacePlans`
    AddressSpacePlans {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_space_type: Option<String>,
    },

    /// List address plans, optionally those of one address space plan.
    /// Returns: `Output::AddressPlans`
    AddressPlans {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_space_plan: Option<String>,
    },

    // ==================== Lists (3) ====================
    /// List address spaces with their metrics.
    /// Returns: `Output::AddressSpacePage`
    AddressSpaces {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    /// List addresses with their metrics.
    /// Returns: `Output::AddressPage`
    Addresses {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_space: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    /// List connections with their metrics.
    /// Returns: `Output::ConnectionPage`
    Connections {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        namespace: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_space: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    // ==================== Nested lists (3) ====================
    /// List the connections of one address space.
    /// Returns: `Output::ConnectionPage`
    AddressSpaceConnections {
        key: ObjectKey,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    /// List the links of the address space owning an address.
    /// Returns: `Output::LinkPage` (traffic metrics)
    AddressLinks {
        key: ObjectKey,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    /// List the links of one connection.
    /// Returns: `Output::LinkPage` (delivery metrics)
    ConnectionLinks {
        container_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first: Option<i64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        offset: Option<i64>,
    },

    // ==================== Mutations (6) ====================
    /// Create an address space.
    /// Returns: `Output::AddressSpace`
    CreateAddressSpace { input: AddressSpaceInput },

    /// Apply a JSON Patch document to an address space.
    /// Returns: `Output::AddressSpace`
    PatchAddressSpace {
        input: ObjectKey,
        json_patch: String,
        patch_type: String,
    },

    /// Delete an address space. Its addresses and connections remain.
    /// Returns: `Output::Deleted`
    DeleteAddressSpace { input: ObjectKey },

    /// Create an address.
    /// Returns: `Output::Address`
    CreateAddress { input: AddressInput },

    /// Apply a JSON Patch document to an address.
    /// Returns: `Output::Address`
    PatchAddress {
        input: ObjectKey,
        json_patch: String,
        patch_type: String,
    },

    /// Delete an address.
    /// Returns: `Output::Deleted`
    DeleteAddress { input: ObjectKey },
}

impl Command {
    /// Whether this command changes console state
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Command::CreateAddressSpace { .. }
                | Command::PatchAddressSpace { .. }
                | Command::DeleteAddressSpace { .. }
                | Command::CreateAddress { .. }
                | Command::PatchAddress { .. }
                | Command::DeleteAddress { .. }
        )
    }

    /// Variant name, for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "Hello",
            Command::Namespaces => "Namespaces",
            Command::AddressTypes => "AddressTypes",
            Command::AddressSpaceTypes => "AddressSpaceTypes",
            Command::AddressSpacePlans { .. } => "AddressSpacePlans",
            Command::AddressPlans { .. } => "AddressPlans",
            Command::AddressSpaces { .. } => "AddressSpaces",
            Command::Addresses { .. } => "Addresses",
            Command::Connections { .. } => "Connections",
            Command::AddressSpaceConnections { .. } => "AddressSpaceConnections",
            Command::AddressLinks { .. } => "AddressLinks",
            Command::ConnectionLinks { .. } => "ConnectionLinks",
            Command::CreateAddressSpace { .. } => "CreateAddressSpace",
            Command::PatchAddressSpace { .. } => "PatchAddressSpace",
            Command::DeleteAddressSpace { .. } => "DeleteAddressSpace",
            Command::CreateAddress { .. } => "CreateAddress",
            Command::PatchAddress { .. } => "PatchAddress",
            Command::DeleteAddress { .. } => "DeleteAddress",
        }
    }
}
