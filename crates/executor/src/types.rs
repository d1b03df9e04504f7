//! Types carried by commands and outputs.
//!
//! Resource types come from `consolemock-core` and are re-exported here so
//! callers only need this crate. The `*Item` types pair a listed resource
//! with the metrics synthesized for it.

use serde::{Deserialize, Serialize};

pub use consolemock_core::{
    Address, AddressInput, AddressInputSpec, AddressPlan, AddressSpace, AddressSpaceInput,
    AddressSpaceInputSpec, AddressSpacePlan, AddressSpaceType, AddressType, Connection, Link,
    LinkRole, Metric, MetricType, Namespace, ObjectKey, Page, PatchType,
};

/// An address space with its connection and address counts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpaceItem {
    /// The stored address space
    pub resource: AddressSpace,
    /// `enmasse-connections` and `enmasse-addresses`
    pub metrics: Vec<Metric>,
}

/// An address with its traffic metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressItem {
    /// The stored address
    pub resource: Address,
    /// Stored, sender, receiver and throughput metrics
    pub metrics: Vec<Metric>,
}

/// A connection with its throughput metrics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConnectionItem {
    /// The stored connection
    pub resource: Connection,
    /// Inbound and outbound rates
    pub metrics: Vec<Metric>,
}

/// A link with metrics shaped by how it was listed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkItem {
    /// The stored link
    pub resource: Link,
    /// Traffic metrics under an address, delivery counters under a connection
    pub metrics: Vec<Metric>,
}
