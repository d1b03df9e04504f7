//! Resource model for the console mock
//!
//! Field names serialize in the wire shape clients see (`Metadata`, `Spec`,
//! `Status`, PascalCase members) so JSON Patch pointers such as `/Spec/Plan`
//! address the same fields on both sides.
//!
//! - Catalog entries: [`Namespace`], [`AddressPlan`], [`AddressSpacePlan`]
//! - Stored resources: [`AddressSpace`], [`Address`], [`Connection`], [`Link`]
//! - Creation inputs: [`AddressSpaceInput`], [`AddressInput`]
//! - Synthesized values: [`Metric`]

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::error::Error;

/// Phase reported by every live namespace, address space and address
pub const PHASE_ACTIVE: &str = "Active";

// =============================================================================
// Keys and metadata
// =============================================================================

/// Composite key identifying an AddressSpace or Address
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectKey {
    /// Resource name
    pub name: String,
    /// Owning namespace
    pub namespace: String,
}

impl ObjectKey {
    /// Create a key
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        ObjectKey {
            name: name.into(),
            namespace: namespace.into(),
        }
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "'{}' in namespace {}", self.name, self.namespace)
    }
}

/// Metadata of a stored resource
///
/// `Uid` and `CreationTimestamp` are assigned at creation and never change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ObjectMeta {
    /// Resource name
    pub name: String,
    /// Owning namespace
    pub namespace: String,
    /// Globally unique identity
    pub uid: Uuid,
    /// Creation time
    pub creation_timestamp: DateTime<Utc>,
}

impl ObjectMeta {
    /// The composite key of this resource
    pub fn key(&self) -> ObjectKey {
        ObjectKey::new(&self.name, &self.namespace)
    }

    /// Check if this metadata carries `key`
    pub fn matches(&self, key: &ObjectKey) -> bool {
        self.name == key.name && self.namespace == key.namespace
    }
}

/// Metadata of a catalog entry (name only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CatalogMeta {
    /// Entry name
    pub name: String,
}

/// A key/value pair (connection properties)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct KeyValue {
    /// Property key
    pub key: String,
    /// Property value
    pub value: String,
}

// =============================================================================
// Enumerations
// =============================================================================

/// Kind of address space
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressSpaceType {
    /// Router plus broker infrastructure
    Standard,
    /// Broker only
    Brokered,
}

impl AddressSpaceType {
    /// Every address space type, in catalog order
    pub const ALL: [AddressSpaceType; 2] = [AddressSpaceType::Standard, AddressSpaceType::Brokered];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            AddressSpaceType::Standard => "standard",
            AddressSpaceType::Brokered => "brokered",
        }
    }
}

impl FromStr for AddressSpaceType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or_else(|| {
            Error::invalid_argument(format!(
                "unrecognised address space type '{}', known ones are: standard, brokered",
                s
            ))
        })
    }
}

impl fmt::Display for AddressSpaceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AddressType {
    /// Point-to-point, stored
    Queue,
    /// Publish/subscribe, stored
    Topic,
    /// Durable subscription on a topic
    Subscription,
    /// Routed fan-out, not stored
    Multicast,
    /// Routed to one consumer, not stored
    Anycast,
}

impl AddressType {
    /// Every address type, in catalog order
    pub const ALL: [AddressType; 5] = [
        AddressType::Queue,
        AddressType::Topic,
        AddressType::Subscription,
        AddressType::Multicast,
        AddressType::Anycast,
    ];

    /// Wire name
    pub fn as_str(self) -> &'static str {
        match self {
            AddressType::Queue => "queue",
            AddressType::Topic => "topic",
            AddressType::Subscription => "subscription",
            AddressType::Multicast => "multicast",
            AddressType::Anycast => "anycast",
        }
    }
}

impl FromStr for AddressType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL.into_iter().find(|t| t.as_str() == s).ok_or_else(|| {
            let known: Vec<&str> = Self::ALL.iter().map(|t| t.as_str()).collect();
            Error::invalid_argument(format!(
                "unrecognised address type '{}', known ones are: {}",
                s,
                known.join(", ")
            ))
        })
    }
}

impl fmt::Display for AddressType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkRole {
    /// Client sends to the address
    Sender,
    /// Client receives from the address
    Receiver,
}

/// Kind of metric value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricType {
    /// Point-in-time level
    Gauge,
    /// Monotonic count
    Counter,
    /// Per-second rate
    Rate,
}

// =============================================================================
// Catalog entries
// =============================================================================

/// A namespace tenants may create resources in
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Namespace {
    /// Name only
    pub metadata: CatalogMeta,
    /// Lifecycle status
    pub status: NamespaceStatus,
}

/// Namespace status
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct NamespaceStatus {
    /// Lifecycle phase
    pub phase: String,
}

/// Plan an address is created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressPlan {
    /// Name only
    pub metadata: CatalogMeta,
    /// Plan details
    pub spec: AddressPlanSpec,
}

/// Address plan details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressPlanSpec {
    /// Type of address this plan creates
    pub address_type: AddressType,
    /// Display name
    pub display_name: String,
    /// Display order (ascending)
    pub display_order: u32,
    /// One-line description
    pub short_description: String,
    /// Full description
    pub long_description: String,
    /// Resource name to fractional cost
    pub resources: BTreeMap<String, f64>,
}

/// Plan an address space is created with
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpacePlan {
    /// Name only
    pub metadata: CatalogMeta,
    /// Plan details
    pub spec: AddressSpacePlanSpec,
}

/// Address space plan details
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpacePlanSpec {
    /// Type of address space this plan creates
    pub address_space_type: AddressSpaceType,
    /// Address plans usable inside spaces of this plan, in order
    pub address_plans: Vec<AddressPlan>,
    /// Display name
    pub display_name: String,
    /// Display order (ascending)
    pub display_order: u32,
    /// One-line description
    pub short_description: String,
    /// Full description
    pub long_description: String,
    /// Resource name to ceiling
    pub resource_limits: BTreeMap<String, f64>,
}

// =============================================================================
// Address spaces
// =============================================================================

/// A tenant messaging instance bound to a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpace {
    /// Identity
    pub metadata: ObjectMeta,
    /// Desired state
    pub spec: AddressSpaceSpec,
    /// Observed state
    pub status: AddressSpaceStatus,
}

/// Address space desired state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpaceSpec {
    /// Resolved catalog plan
    pub plan: AddressSpacePlan,
    /// Space type
    #[serde(rename = "Type")]
    pub kind: AddressSpaceType,
}

/// Address space observed state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressSpaceStatus {
    /// Whether the space is ready for use
    pub is_ready: bool,
    /// Lifecycle phase
    pub phase: String,
    /// Status messages
    pub messages: Vec<String>,
}

impl AddressSpaceStatus {
    /// Status of a freshly created space
    pub fn active() -> Self {
        AddressSpaceStatus {
            is_ready: true,
            phase: PHASE_ACTIVE.to_string(),
            messages: Vec::new(),
        }
    }
}

impl AddressSpace {
    /// The composite key of this space
    pub fn key(&self) -> ObjectKey {
        self.metadata.key()
    }

    /// Name prefix every member address carries (`<name>.`)
    pub fn address_prefix(&self) -> String {
        format!("{}.", self.metadata.name)
    }

    /// Check whether `address` belongs to this space
    ///
    /// Membership is structural: same namespace and a name starting with
    /// `<space name>.`. There is no stored foreign key.
    pub fn contains(&self, address: &Address) -> bool {
        address.metadata.namespace == self.metadata.namespace
            && address.metadata.name.starts_with(&self.address_prefix())
    }
}

/// Input for creating an address space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpaceInput {
    /// Name and namespace
    pub metadata: ObjectKey,
    /// Requested plan and type
    pub spec: AddressSpaceInputSpec,
}

/// Requested address space plan and type, as names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpaceInputSpec {
    /// Address space plan name
    pub plan: String,
    /// Address space type name
    #[serde(rename = "Type")]
    pub kind: String,
}

impl AddressSpaceInput {
    /// Build an input from plain strings
    pub fn new(name: &str, namespace: &str, plan: &str, kind: &str) -> Self {
        AddressSpaceInput {
            metadata: ObjectKey::new(name, namespace),
            spec: AddressSpaceInputSpec {
                plan: plan.to_string(),
                kind: kind.to_string(),
            },
        }
    }
}

// =============================================================================
// Addresses
// =============================================================================

/// A named messaging endpoint inside an address space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    /// Identity
    pub metadata: ObjectMeta,
    /// Desired state
    pub spec: AddressSpec,
    /// Observed state
    pub status: AddressStatus,
}

/// Address desired state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpec {
    /// Messaging address
    pub address: String,
    /// Name of the address space given at creation
    pub address_space: String,
    /// Resolved catalog plan
    pub plan: AddressPlan,
    /// Address type
    #[serde(rename = "Type")]
    pub kind: AddressType,
}

/// Address observed state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressStatus {
    /// Lifecycle phase
    pub phase: String,
}

impl AddressStatus {
    /// Status of a freshly created address
    pub fn active() -> Self {
        AddressStatus {
            phase: PHASE_ACTIVE.to_string(),
        }
    }
}

impl Address {
    /// The composite key of this address
    pub fn key(&self) -> ObjectKey {
        self.metadata.key()
    }
}

/// Input for creating an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInput {
    /// Name and namespace
    pub metadata: ObjectKey,
    /// Requested address details
    pub spec: AddressInputSpec,
}

/// Requested address details, as names
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressInputSpec {
    /// Messaging address
    pub address: String,
    /// Owning address space name
    pub address_space: String,
    /// Address plan name
    pub plan: String,
    /// Address type name
    #[serde(rename = "Type")]
    pub kind: String,
}

impl AddressInput {
    /// Build an input for `<address_space>.<address>`
    pub fn new(address_space: &str, namespace: &str, address: &str, plan: &str, kind: &str) -> Self {
        AddressInput {
            metadata: ObjectKey::new(format!("{}.{}", address_space, address), namespace),
            spec: AddressInputSpec {
                address: address.to_string(),
                address_space: address_space.to_string(),
                plan: plan.to_string(),
                kind: kind.to_string(),
            },
        }
    }
}

// =============================================================================
// Connections and links
// =============================================================================

/// Snapshot of the address space a connection was opened against
///
/// Captured when the connection is created. Later patches or deletion of the
/// space do not update it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct AddressSpaceRef {
    /// Space name
    pub name: String,
    /// Space namespace
    pub namespace: String,
    /// Space identity
    pub uid: Uuid,
    /// Space type
    #[serde(rename = "Type")]
    pub kind: AddressSpaceType,
}

impl From<&AddressSpace> for AddressSpaceRef {
    fn from(space: &AddressSpace) -> Self {
        AddressSpaceRef {
            name: space.metadata.name.clone(),
            namespace: space.metadata.namespace.clone(),
            uid: space.metadata.uid,
            kind: space.spec.kind,
        }
    }
}

/// A simulated client connection into an address space
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Connection {
    /// Owning address space
    pub address_space: AddressSpaceRef,
    /// `<host>:<port>`
    pub hostname: String,
    /// Unique container identifier
    pub container_id: String,
    /// Wire protocol
    pub protocol: String,
    /// Connection properties
    pub properties: Vec<KeyValue>,
}

/// A simulated sender/receiver attachment to an address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Link {
    /// Unique link name
    pub name: String,
    /// Container id of the owning connection
    pub connection: String,
    /// Name of the attached address
    pub address: String,
    /// Direction
    pub role: LinkRole,
}

// =============================================================================
// Metrics
// =============================================================================

/// A synthesized metric value
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Metric {
    /// Metric name
    pub name: String,
    /// Metric kind
    #[serde(rename = "Type")]
    pub kind: MetricType,
    /// Current value
    pub value: f64,
    /// Unit label
    pub units: String,
}

impl Metric {
    /// Create a metric
    pub fn new(name: &str, kind: MetricType, value: f64, units: &str) -> Self {
        Metric {
            name: name.to_string(),
            kind,
            value,
            units: units.to_string(),
        }
    }
}
