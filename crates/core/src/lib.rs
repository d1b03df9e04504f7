//! Core types for the console mock
//!
//! This crate defines the foundational types used throughout the system:
//! - Resource model: AddressSpace, Address, Connection, Link and the catalog
//!   entries (Namespace, AddressPlan, AddressSpacePlan)
//! - ObjectKey: the (Name, Namespace) composite key
//! - Error: the error taxonomy shared by every layer
//! - JSON Patch: RFC 6901 pointers and RFC 6902 patch application
//! - Pagination: the `calc_lower_upper` primitive and the `Page` envelope

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod json;
pub mod page;
pub mod types;

pub use error::{Error, Result};
pub use json::{
    get_at_pointer, get_at_pointer_mut, JsonPatch, JsonPointer, PatchError, PatchOperation,
    PatchType, PointerParseError,
};
pub use page::{calc_lower_upper, Page, PageBounds};
pub use types::{
    Address, AddressInput, AddressInputSpec, AddressPlan, AddressPlanSpec, AddressSpace,
    AddressSpaceInput, AddressSpaceInputSpec, AddressSpacePlan, AddressSpacePlanSpec,
    AddressSpaceRef, AddressSpaceSpec, AddressSpaceStatus, AddressSpaceType, AddressSpec,
    AddressStatus, AddressType, CatalogMeta, Connection, KeyValue, Link, LinkRole, Metric,
    MetricType, Namespace, NamespaceStatus, ObjectKey, ObjectMeta, PHASE_ACTIVE,
};
