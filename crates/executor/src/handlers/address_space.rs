//! Address space command handlers.

use consolemock_engine::Console;
use rand::Rng;

use crate::types::{AddressSpaceInput, AddressSpaceItem, ConnectionItem, ObjectKey};
use crate::{Output, Result};

/// Handle AddressSpaces command.
pub fn address_spaces<R: Rng>(
    c: &Console<R>,
    namespace: Option<String>,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .address_spaces(namespace.as_deref(), first, offset)?
        .map(|space| AddressSpaceItem {
            metrics: c.address_space_metrics(&space),
            resource: space,
        });
    Ok(Output::AddressSpacePage(page))
}

/// Handle AddressSpaceConnections command.
pub fn address_space_connections<R: Rng>(
    c: &mut Console<R>,
    key: ObjectKey,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .address_space_connections(&key, first, offset)?
        .map(|connection| ConnectionItem {
            metrics: c.connection_metrics(),
            resource: connection,
        });
    Ok(Output::ConnectionPage(page))
}

/// Handle CreateAddressSpace command.
pub fn create<R: Rng>(c: &mut Console<R>, input: AddressSpaceInput) -> Result<Output> {
    Ok(Output::AddressSpace(c.create_address_space(input)?))
}

/// Handle PatchAddressSpace command.
pub fn patch<R: Rng>(
    c: &mut Console<R>,
    key: ObjectKey,
    json_patch: String,
    patch_type: String,
) -> Result<Output> {
    Ok(Output::AddressSpace(
        c.patch_address_space(&key, &json_patch, &patch_type)?,
    ))
}

/// Handle DeleteAddressSpace command.
pub fn delete<R: Rng>(c: &mut Console<R>, key: ObjectKey) -> Result<Output> {
    c.delete_address_space(&key)?;
    Ok(Output::Deleted)
}
