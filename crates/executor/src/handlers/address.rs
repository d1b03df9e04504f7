//! Address command handlers.

use consolemock_engine::{Console, QueryPath};
use rand::Rng;

use crate::types::{AddressInput, AddressItem, LinkItem, ObjectKey};
use crate::{Output, Result};

/// Handle Addresses command.
pub fn addresses<R: Rng>(
    c: &mut Console<R>,
    namespace: Option<String>,
    address_space: Option<String>,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .addresses(namespace.as_deref(), address_space.as_deref(), first, offset)?
        .map(|address| AddressItem {
            metrics: c.address_metrics(),
            resource: address,
        });
    Ok(Output::AddressPage(page))
}

/// Handle AddressLinks command.
///
/// Links listed here carry traffic metrics.
pub fn links<R: Rng>(
    c: &mut Console<R>,
    key: ObjectKey,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .address_links(&key, first, offset)?
        .map(|link| LinkItem {
            metrics: c.link_metrics(&link, QueryPath::Addresses),
            resource: link,
        });
    Ok(Output::LinkPage(page))
}

/// Handle CreateAddress command.
pub fn create<R: Rng>(c: &mut Console<R>, input: AddressInput) -> Result<Output> {
    Ok(Output::Address(c.create_address(input)?))
}

/// Handle PatchAddress command.
pub fn patch<R: Rng>(
    c: &mut Console<R>,
    key: ObjectKey,
    json_patch: String,
    patch_type: String,
) -> Result<Output> {
    Ok(Output::Address(c.patch_address(&key, &json_patch, &patch_type)?))
}

/// Handle DeleteAddress command.
pub fn delete<R: Rng>(c: &mut Console<R>, key: ObjectKey) -> Result<Output> {
    c.delete_address(&key)?;
    Ok(Output::Deleted)
}
