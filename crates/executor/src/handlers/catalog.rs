//! Catalog command handlers.

use consolemock_engine::Console;
use rand::Rng;

use crate::{Output, Result};

/// Handle Hello command.
pub fn hello<R: Rng>(c: &Console<R>) -> Result<Output> {
    Ok(Output::Text(c.hello().to_string()))
}

/// Handle Namespaces command.
pub fn namespaces<R: Rng>(c: &Console<R>) -> Result<Output> {
    Ok(Output::Namespaces(c.namespaces()))
}

/// Handle AddressTypes command.
pub fn address_types<R: Rng>(c: &Console<R>) -> Result<Output> {
    Ok(Output::AddressTypes(c.address_types()))
}

/// Handle AddressSpaceTypes command.
pub fn address_space_types<R: Rng>(c: &Console<R>) -> Result<Output> {
    Ok(Output::AddressSpaceTypes(c.address_space_types()))
}

/// Handle AddressSpacePlans command.
pub fn address_space_plans<R: Rng>(
    c: &Console<R>,
    address_space_type: Option<String>,
) -> Result<Output> {
    Ok(Output::AddressSpacePlans(
        c.address_space_plans(address_space_type.as_deref()),
    ))
}

/// Handle AddressPlans command.
pub fn address_plans<R: Rng>(
    c: &Console<R>,
    address_space_plan: Option<String>,
) -> Result<Output> {
    Ok(Output::AddressPlans(
        c.address_plans(address_space_plan.as_deref())?,
    ))
}
