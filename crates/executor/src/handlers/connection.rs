//! Connection command handlers.

use consolemock_engine::{Console, QueryPath};
use rand::Rng;

use crate::types::{ConnectionItem, LinkItem};
use crate::{Output, Result};

/// Handle Connections command.
pub fn connections<R: Rng>(
    c: &mut Console<R>,
    namespace: Option<String>,
    address_space: Option<String>,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .connections(namespace.as_deref(), address_space.as_deref(), first, offset)?
        .map(|connection| ConnectionItem {
            metrics: c.connection_metrics(),
            resource: connection,
        });
    Ok(Output::ConnectionPage(page))
}

/// Handle ConnectionLinks command.
///
/// Links listed here carry delivery counters.
pub fn links<R: Rng>(
    c: &mut Console<R>,
    container_id: String,
    first: Option<i64>,
    offset: Option<i64>,
) -> Result<Output> {
    let page = c
        .connection_links(&container_id, first, offset)?
        .map(|link| LinkItem {
            metrics: c.link_metrics(&link, QueryPath::Connections),
            resource: link,
        });
    Ok(Output::LinkPage(page))
}
