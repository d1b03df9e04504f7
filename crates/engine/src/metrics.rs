//! Synthetic metrics
//!
//! Nothing is measured. Each call draws fresh values from the supplied random
//! source; only the address space counts reflect stored state. Random values
//! are whole numbers drawn from a half-open range starting at zero.

use consolemock_core::{AddressSpaceType, LinkRole, Metric, MetricType};
use rand::Rng;

/// Which listing a link was reached through
///
/// Links listed under an address report traffic; links listed under a
/// connection report delivery outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryPath {
    /// Listed via an address
    Addresses,
    /// Listed via a connection
    Connections,
}

const DELIVERY_OUTCOMES: [&str; 6] = [
    "enmasse_deliveries",
    "enmasse_rejected",
    "enmasse_released",
    "enmasse_modified",
    "enmasse_presettled",
    "enmasse_undelivered",
];

fn draw<R: Rng + ?Sized>(rng: &mut R, upper: u32) -> f64 {
    f64::from(rng.gen_range(0..upper))
}

/// Metrics of an address space: its connection and address counts
pub fn address_space_metrics(connections: usize, addresses: usize) -> Vec<Metric> {
    vec![
        Metric::new(
            "enmasse-connections",
            MetricType::Gauge,
            connections as f64,
            "connections",
        ),
        Metric::new(
            "enmasse-addresses",
            MetricType::Gauge,
            addresses as f64,
            "addresses",
        ),
    ]
}

/// Metrics of an address
pub fn address_metrics<R: Rng + ?Sized>(rng: &mut R) -> Vec<Metric> {
    vec![
        Metric::new(
            "enmasse_messages_stored",
            MetricType::Gauge,
            draw(rng, 10),
            "messages",
        ),
        Metric::new("enmasse-senders", MetricType::Gauge, draw(rng, 3), "links"),
        Metric::new("enmasse-receivers", MetricType::Gauge, draw(rng, 3), "links"),
        Metric::new("enmasse_messages_in", MetricType::Rate, draw(rng, 10), "msg/s"),
        Metric::new("enmasse_messages_out", MetricType::Rate, draw(rng, 10), "msg/s"),
    ]
}

/// Metrics of a connection
pub fn connection_metrics<R: Rng + ?Sized>(rng: &mut R) -> Vec<Metric> {
    vec![
        Metric::new("enmasse_messages_in", MetricType::Rate, draw(rng, 10), "msg/s"),
        Metric::new("enmasse_messages_out", MetricType::Rate, draw(rng, 10), "msg/s"),
    ]
}

/// Metrics of a link
///
/// `space` is the type of the address space owning the link's connection.
/// It only matters on the [`QueryPath::Connections`] path, where brokered
/// spaces report deliveries alone.
pub fn link_metrics<R: Rng + ?Sized>(
    rng: &mut R,
    role: LinkRole,
    space: AddressSpaceType,
    path: QueryPath,
) -> Vec<Metric> {
    match path {
        QueryPath::Addresses => {
            let name = match role {
                LinkRole::Sender => "enmasse_messages_in",
                LinkRole::Receiver => "enmasse_messages_out",
            };
            vec![
                Metric::new(name, MetricType::Rate, draw(rng, 10), "msg/s"),
                Metric::new(
                    "enmasse_messages_backlog",
                    MetricType::Gauge,
                    draw(rng, 15),
                    "msg",
                ),
            ]
        }
        QueryPath::Connections => {
            let outcomes = match space {
                AddressSpaceType::Brokered => &DELIVERY_OUTCOMES[..1],
                AddressSpaceType::Standard => &DELIVERY_OUTCOMES[..],
            };
            outcomes
                .iter()
                .map(|name| Metric::new(name, MetricType::Counter, draw(rng, 10), "deliveries"))
                .collect()
        }
    }
}
