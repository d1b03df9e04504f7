//! Fixture data loaded at startup

use consolemock_core::{AddressInput, AddressSpaceInput, ObjectKey, Result};
use rand::Rng;
use tracing::info;

use super::Console;

/// (name, namespace, plan, type)
const ADDRESS_SPACES: [(&str, &str, &str, &str); 3] = [
    ("jupiter_as1", "app1_ns", "standard-small", "standard"),
    ("saturn_as2", "app1_ns", "standard-medium", "standard"),
    ("mars_as2", "app2_ns", "brokered-single-broker", "brokered"),
];

const JUPITER_HOSTS: [&str; 21] = [
    "juno",
    "galileo",
    "ulysses",
    "cassini",
    "pioneer10",
    "pioneer11",
    "voyager1",
    "voyager2",
    "horizons",
    "clipper",
    "icy",
    "dragonfly",
    "kosmos",
    "mariner4",
    "mariner5",
    "zond2",
    "mariner6",
    "nozomi",
    "rosetta",
    "yinghuo1",
    "pathfinder",
];

const SATURN_HOSTS: [&str; 1] = ["dragonfly"];

const MARS_HOSTS: [&str; 9] = [
    "kosmos",
    "mariner4",
    "mariner5",
    "zond2",
    "mariner6",
    "nozomi",
    "rosetta",
    "yinghuo1",
    "pathfinder",
];

const JUPITER_ADDRESSES: [&str; 12] = [
    "ganymede", "callisto", "io", "europa", "amalthea", "himalia", "thebe", "elara", "pasiphae",
    "metis", "carme", "sinope",
];

const SATURN_ADDRESSES: [&str; 7] = [
    "titan", "rhea", "iapetus", "dione", "tethys", "enceladus", "mimas",
];

const MARS_ADDRESSES: [&str; 2] = ["phobos", "deimous"];

impl<R: Rng> Console<R> {
    /// Load the fixture address spaces, connections, addresses and links
    ///
    /// Connections are opened before addresses exist; every connection then
    /// gets one sender link to an address of its space, taken round-robin.
    pub fn seed_fixtures(&mut self) -> Result<()> {
        for (name, namespace, plan, kind) in ADDRESS_SPACES {
            self.create_address_space(AddressSpaceInput::new(name, namespace, plan, kind))?;
        }

        let hosts: [(&str, &str, &[&str]); 3] = [
            ("jupiter_as1", "app1_ns", &JUPITER_HOSTS),
            ("saturn_as2", "app1_ns", &SATURN_HOSTS),
            ("mars_as2", "app2_ns", &MARS_HOSTS),
        ];
        for (space, namespace, names) in hosts {
            let key = ObjectKey::new(space, namespace);
            for host in names {
                self.create_connection(&key, host)?;
            }
        }

        let addresses: [(&str, &str, &str, &[&str]); 3] = [
            ("jupiter_as1", "app1_ns", "standard-small-queue", &JUPITER_ADDRESSES),
            ("saturn_as2", "app1_ns", "standard-small-queue", &SATURN_ADDRESSES),
            ("mars_as2", "app2_ns", "brokered-queue", &MARS_ADDRESSES),
        ];
        for (space, namespace, plan, names) in addresses {
            for address in names {
                self.create_address(AddressInput::new(space, namespace, address, plan, "queue"))?;
            }
        }

        let container_ids: Vec<String> = self
            .store
            .connections
            .iter()
            .map(|c| c.container_id.clone())
            .collect();
        for container_id in &container_ids {
            self.attach_sender_link(container_id)?;
        }

        info!(
            target: "consolemock::seed",
            address_spaces = self.store.address_spaces.len(),
            addresses = self.store.addresses.len(),
            connections = self.store.connections.len(),
            links = self.store.links.len(),
            "Fixtures loaded"
        );
        Ok(())
    }
}
