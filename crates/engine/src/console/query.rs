//! Read-only queries and metric synthesis
//!
//! List queries filter the store, keep store order and page the result with
//! [`Page::paginate`]. `Total` always counts the filtered set.

use consolemock_core::{
    Address, AddressPlan, AddressSpace, AddressSpacePlan, AddressSpaceType, AddressType,
    Connection, Error, Link, Metric, Namespace, ObjectKey, Page, Result,
};
use rand::Rng;
use rustc_hash::FxHashSet;
use tracing::debug;

use super::Console;
use crate::catalog::Catalog;
use crate::metrics::{self, QueryPath};

impl<R: Rng> Console<R> {
    // =========================================================================
    // Catalog
    // =========================================================================

    /// Liveness probe
    pub fn hello(&self) -> &'static str {
        "world"
    }

    /// Every namespace
    pub fn namespaces(&self) -> Vec<Namespace> {
        self.catalog.namespaces().to_vec()
    }

    /// Every address type
    pub fn address_types(&self) -> Vec<AddressType> {
        Catalog::address_types()
    }

    /// Every address space type
    pub fn address_space_types(&self) -> Vec<AddressSpaceType> {
        Catalog::address_space_types()
    }

    /// Address space plans, optionally of one type
    ///
    /// The type is matched by name; a name that is no address space type
    /// matches no plan.
    pub fn address_space_plans(&self, kind: Option<&str>) -> Vec<AddressSpacePlan> {
        match kind.map(str::parse::<AddressSpaceType>) {
            None => self.catalog.address_space_plans(None),
            Some(Ok(kind)) => self.catalog.address_space_plans(Some(kind)),
            Some(Err(_)) => Vec::new(),
        }
    }

    /// Address plans, optionally only those of one address space plan
    pub fn address_plans(&self, address_space_plan: Option<&str>) -> Result<Vec<AddressPlan>> {
        self.catalog.address_plans(address_space_plan)
    }

    // =========================================================================
    // Filter validation
    // =========================================================================

    fn check_namespace(&self, namespace: Option<&str>) -> Result<()> {
        if let Some(ns) = namespace {
            self.catalog.find_namespace(ns)?;
        }
        Ok(())
    }

    /// An address space filter must name a space inside the namespace filter
    fn check_address_space(&self, namespace: Option<&str>, address_space: Option<&str>) -> Result<()> {
        let Some(name) = address_space else {
            return Ok(());
        };
        let exists = self.store.address_spaces.iter().any(|s| {
            Some(s.metadata.namespace.as_str()) == namespace && s.metadata.name == name
        });
        if exists {
            return Ok(());
        }
        Err(Error::unrecognised(
            "address space",
            name,
            self.store
                .address_spaces
                .iter()
                .filter(|s| Some(s.metadata.namespace.as_str()) == namespace)
                .map(|s| s.metadata.name.as_str()),
        ))
    }

    // =========================================================================
    // Lists
    // =========================================================================

    /// Address spaces, optionally in one namespace
    pub fn address_spaces(
        &self,
        namespace: Option<&str>,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<AddressSpace>> {
        self.check_namespace(namespace)?;
        let matching: Vec<AddressSpace> = self
            .store
            .address_spaces
            .iter()
            .filter(|s| namespace.map_or(true, |ns| s.metadata.namespace == ns))
            .cloned()
            .collect();
        debug!(target: "consolemock::query", ?namespace, total = matching.len(), "address spaces");
        Ok(Page::paginate(matching, first, offset))
    }

    /// Addresses, optionally in one namespace and address space
    ///
    /// Membership in an address space is the `<space>.` name prefix, so a
    /// space named `a` also matches the addresses of a space named `a.b`.
    pub fn addresses(
        &self,
        namespace: Option<&str>,
        address_space: Option<&str>,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<Address>> {
        self.check_namespace(namespace)?;
        self.check_address_space(namespace, address_space)?;
        let prefix = address_space.map(|name| format!("{}.", name));
        let matching: Vec<Address> = self
            .store
            .addresses
            .iter()
            .filter(|a| namespace.map_or(true, |ns| a.metadata.namespace == ns))
            .filter(|a| {
                prefix
                    .as_deref()
                    .map_or(true, |p| a.metadata.name.starts_with(p))
            })
            .cloned()
            .collect();
        debug!(
            target: "consolemock::query",
            ?namespace,
            ?address_space,
            total = matching.len(),
            "addresses"
        );
        Ok(Page::paginate(matching, first, offset))
    }

    /// Connections, optionally of the address spaces matching the filters
    ///
    /// With a filter, the connection lists of every matching space are
    /// unioned and the global connection order is kept.
    pub fn connections(
        &self,
        namespace: Option<&str>,
        address_space: Option<&str>,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<Connection>> {
        self.check_namespace(namespace)?;
        self.check_address_space(namespace, address_space)?;

        let matching: Vec<Connection> = if namespace.is_none() && address_space.is_none() {
            self.store.connections.iter().cloned().collect()
        } else {
            let kept: FxHashSet<&str> = self
                .store
                .address_spaces
                .iter()
                .filter(|s| namespace.map_or(true, |ns| s.metadata.namespace == ns))
                .filter(|s| address_space.map_or(true, |name| s.metadata.name == name))
                .flat_map(|s| self.index.connections_of(&s.metadata.uid))
                .map(String::as_str)
                .collect();
            self.store
                .connections
                .iter()
                .filter(|c| kept.contains(c.container_id.as_str()))
                .cloned()
                .collect()
        };
        debug!(
            target: "consolemock::query",
            ?namespace,
            ?address_space,
            total = matching.len(),
            "connections"
        );
        Ok(Page::paginate(matching, first, offset))
    }

    // =========================================================================
    // Nested lists
    // =========================================================================

    /// Connections of one address space, in the order they were opened
    pub fn address_space_connections(
        &self,
        key: &ObjectKey,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<Connection>> {
        let space = self
            .store
            .address_spaces
            .find(key)
            .ok_or_else(|| Error::not_found(format!("address space {} does not exist", key)))?;
        let matching: Vec<Connection> = self
            .index
            .connections_of(&space.metadata.uid)
            .iter()
            .filter_map(|id| self.store.connection(id))
            .cloned()
            .collect();
        Ok(Page::paginate(matching, first, offset))
    }

    /// Links listed under an address
    ///
    /// Returns every link whose connection belongs to the address's space,
    /// not only links attached to the address itself.
    pub fn address_links(
        &self,
        key: &ObjectKey,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<Link>> {
        let address = self
            .store
            .addresses
            .find(key)
            .ok_or_else(|| Error::not_found(format!("address {} does not exist", key)))?;
        let matching: Vec<Link> = self
            .store
            .links
            .iter()
            .filter(|l| {
                self.store.connection(&l.connection).map_or(false, |c| {
                    c.address_space.namespace == address.metadata.namespace
                        && address
                            .metadata
                            .name
                            .starts_with(&format!("{}.", c.address_space.name))
                })
            })
            .cloned()
            .collect();
        Ok(Page::paginate(matching, first, offset))
    }

    /// Links opened on one connection
    pub fn connection_links(
        &self,
        container_id: &str,
        first: Option<i64>,
        offset: Option<i64>,
    ) -> Result<Page<Link>> {
        if self.store.connection(container_id).is_none() {
            return Err(Error::not_found(format!(
                "connection '{}' does not exist",
                container_id
            )));
        }
        let matching: Vec<Link> = self
            .store
            .links_of_connection(container_id)
            .cloned()
            .collect();
        Ok(Page::paginate(matching, first, offset))
    }

    // =========================================================================
    // Metrics
    // =========================================================================

    /// Connection and address counts of a space
    pub fn address_space_metrics(&self, space: &AddressSpace) -> Vec<Metric> {
        metrics::address_space_metrics(
            self.index.connection_count(&space.metadata.uid),
            self.store.addresses_of(space).count(),
        )
    }

    /// Fresh traffic metrics for an address
    pub fn address_metrics(&mut self) -> Vec<Metric> {
        metrics::address_metrics(&mut self.rng)
    }

    /// Fresh traffic metrics for a connection
    pub fn connection_metrics(&mut self) -> Vec<Metric> {
        metrics::connection_metrics(&mut self.rng)
    }

    /// Fresh metrics for a link reached through `path`
    pub fn link_metrics(&mut self, link: &Link, path: QueryPath) -> Vec<Metric> {
        let space = self
            .store
            .connection(&link.connection)
            .map_or(AddressSpaceType::Standard, |c| c.address_space.kind);
        metrics::link_metrics(&mut self.rng, link.role, space, path)
    }
}
