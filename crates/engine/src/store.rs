//! In-memory resource store
//!
//! Four ordered sequences: address spaces, addresses, connections and links.
//! Insertion appends, so list queries see resources in creation order.
//! Replacement and removal work by index, after a lookup by key.

use consolemock_core::{Address, AddressSpace, Connection, Link, ObjectKey};

/// A resource addressable by its (Name, Namespace) key
pub trait Keyed {
    /// Check if this resource carries `key`
    fn has_key(&self, key: &ObjectKey) -> bool;
}

impl Keyed for AddressSpace {
    fn has_key(&self, key: &ObjectKey) -> bool {
        self.metadata.matches(key)
    }
}

impl Keyed for Address {
    fn has_key(&self, key: &ObjectKey) -> bool {
        self.metadata.matches(key)
    }
}

/// An insertion-ordered sequence of resources
#[derive(Debug, Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection { items: Vec::new() }
    }
}

impl<T> Collection<T> {
    /// Create an empty collection
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a resource
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// The resource at `index`
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Swap the resource at `index` for `item`, returning the old one
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Callers obtain indices from
    /// [`Collection::position`] under the same borrow.
    pub fn replace(&mut self, index: usize, item: T) -> T {
        std::mem::replace(&mut self.items[index], item)
    }

    /// Remove the resource at `index`, keeping the order of the rest
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove(&mut self, index: usize) -> T {
        self.items.remove(index)
    }

    /// Index of the first resource matching `pred`
    pub fn position(&self, pred: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(pred)
    }

    /// Resources in insertion order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Resources as a slice
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Number of resources
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if the collection holds nothing
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Keyed> Collection<T> {
    /// Index of the first resource with `key`
    pub fn position_of(&self, key: &ObjectKey) -> Option<usize> {
        self.position(|item| item.has_key(key))
    }

    /// The first resource with `key`
    pub fn find(&self, key: &ObjectKey) -> Option<&T> {
        self.position_of(key).map(|i| &self.items[i])
    }

    /// Check if a resource with `key` exists
    pub fn contains_key(&self, key: &ObjectKey) -> bool {
        self.position_of(key).is_some()
    }
}

impl<'a, T> IntoIterator for &'a Collection<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Every stored resource
#[derive(Debug, Clone, Default)]
pub struct ResourceStore {
    /// Address spaces
    pub address_spaces: Collection<AddressSpace>,
    /// Addresses
    pub addresses: Collection<Address>,
    /// Connections
    pub connections: Collection<Connection>,
    /// Links
    pub links: Collection<Link>,
}

impl ResourceStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Address spaces in `namespace`
    pub fn address_spaces_in<'a>(
        &'a self,
        namespace: &'a str,
    ) -> impl Iterator<Item = &'a AddressSpace> + 'a {
        self.address_spaces
            .iter()
            .filter(move |s| s.metadata.namespace == namespace)
    }

    /// Addresses whose name places them in `space`
    pub fn addresses_of<'a>(
        &'a self,
        space: &'a AddressSpace,
    ) -> impl Iterator<Item = &'a Address> + 'a {
        self.addresses.iter().filter(move |a| space.contains(a))
    }

    /// The connection with `container_id`
    pub fn connection(&self, container_id: &str) -> Option<&Connection> {
        self.connections
            .iter()
            .find(|c| c.container_id == container_id)
    }

    /// Links opened on the connection with `container_id`
    pub fn links_of_connection<'a>(
        &'a self,
        container_id: &'a str,
    ) -> impl Iterator<Item = &'a Link> + 'a {
        self.links
            .iter()
            .filter(move |l| l.connection == container_id)
    }
}
