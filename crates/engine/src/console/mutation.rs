//! Create, patch and delete
//!
//! Every mutation validates against the catalog and store before touching
//! state, so a failed call leaves the console unchanged. Deletion never
//! cascades: addresses, connections and links of a deleted space remain.

use consolemock_core::{
    Address, AddressInput, AddressSpace, AddressSpaceInput, AddressSpaceRef, AddressSpaceSpec,
    AddressSpaceStatus, AddressSpaceType, AddressSpec, AddressStatus, AddressType, Connection,
    Error, Link, LinkRole, ObjectKey, Result,
};
use rand::Rng;
use serde_json::Value;
use tracing::{info, warn};

use super::patch::apply_patch;
use super::Console;

const PROTOCOL_AMQP: &str = "amqp";

/// Port range simulated connections report
const PORT_RANGE: std::ops::Range<u32> = 40000..65536;

fn log_outcome<T>(operation: &str, key: &ObjectKey, result: &Result<T>) {
    match result {
        Ok(_) => info!(
            target: "consolemock::mutation",
            name = %key.name,
            namespace = %key.namespace,
            "{} succeeded",
            operation
        ),
        Err(e) => warn!(
            target: "consolemock::mutation",
            name = %key.name,
            namespace = %key.namespace,
            error = %e,
            "{} rejected",
            operation
        ),
    }
}

fn to_plan_value<P: serde::Serialize>(plan: &P) -> Result<Value> {
    serde_json::to_value(plan).map_err(|e| Error::patch_failed(format!("cannot serialize plan: {}", e)))
}

impl<R: Rng> Console<R> {
    // =========================================================================
    // Address spaces
    // =========================================================================

    /// Create an address space
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown namespace or plan
    /// - `InvalidArgument` for an unknown type
    /// - `AlreadyExists` if the key is taken
    pub fn create_address_space(&mut self, input: AddressSpaceInput) -> Result<AddressSpace> {
        let key = input.metadata.clone();
        let result = self.insert_address_space(input);
        log_outcome("create address space", &key, &result);
        result
    }

    fn insert_address_space(&mut self, input: AddressSpaceInput) -> Result<AddressSpace> {
        self.catalog.find_namespace(&input.metadata.namespace)?;
        let plan = self.catalog.find_address_space_plan(&input.spec.plan)?.clone();
        let kind: AddressSpaceType = input.spec.kind.parse()?;

        if self.store.address_spaces.contains_key(&input.metadata) {
            return Err(Error::already_exists(format!(
                "address space {} already exists",
                input.metadata
            )));
        }

        let space = AddressSpace {
            metadata: self.new_meta(&input.metadata),
            spec: AddressSpaceSpec { plan, kind },
            status: AddressSpaceStatus::active(),
        };
        self.index.register_space(space.metadata.uid);
        self.store.address_spaces.push(space.clone());
        Ok(space)
    }

    /// Apply an RFC 6902 patch to an address space
    ///
    /// # Errors
    ///
    /// - `NotFound` if the space or a newly named plan is unknown
    /// - `Unsupported` / `InvalidArgument` for a patch type other than JSON Patch
    /// - `ImmutableField` if the patch changes Name, Namespace, Uid or
    ///   CreationTimestamp
    /// - `PatchFailed` if the document cannot be parsed or applied, or the
    ///   result is no longer a valid address space
    pub fn patch_address_space(
        &mut self,
        key: &ObjectKey,
        json_patch: &str,
        patch_type: &str,
    ) -> Result<AddressSpace> {
        let result = self.replace_address_space(key, json_patch, patch_type);
        log_outcome("patch address space", key, &result);
        result
    }

    fn replace_address_space(
        &mut self,
        key: &ObjectKey,
        json_patch: &str,
        patch_type: &str,
    ) -> Result<AddressSpace> {
        let index = self
            .store
            .address_spaces
            .position_of(key)
            .ok_or_else(|| Error::not_found(format!("address space {} does not exist", key)))?;
        let catalog = &self.catalog;
        let current = &self.store.address_spaces.as_slice()[index];
        let replacement = apply_patch(
            "address space",
            key,
            current,
            json_patch,
            patch_type,
            |name| to_plan_value(catalog.find_address_space_plan(name)?),
        )?;
        self.store.address_spaces.replace(index, replacement.clone());
        Ok(replacement)
    }

    /// Delete an address space, leaving its addresses and connections in place
    pub fn delete_address_space(&mut self, key: &ObjectKey) -> Result<AddressSpace> {
        let result = match self.store.address_spaces.position_of(key) {
            Some(index) => Ok(self.store.address_spaces.remove(index)),
            None => Err(Error::not_found(format!(
                "address space {} does not exist",
                key
            ))),
        };
        log_outcome("delete address space", key, &result);
        result
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Create an address
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown namespace, address space or plan
    /// - `InvalidArgument` for an unknown type or a name lacking the
    ///   `<address space>.` prefix
    /// - `AlreadyExists` if the key is taken
    pub fn create_address(&mut self, input: AddressInput) -> Result<Address> {
        let key = input.metadata.clone();
        let result = self.insert_address(input);
        log_outcome("create address", &key, &result);
        result
    }

    fn insert_address(&mut self, input: AddressInput) -> Result<Address> {
        let namespace = &input.metadata.namespace;
        self.catalog.find_namespace(namespace)?;

        let space_key = ObjectKey::new(&input.spec.address_space, namespace);
        if !self.store.address_spaces.contains_key(&space_key) {
            return Err(Error::unrecognised(
                "address space",
                &input.spec.address_space,
                self.store
                    .address_spaces_in(namespace)
                    .map(|s| s.metadata.name.as_str()),
            ));
        }

        let plan = self.catalog.find_address_plan(&input.spec.plan)?.clone();
        let kind: AddressType = input.spec.kind.parse()?;

        let prefix = format!("{}.", input.spec.address_space);
        if !input.metadata.name.starts_with(&prefix) {
            return Err(Error::invalid_argument(format!(
                "address name must begin with '{}'",
                prefix
            )));
        }

        if self.store.addresses.contains_key(&input.metadata) {
            return Err(Error::already_exists(format!(
                "address {} already exists in address space {}",
                input.metadata, input.spec.address_space
            )));
        }

        let address = Address {
            metadata: self.new_meta(&input.metadata),
            spec: AddressSpec {
                address: input.spec.address,
                address_space: input.spec.address_space,
                plan,
                kind,
            },
            status: AddressStatus::active(),
        };
        self.store.addresses.push(address.clone());
        Ok(address)
    }

    /// Apply an RFC 6902 patch to an address
    ///
    /// Fails the same ways as [`Console::patch_address_space`], resolving
    /// plans against the address plan catalog.
    pub fn patch_address(
        &mut self,
        key: &ObjectKey,
        json_patch: &str,
        patch_type: &str,
    ) -> Result<Address> {
        let result = self.replace_address(key, json_patch, patch_type);
        log_outcome("patch address", key, &result);
        result
    }

    fn replace_address(
        &mut self,
        key: &ObjectKey,
        json_patch: &str,
        patch_type: &str,
    ) -> Result<Address> {
        let index = self
            .store
            .addresses
            .position_of(key)
            .ok_or_else(|| Error::not_found(format!("address {} does not exist", key)))?;
        let catalog = &self.catalog;
        let current = &self.store.addresses.as_slice()[index];
        let replacement = apply_patch("address", key, current, json_patch, patch_type, |name| {
            to_plan_value(catalog.find_address_plan(name)?)
        })?;
        self.store.addresses.replace(index, replacement.clone());
        Ok(replacement)
    }

    /// Delete an address
    pub fn delete_address(&mut self, key: &ObjectKey) -> Result<Address> {
        let result = match self.store.addresses.position_of(key) {
            Some(index) => Ok(self.store.addresses.remove(index)),
            None => Err(Error::not_found(format!("address {} does not exist", key))),
        };
        log_outcome("delete address", key, &result);
        result
    }

    // =========================================================================
    // Connections and links
    // =========================================================================

    /// Open a simulated connection from `host` into an address space
    ///
    /// The connection reports `<host>:<port>` with a random port and a fresh
    /// container id, and is recorded in the relationship index.
    pub fn create_connection(&mut self, space: &ObjectKey, host: &str) -> Result<Connection> {
        let space_ref = self
            .store
            .address_spaces
            .find(space)
            .map(AddressSpaceRef::from)
            .ok_or_else(|| Error::not_found(format!("address space {} does not exist", space)))?;

        let port = self.rng.gen_range(PORT_RANGE);
        let connection = Connection {
            hostname: format!("{}:{}", host, port),
            container_id: self.new_uid().to_string(),
            protocol: PROTOCOL_AMQP.to_string(),
            properties: Vec::new(),
            address_space: space_ref,
        };
        self.index
            .add_connection(connection.address_space.uid, &connection.container_id);
        self.store.connections.push(connection.clone());
        Ok(connection)
    }

    /// Attach a sender link to the next address of the connection's space
    ///
    /// Addresses are taken round-robin per address space. Returns `None` when
    /// the space has no addresses.
    pub fn attach_sender_link(&mut self, container_id: &str) -> Result<Option<Link>> {
        let space = self
            .store
            .connection(container_id)
            .map(|c| c.address_space.clone())
            .ok_or_else(|| {
                Error::not_found(format!("connection '{}' does not exist", container_id))
            })?;

        let prefix = format!("{}.", space.name);
        let candidates: Vec<String> = self
            .store
            .addresses
            .iter()
            .filter(|a| a.metadata.namespace == space.namespace && a.metadata.name.starts_with(&prefix))
            .map(|a| a.metadata.name.clone())
            .collect();

        let Some(address) = self.index.next_in_cycle(space.uid, &candidates).cloned() else {
            return Ok(None);
        };
        let link = Link {
            name: self.new_uid().to_string(),
            connection: container_id.to_string(),
            address,
            role: LinkRole::Sender,
        };
        self.store.links.push(link.clone());
        Ok(Some(link))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const JSON_PATCH: &str = "application/json-patch+json";

    fn console() -> Console {
        Console::with_rng(StdRng::seed_from_u64(11))
    }

    fn with_space() -> Console {
        let mut c = console();
        c.create_address_space(AddressSpaceInput::new(
            "venus",
            "app1_ns",
            "standard-small",
            "standard",
        ))
        .unwrap();
        c
    }

    fn queue(name: &str) -> AddressInput {
        AddressInput::new("venus", "app1_ns", name, "standard-small-queue", "queue")
    }

    #[test]
    fn test_create_address_space() {
        let c = with_space();
        let space = &c.store().address_spaces.as_slice()[0];
        assert_eq!(space.spec.plan.metadata.name, "standard-small");
        assert_eq!(space.spec.plan.spec.display_name, "Small");
        assert_eq!(space.spec.kind, AddressSpaceType::Standard);
        assert!(space.status.is_ready);
        assert_eq!(space.status.phase, "Active");
        assert!(c.index().connections_of(&space.metadata.uid).is_empty());
    }

    #[test]
    fn test_create_address_space_unknown_namespace() {
        let mut c = console();
        let err = c
            .create_address_space(AddressSpaceInput::new("x", "app9_ns", "standard-small", "standard"))
            .unwrap_err();
        assert!(err.is_not_found());
        assert!(c.store().address_spaces.is_empty());
    }

    #[test]
    fn test_create_address_space_unknown_plan() {
        let mut c = console();
        let err = c
            .create_address_space(AddressSpaceInput::new("x", "app1_ns", "huge", "standard"))
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_create_address_space_bad_type() {
        let mut c = console();
        let err = c
            .create_address_space(AddressSpaceInput::new("x", "app1_ns", "standard-small", "tiny"))
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
    }

    #[test]
    fn test_create_address_space_duplicate() {
        let mut c = with_space();
        let err = c
            .create_address_space(AddressSpaceInput::new(
                "venus",
                "app1_ns",
                "standard-medium",
                "standard",
            ))
            .unwrap_err();
        assert!(matches!(err, Error::AlreadyExists { .. }));

        // Same name in another namespace is fine
        c.create_address_space(AddressSpaceInput::new(
            "venus",
            "app2_ns",
            "standard-small",
            "standard",
        ))
        .unwrap();
        assert_eq!(c.store().address_spaces.len(), 2);
    }

    #[test]
    fn test_create_address() {
        let mut c = with_space();
        let address = c.create_address(queue("io")).unwrap();
        assert_eq!(address.metadata.name, "venus.io");
        assert_eq!(address.spec.address, "io");
        assert_eq!(address.spec.address_space, "venus");
        assert_eq!(address.spec.plan.spec.display_name, "Small Queue");
        assert_eq!(address.status.phase, "Active");
    }

    #[test]
    fn test_create_address_unknown_space() {
        let mut c = with_space();
        let mut input = queue("io");
        input.metadata.namespace = "app2_ns".to_string();
        assert!(c.create_address(input).unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_address_unknown_plan_and_type() {
        let mut c = with_space();
        let bad_plan = AddressInput::new("venus", "app1_ns", "io", "huge-queue", "queue");
        assert!(c.create_address(bad_plan).unwrap_err().is_not_found());

        let bad_type = AddressInput::new("venus", "app1_ns", "io", "standard-small-queue", "fifo");
        assert!(matches!(
            c.create_address(bad_type).unwrap_err(),
            Error::InvalidArgument { .. }
        ));
    }

    #[test]
    fn test_create_address_requires_prefix() {
        let mut c = with_space();
        let mut input = queue("io");
        input.metadata.name = "io".to_string();
        let err = c.create_address(input).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { .. }));
        assert!(err.to_string().contains("venus."));
    }

    #[test]
    fn test_create_address_duplicate() {
        let mut c = with_space();
        c.create_address(queue("io")).unwrap();
        assert!(matches!(
            c.create_address(queue("io")).unwrap_err(),
            Error::AlreadyExists { .. }
        ));
    }

    #[test]
    fn test_patch_address_space_plan() {
        let mut c = with_space();
        let key = ObjectKey::new("venus", "app1_ns");
        let before = c.store().address_spaces.find(&key).unwrap().clone();
        let patched = c
            .patch_address_space(
                &key,
                r#"[{"op":"replace","path":"/Spec/Plan","value":"standard-medium"}]"#,
                JSON_PATCH,
            )
            .unwrap();
        assert_eq!(patched.spec.plan.spec.display_name, "Medium");
        assert_eq!(patched.metadata, before.metadata);
        assert_eq!(c.store().address_spaces.find(&key), Some(&patched));
    }

    #[test]
    fn test_patch_address_space_rejections_leave_state() {
        let mut c = with_space();
        let key = ObjectKey::new("venus", "app1_ns");
        let before = c.store().address_spaces.find(&key).unwrap().clone();

        let err = c
            .patch_address_space(
                &key,
                r#"[{"op":"replace","path":"/Metadata/Namespace","value":"app2_ns"}]"#,
                JSON_PATCH,
            )
            .unwrap_err();
        assert!(matches!(err, Error::ImmutableField { .. }));

        let err = c
            .patch_address_space(&key, "[]", "application/merge-patch+json")
            .unwrap_err();
        assert!(matches!(err, Error::Unsupported { .. }));

        let err = c
            .patch_address_space(
                &key,
                r#"[{"op":"replace","path":"/Spec/Plan","value":"nope"}]"#,
                JSON_PATCH,
            )
            .unwrap_err();
        assert!(err.is_not_found());

        assert_eq!(c.store().address_spaces.find(&key), Some(&before));
    }

    #[test]
    fn test_patch_missing_address_space() {
        let mut c = console();
        let err = c
            .patch_address_space(&ObjectKey::new("x", "app1_ns"), "[]", JSON_PATCH)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_patch_address_plan_and_status() {
        let mut c = with_space();
        c.create_address(queue("io")).unwrap();
        let key = ObjectKey::new("venus.io", "app1_ns");
        let patched = c
            .patch_address(
                &key,
                r#"[{"op":"replace","path":"/Spec/Plan","value":"standard-medium-queue"},
                    {"op":"replace","path":"/Status/Phase","value":"Pending"}]"#,
                JSON_PATCH,
            )
            .unwrap();
        assert_eq!(patched.spec.plan.metadata.name, "standard-medium-queue");
        assert_eq!(patched.status.phase, "Pending");
    }

    #[test]
    fn test_patch_address_name_rejected() {
        let mut c = with_space();
        c.create_address(queue("io")).unwrap();
        let err = c
            .patch_address(
                &ObjectKey::new("venus.io", "app1_ns"),
                r#"[{"op":"replace","path":"/Metadata/Name","value":"venus.europa"}]"#,
                JSON_PATCH,
            )
            .unwrap_err();
        assert!(matches!(err, Error::ImmutableField { .. }));
    }

    #[test]
    fn test_delete_does_not_cascade() {
        let mut c = with_space();
        c.create_address(queue("io")).unwrap();
        let key = ObjectKey::new("venus", "app1_ns");
        c.delete_address_space(&key).unwrap();
        assert!(c.store().address_spaces.is_empty());
        assert_eq!(c.store().addresses.len(), 1);
        assert!(c.delete_address_space(&key).unwrap_err().is_not_found());
    }

    #[test]
    fn test_delete_address() {
        let mut c = with_space();
        c.create_address(queue("io")).unwrap();
        let key = ObjectKey::new("venus.io", "app1_ns");
        assert_eq!(c.delete_address(&key).unwrap().spec.address, "io");
        assert!(c.delete_address(&key).unwrap_err().is_not_found());
    }

    #[test]
    fn test_create_connection() {
        let mut c = with_space();
        let key = ObjectKey::new("venus", "app1_ns");
        let conn = c.create_connection(&key, "juno").unwrap();
        let (host, port) = conn.hostname.split_once(':').unwrap();
        assert_eq!(host, "juno");
        let port: u32 = port.parse().unwrap();
        assert!((40000..=65535).contains(&port));
        assert_eq!(conn.protocol, "amqp");
        assert!(conn.properties.is_empty());

        let uid = c.store().address_spaces.find(&key).unwrap().metadata.uid;
        assert_eq!(conn.address_space.uid, uid);
        assert_eq!(c.index().connections_of(&uid), [conn.container_id]);
    }

    #[test]
    fn test_sender_links_round_robin() {
        let mut c = with_space();
        let key = ObjectKey::new("venus", "app1_ns");
        let conn = c.create_connection(&key, "juno").unwrap();
        assert_eq!(c.attach_sender_link(&conn.container_id).unwrap(), None);

        c.create_address(queue("io")).unwrap();
        c.create_address(queue("europa")).unwrap();
        let picks: Vec<String> = (0..3)
            .map(|_| c.attach_sender_link(&conn.container_id).unwrap().unwrap().address)
            .collect();
        assert_eq!(picks, ["venus.io", "venus.europa", "venus.io"]);
        assert!(c.store().links.iter().all(|l| l.role == LinkRole::Sender));
    }

    #[test]
    fn test_attach_link_unknown_connection() {
        let mut c = with_space();
        assert!(c.attach_sender_link("missing").unwrap_err().is_not_found());
    }
}
