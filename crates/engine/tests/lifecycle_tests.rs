//! Resource Lifecycle Integration Tests
//!
//! End-to-end behavior of the console over the fixture data:
//! create, query, patch and delete through the public API only.

use consolemock_core::{AddressInput, AddressSpaceInput, Error, ObjectKey};
use consolemock_engine::{Console, ConsoleConfig};

const JSON_PATCH: &str = "application/json-patch+json";

// ============================================================================
// Test Helpers
// ============================================================================

fn console() -> Console {
    Console::seeded(2024).unwrap()
}

fn space_names(console: &Console, namespace: Option<&str>) -> Vec<String> {
    console
        .address_spaces(namespace, None, None)
        .unwrap()
        .items
        .into_iter()
        .map(|s| s.metadata.name)
        .collect()
}

// ============================================================================
// Creation
// ============================================================================

#[test]
fn created_space_is_listed_last() {
    let mut c = console();
    c.create_address_space(AddressSpaceInput::new(
        "uranus_as3",
        "app2_ns",
        "brokered-single-broker",
        "brokered",
    ))
    .unwrap();
    assert_eq!(space_names(&c, Some("app2_ns")), ["mars_as2", "uranus_as3"]);
}

#[test]
fn unknown_namespace_and_duplicates_rejected() {
    let mut c = console();
    let err = c
        .create_address_space(AddressSpaceInput::new("x", "ghost_ns", "standard-small", "standard"))
        .unwrap_err();
    assert!(err.is_not_found());

    let err = c
        .create_address_space(AddressSpaceInput::new(
            "jupiter_as1",
            "app1_ns",
            "standard-small",
            "standard",
        ))
        .unwrap_err();
    assert!(matches!(err, Error::AlreadyExists { .. }));
    assert_eq!(c.address_spaces(None, None, None).unwrap().total, 3);
}

#[test]
fn new_space_has_no_connections() {
    let mut c = console();
    c.create_address_space(AddressSpaceInput::new("neptune", "app1_ns", "standard-small", "standard"))
        .unwrap();
    let page = c
        .address_space_connections(&ObjectKey::new("neptune", "app1_ns"), None, None)
        .unwrap();
    assert_eq!(page.total, 0);

    let space = c.store().address_spaces.find(&ObjectKey::new("neptune", "app1_ns")).unwrap().clone();
    let metrics = c.address_space_metrics(&space);
    assert_eq!(metrics[0].value, 0.0);
    assert_eq!(metrics[1].value, 0.0);
}

#[test]
fn created_address_counts_towards_space() {
    let mut c = console();
    c.create_address(AddressInput::new(
        "mars_as2",
        "app2_ns",
        "olympus",
        "brokered-topic",
        "topic",
    ))
    .unwrap();
    let page = c.addresses(Some("app2_ns"), Some("mars_as2"), None, None).unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.items[2].metadata.name, "mars_as2.olympus");
}

// ============================================================================
// Patching
// ============================================================================

#[test]
fn plan_patch_reads_back_full_catalog_object() {
    let mut c = console();
    let key = ObjectKey::new("jupiter_as1", "app1_ns");
    c.patch_address_space(
        &key,
        r#"[{"op":"replace","path":"/Spec/Plan","value":"standard-medium"}]"#,
        JSON_PATCH,
    )
    .unwrap();

    let page = c.address_spaces(Some("app1_ns"), Some(1), None).unwrap();
    let plan = &page.items[0].spec.plan;
    let expected = c.catalog().find_address_space_plan("standard-medium").unwrap();
    assert_eq!(plan, expected);
}

#[test]
fn uid_patch_rejected_whatever_else_it_does() {
    let mut c = console();
    let key = ObjectKey::new("saturn_as2", "app1_ns");
    let err = c
        .patch_address_space(
            &key,
            r#"[{"op":"replace","path":"/Spec/Plan","value":"standard-small"},
                {"op":"replace","path":"/Metadata/Uid","value":"00000000-0000-0000-0000-000000000000"},
                {"op":"add","path":"/Status/messages/-","value":"hi"}]"#,
            JSON_PATCH,
        )
        .unwrap_err();
    assert!(matches!(err, Error::ImmutableField { .. }));
    let space = c.store().address_spaces.find(&key).unwrap();
    assert_eq!(space.spec.plan.metadata.name, "standard-medium");
    assert!(space.status.messages.is_empty());
}

#[test]
fn creation_timestamp_patch_rejected() {
    let mut c = console();
    let key = ObjectKey::new("jupiter_as1", "app1_ns");
    let before = c.store().address_spaces.find(&key).unwrap().metadata.creation_timestamp;
    let err = c
        .patch_address_space(
            &key,
            r#"[{"op":"replace","path":"/Metadata/CreationTimestamp","value":"2000-01-01T00:00:00Z"}]"#,
            JSON_PATCH,
        )
        .unwrap_err();
    assert!(matches!(err, Error::ImmutableField { .. }));
    let after = c.store().address_spaces.find(&key).unwrap().metadata.creation_timestamp;
    assert_eq!(before, after);
}

#[test]
fn address_creation_timestamp_patch_rejected() {
    let mut c = console();
    let err = c
        .patch_address(
            &ObjectKey::new("mars_as2.phobos", "app2_ns"),
            r#"[{"op":"remove","path":"/Metadata/CreationTimestamp"}]"#,
            JSON_PATCH,
        )
        .unwrap_err();
    assert!(matches!(err, Error::ImmutableField { .. }));
}

#[test]
fn merge_patch_unsupported_even_when_empty() {
    let mut c = console();
    let err = c
        .patch_address(
            &ObjectKey::new("jupiter_as1.io", "app1_ns"),
            "[]",
            "application/merge-patch+json",
        )
        .unwrap_err();
    assert!(matches!(err, Error::Unsupported { .. }));
}

#[test]
fn status_patch_applies() {
    let mut c = console();
    let key = ObjectKey::new("mars_as2", "app2_ns");
    let patched = c
        .patch_address_space(
            &key,
            r#"[{"op":"replace","path":"/Status/isReady","value":false},
                {"op":"add","path":"/Status/messages/-","value":"broker restarting"}]"#,
            JSON_PATCH,
        )
        .unwrap();
    assert!(!patched.status.is_ready);
    assert_eq!(patched.status.messages, ["broker restarting"]);
}

// ============================================================================
// Deletion
// ============================================================================

#[test]
fn deleted_space_leaves_addresses_queryable() {
    let mut c = console();
    c.delete_address_space(&ObjectKey::new("jupiter_as1", "app1_ns"))
        .unwrap();
    assert_eq!(space_names(&c, Some("app1_ns")), ["saturn_as2"]);

    let orphans = c
        .addresses(Some("app1_ns"), None, None, None)
        .unwrap()
        .items
        .into_iter()
        .filter(|a| a.metadata.name.starts_with("jupiter_as1."))
        .count();
    assert_eq!(orphans, 12);

    // Filtering by the deleted space is no longer possible
    assert!(c
        .addresses(Some("app1_ns"), Some("jupiter_as1"), None, None)
        .unwrap_err()
        .is_not_found());
}

#[test]
fn deleted_address_disappears() {
    let mut c = console();
    let key = ObjectKey::new("saturn_as2.titan", "app1_ns");
    c.delete_address(&key).unwrap();
    let page = c.addresses(Some("app1_ns"), Some("saturn_as2"), None, None).unwrap();
    assert_eq!(page.total, 6);
    assert!(page.items.iter().all(|a| a.metadata.name != key.name));
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn same_config_seed_same_identities() {
    let config = ConsoleConfig {
        rng_seed: Some(77),
        ..ConsoleConfig::default()
    };
    let a = Console::from_config(&config).unwrap();
    let b = Console::from_config(&config).unwrap();
    let uids = |c: &Console| -> Vec<String> {
        c.store()
            .addresses
            .iter()
            .map(|a| a.metadata.uid.to_string())
            .collect()
    };
    assert_eq!(uids(&a), uids(&b));
    assert_eq!(
        a.store().connections.as_slice()[0].hostname,
        b.store().connections.as_slice()[0].hostname
    );
}
