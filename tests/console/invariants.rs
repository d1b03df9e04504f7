//! Invariants that hold across mutation sequences.

use crate::common::*;
use consolemock::{AddressInput, AddressSpaceInput, Command, ObjectKey, Output};
use std::collections::HashSet;

const JSON_PATCH: &str = "application/json-patch+json";

#[test]
fn keys_stay_unique_after_mixed_mutations() {
    let mut executor = create_executor();
    let cmds = vec![
        Command::CreateAddressSpace {
            input: AddressSpaceInput::new("venus", "app1_ns", "standard-small", "standard"),
        },
        Command::CreateAddressSpace {
            input: AddressSpaceInput::new("venus", "app1_ns", "standard-small", "standard"),
        },
        Command::CreateAddress {
            input: AddressInput::new("venus", "app1_ns", "a", "standard-small-queue", "queue"),
        },
        Command::CreateAddress {
            input: AddressInput::new("venus", "app1_ns", "a", "standard-small-queue", "queue"),
        },
        Command::DeleteAddress {
            input: ObjectKey::new("venus.a", "app1_ns"),
        },
        Command::CreateAddress {
            input: AddressInput::new("venus", "app1_ns", "a", "standard-small-queue", "queue"),
        },
    ];
    let results = executor.execute_many(cmds);
    let failures = results.iter().filter(|r| r.is_err()).count();
    assert_eq!(failures, 2);

    let spaces = all_spaces(&mut executor);
    let keys: HashSet<(String, String)> = spaces
        .items
        .iter()
        .map(|s| {
            (
                s.resource.metadata.name.clone(),
                s.resource.metadata.namespace.clone(),
            )
        })
        .collect();
    assert_eq!(keys.len(), spaces.items.len());

    let addresses = all_addresses(&mut executor);
    assert_eq!(addresses.total, 22);
}

#[test]
fn uids_are_unique() {
    let mut executor = create_executor();
    let mut uids = HashSet::new();
    for item in all_spaces(&mut executor).items {
        assert!(uids.insert(item.resource.metadata.uid));
    }
    for item in all_addresses(&mut executor).items {
        assert!(uids.insert(item.resource.metadata.uid));
    }
}

#[test]
fn addresses_carry_their_space_prefix() {
    let mut executor = create_executor();
    for item in all_addresses(&mut executor).items {
        let prefix = format!("{}.", item.resource.spec.address_space);
        assert!(item.resource.metadata.name.starts_with(&prefix));
    }
}

#[test]
fn creation_timestamps_are_in_the_past() {
    let mut executor = create_executor();
    let now = chrono::Utc::now();
    for item in all_spaces(&mut executor).items {
        let age = now - item.resource.metadata.creation_timestamp;
        assert!(age >= chrono::Duration::zero());
        assert!(age <= chrono::Duration::days(3));
    }
}

#[test]
fn noop_patch_keeps_resource() {
    let mut executor = create_executor();
    let before = all_spaces(&mut executor).items[0].resource.clone();
    let out = executor
        .execute(Command::PatchAddressSpace {
            input: ObjectKey::new("jupiter_as1", "app1_ns"),
            json_patch: "[]".into(),
            patch_type: JSON_PATCH.into(),
        })
        .unwrap();
    assert_eq!(out, Output::AddressSpace(before));
}

#[test]
fn same_seed_same_fixture_connections() {
    let mut a = create_executor();
    let mut b = create_executor();
    let hosts = |page: consolemock::Page<consolemock::ConnectionItem>| -> Vec<String> {
        page.items.into_iter().map(|c| c.resource.hostname).collect()
    };
    assert_eq!(hosts(all_connections(&mut a)), hosts(all_connections(&mut b)));
}
