//! Every command kind produces its output variant over the fixture data.

use crate::common::*;
use consolemock::{
    AddressSpaceType, AddressType, Command, LinkRole, ObjectKey, Output,
};

#[test]
fn hello_returns_world() {
    let mut executor = create_executor();
    assert_eq!(
        executor.execute(Command::Hello).unwrap(),
        Output::Text("world".into())
    );
}

#[test]
fn type_enumerations() {
    let mut executor = create_executor();
    match executor.execute(Command::AddressSpaceTypes).unwrap() {
        Output::AddressSpaceTypes(types) => assert_eq!(
            types,
            [AddressSpaceType::Standard, AddressSpaceType::Brokered]
        ),
        other => panic!("Expected AddressSpaceTypes, got {:?}", other),
    }
    match executor.execute(Command::AddressTypes).unwrap() {
        Output::AddressTypes(types) => {
            assert_eq!(types.len(), 5);
            assert!(types.contains(&AddressType::Subscription));
        }
        other => panic!("Expected AddressTypes, got {:?}", other),
    }
}

#[test]
fn plans_ordered_by_display_order() {
    let mut executor = create_executor();
    match executor
        .execute(Command::AddressSpacePlans {
            address_space_type: Some("standard".into()),
        })
        .unwrap()
    {
        Output::AddressSpacePlans(plans) => {
            let orders: Vec<u32> = plans.iter().map(|p| p.spec.display_order).collect();
            assert_eq!(orders, [0, 1]);
        }
        other => panic!("Expected AddressSpacePlans, got {:?}", other),
    }
}

#[test]
fn address_plans_of_brokered_space_plan() {
    let mut executor = create_executor();
    match executor
        .execute(Command::AddressPlans {
            address_space_plan: Some("brokered-single-broker".into()),
        })
        .unwrap()
    {
        Output::AddressPlans(plans) => {
            assert_eq!(plans.len(), 2);
            assert!(plans.iter().all(|p| p.metadata.name.starts_with("brokered-")));
        }
        other => panic!("Expected AddressPlans, got {:?}", other),
    }
}

#[test]
fn fixture_totals() {
    let mut executor = create_executor();
    assert_eq!(all_spaces(&mut executor).total, 3);
    assert_eq!(all_addresses(&mut executor).total, 21);
    assert_eq!(all_connections(&mut executor).total, 31);
}

#[test]
fn links_of_every_connection() {
    let mut executor = create_executor();
    let connections = all_connections(&mut executor);
    for item in connections.items {
        match executor
            .execute(Command::ConnectionLinks {
                container_id: item.resource.container_id.clone(),
                first: None,
                offset: None,
            })
            .unwrap()
        {
            Output::LinkPage(page) => {
                assert_eq!(page.total, 1);
                assert_eq!(page.items[0].resource.role, LinkRole::Sender);
                let expected = match item.resource.address_space.kind {
                    AddressSpaceType::Brokered => 1,
                    AddressSpaceType::Standard => 6,
                };
                assert_eq!(page.items[0].metrics.len(), expected);
            }
            other => panic!("Expected LinkPage, got {:?}", other),
        }
    }
}

#[test]
fn space_connections_past_the_end() {
    let mut executor = create_executor();
    match executor
        .execute(Command::AddressSpaceConnections {
            key: ObjectKey::new("saturn_as2", "app1_ns"),
            first: Some(10),
            offset: Some(5),
        })
        .unwrap()
    {
        Output::ConnectionPage(page) => {
            assert_eq!(page.total, 1);
            assert!(page.items.is_empty());
        }
        other => panic!("Expected ConnectionPage, got {:?}", other),
    }
}
