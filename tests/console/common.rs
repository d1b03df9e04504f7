//! Common test utilities for console tests

use consolemock::{Command, Executor, Output, Page, AddressItem, AddressSpaceItem, ConnectionItem};

/// Create an executor over the fixture data
pub fn create_executor() -> Executor {
    Executor::seeded(2024).unwrap()
}

/// List every address space
pub fn all_spaces(executor: &mut Executor) -> Page<AddressSpaceItem> {
    match executor
        .execute(Command::AddressSpaces {
            namespace: None,
            first: None,
            offset: None,
        })
        .unwrap()
    {
        Output::AddressSpacePage(page) => page,
        other => panic!("Expected AddressSpacePage, got {:?}", other),
    }
}

/// List every address
pub fn all_addresses(executor: &mut Executor) -> Page<AddressItem> {
    match executor
        .execute(Command::Addresses {
            namespace: None,
            address_space: None,
            first: None,
            offset: None,
        })
        .unwrap()
    {
        Output::AddressPage(page) => page,
        other => panic!("Expected AddressPage, got {:?}", other),
    }
}

/// List every connection
pub fn all_connections(executor: &mut Executor) -> Page<ConnectionItem> {
    match executor
        .execute(Command::Connections {
            namespace: None,
            address_space: None,
            first: None,
            offset: None,
        })
        .unwrap()
    {
        Output::ConnectionPage(page) => page,
        other => panic!("Expected ConnectionPage, got {:?}", other),
    }
}
