//! The Executor - single entry point to the console.
//!
//! The Executor is a dispatcher that routes commands to the console's
//! queries and mutations and converts results to outputs.

use consolemock_engine::{Console, ConsoleConfig};
use rand::rngs::StdRng;
use rand::Rng;
use tracing::debug;

use crate::handlers::{address, address_space, catalog, connection};
use crate::{Command, Output, Result};

/// The command executor - single entry point to the console.
///
/// The Executor owns the [`Console`]; all state lives there. Commands run
/// one at a time, in order.
///
/// # Example
///
/// ```
/// use consolemock_executor::{Command, Executor, Output};
///
/// let mut executor = Executor::seeded(3).unwrap();
///
/// // Single command execution
/// let result = executor
///     .execute(Command::AddressSpaces {
///         namespace: Some("app2_ns".into()),
///         first: None,
///         offset: None,
///     })
///     .unwrap();
/// match result {
///     Output::AddressSpacePage(page) => assert_eq!(page.total, 1),
///     _ => unreachable!(),
/// }
///
/// // Batch execution
/// let results = executor.execute_many(vec![Command::Hello, Command::Namespaces]);
/// assert!(results.iter().all(|r| r.is_ok()));
/// ```
pub struct Executor<R = StdRng> {
    console: Console<R>,
}

impl Executor<StdRng> {
    /// Create an executor over a console built from `config`.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        Ok(Self::new(Console::from_config(config)?))
    }

    /// Create an executor over the fixture data with a fixed seed.
    pub fn seeded(seed: u64) -> Result<Self> {
        Ok(Self::new(Console::seeded(seed)?))
    }
}

impl<R: Rng> Executor<R> {
    /// Create a new executor wrapping a console.
    pub fn new(console: Console<R>) -> Self {
        Self { console }
    }

    /// Execute a single command.
    ///
    /// Returns the command result or an error. A failed mutation leaves the
    /// console unchanged.
    pub fn execute(&mut self, cmd: Command) -> Result<Output> {
        debug!(target: "consolemock::executor", command = cmd.name(), "execute");
        let c = &mut self.console;
        match cmd {
            // Catalog commands
            Command::Hello => catalog::hello(c),
            Command::Namespaces => catalog::namespaces(c),
            Command::AddressTypes => catalog::address_types(c),
            Command::AddressSpaceTypes => catalog::address_space_types(c),
            Command::AddressSpacePlans { address_space_type } => {
                catalog::address_space_plans(c, address_space_type)
            }
            Command::AddressPlans { address_space_plan } => {
                catalog::address_plans(c, address_space_plan)
            }

            // List commands
            Command::AddressSpaces {
                namespace,
                first,
                offset,
            } => address_space::address_spaces(c, namespace, first, offset),
            Command::Addresses {
                namespace,
                address_space,
                first,
                offset,
            } => address::addresses(c, namespace, address_space, first, offset),
            Command::Connections {
                namespace,
                address_space,
                first,
                offset,
            } => connection::connections(c, namespace, address_space, first, offset),

            // Nested list commands
            Command::AddressSpaceConnections { key, first, offset } => {
                address_space::address_space_connections(c, key, first, offset)
            }
            Command::AddressLinks { key, first, offset } => {
                address::links(c, key, first, offset)
            }
            Command::ConnectionLinks {
                container_id,
                first,
                offset,
            } => connection::links(c, container_id, first, offset),

            // Mutation commands
            Command::CreateAddressSpace { input } => address_space::create(c, input),
            Command::PatchAddressSpace {
                input,
                json_patch,
                patch_type,
            } => address_space::patch(c, input, json_patch, patch_type),
            Command::DeleteAddressSpace { input } => address_space::delete(c, input),
            Command::CreateAddress { input } => address::create(c, input),
            Command::PatchAddress {
                input,
                json_patch,
                patch_type,
            } => address::patch(c, input, json_patch, patch_type),
            Command::DeleteAddress { input } => address::delete(c, input),
        }
    }

    /// Execute multiple commands sequentially.
    ///
    /// Returns all results in the same order as the input commands.
    /// Execution continues even if some commands fail.
    pub fn execute_many(&mut self, cmds: Vec<Command>) -> Vec<Result<Output>> {
        cmds.into_iter().map(|cmd| self.execute(cmd)).collect()
    }

    /// The console behind this executor.
    pub fn console(&self) -> &Console<R> {
        &self.console
    }
}
