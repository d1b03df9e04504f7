//! The console: catalog, store, relationship index and random source
//!
//! `Console` owns all mutable state. Queries take `&self`; mutations and
//! metric synthesis take `&mut self` (metrics draw from the random source).
//!
//! # Example
//!
//! ```
//! use consolemock_engine::Console;
//!
//! let console = Console::seeded(7).unwrap();
//! let page = console.address_spaces(Some("app1_ns"), None, None).unwrap();
//! assert_eq!(page.total, 2);
//! ```

mod mutation;
mod patch;
mod query;
mod seed;

use chrono::{DateTime, Duration, Utc};
use consolemock_core::{ObjectKey, ObjectMeta, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::config::ConsoleConfig;
use crate::index::RelationshipIndex;
use crate::store::ResourceStore;

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

/// In-memory management API state
#[derive(Debug, Clone)]
pub struct Console<R = StdRng> {
    catalog: Catalog,
    store: ResourceStore,
    index: RelationshipIndex,
    rng: R,
    creation_skew_days: u32,
}

impl Console<StdRng> {
    /// Build a console as described by `config`
    ///
    /// Seeds the random source from `rng_seed` (or the OS when unset) and
    /// loads the fixtures when `seed_fixtures` is set.
    pub fn from_config(config: &ConsoleConfig) -> Result<Self> {
        let rng = match config.rng_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut console = Console::with_rng(rng).with_creation_skew_days(config.creation_skew_days);
        if config.seed_fixtures {
            console.seed_fixtures()?;
        }
        info!(
            target: "consolemock::console",
            seeded = config.seed_fixtures,
            fixed_seed = config.rng_seed.is_some(),
            "Console ready"
        );
        Ok(console)
    }

    /// A console with fixtures, driven by a fixed seed
    pub fn seeded(seed: u64) -> Result<Self> {
        let mut console = Console::with_rng(StdRng::seed_from_u64(seed));
        console.seed_fixtures()?;
        Ok(console)
    }
}

impl<R: Rng> Console<R> {
    /// An empty console over the standard catalog
    pub fn with_rng(rng: R) -> Self {
        Console {
            catalog: Catalog::standard(),
            store: ResourceStore::new(),
            index: RelationshipIndex::new(),
            rng,
            creation_skew_days: 3,
        }
    }

    /// Replace the catalog
    pub fn with_catalog(mut self, catalog: Catalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set how many days in the past creation timestamps may fall
    pub fn with_creation_skew_days(mut self, days: u32) -> Self {
        self.creation_skew_days = days;
        self
    }

    /// Reference data
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Stored resources
    pub fn store(&self) -> &ResourceStore {
        &self.store
    }

    /// Derived relationships
    pub fn index(&self) -> &RelationshipIndex {
        &self.index
    }

    /// Fresh identity for a resource being created
    fn new_meta(&mut self, key: &ObjectKey) -> ObjectMeta {
        ObjectMeta {
            name: key.name.clone(),
            namespace: key.namespace.clone(),
            uid: self.new_uid(),
            creation_timestamp: self.creation_timestamp(),
        }
    }

    fn new_uid(&mut self) -> Uuid {
        uuid::Builder::from_random_bytes(self.rng.gen()).into_uuid()
    }

    /// Now, minus a random offset of up to the configured skew
    fn creation_timestamp(&mut self) -> DateTime<Utc> {
        let skew = i64::from(self.creation_skew_days) * MILLIS_PER_DAY;
        let offset = if skew > 0 {
            self.rng.gen_range(0..skew)
        } else {
            0
        };
        Utc::now() - Duration::milliseconds(offset)
    }
}
