use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashSet;

use crate::config::StockStatusPolicy;
use crate::entity::{Entity, StatusSet};
use crate::{StoreError, StoreResult};

/// Backend seam for one entity collection.
///
/// List pages only talk to a store through this trait, so a REST client or
/// a database repository can replace [`InMemoryStore`] without touching the
/// controllers.
#[async_trait]
pub trait EntityStore<E: Entity>: Send + Sync {
    /// Every record, in store order.
    async fn load_entities(&self) -> StoreResult<Vec<E>>;

    /// Creates (`id == None`) or replaces (`Some(id)`) a record and returns
    /// it as stored. Creates assign the next id.
    async fn save_entity(&self, id: Option<u64>, record: E) -> StoreResult<E>;

    async fn delete_entity(&self, id: u64) -> StoreResult<()>;

    /// Changes only the status of a record and returns it as stored.
    async fn set_status(&self, id: u64, status: E::Status) -> StoreResult<E>;
}

struct StoreState<E> {
    records: Vec<E>,
    next_id: u64,
}

/// Process-local store seeded from a fixed collection.
///
/// Ids are handed out from a counter that only moves forward, so an id is
/// never reused after a delete.
pub struct InMemoryStore<E: Entity> {
    state: RwLock<StoreState<E>>,
    policy: StockStatusPolicy,
}

impl<E: Entity> InMemoryStore<E> {
    /// Create a new store holding `seed`. Seed ids must be unique and
    /// non-zero.
    pub fn new(seed: Vec<E>) -> StoreResult<Self> {
        Self::with_policy(seed, StockStatusPolicy::default())
    }

    pub fn with_policy(seed: Vec<E>, policy: StockStatusPolicy) -> StoreResult<Self> {
        let mut seen = HashSet::with_capacity(seed.len());
        for record in &seed {
            if record.id() == 0 {
                return Err(StoreError::validation("id", "seed records need an id"));
            }
            if !seen.insert(record.id()) {
                return Err(StoreError::Conflict(format!(
                    "duplicate {} id {} in seed data",
                    E::KIND,
                    record.id()
                )));
            }
        }
        let next_id = seed
            .iter()
            .map(|record| record.id())
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(Self::ids_exhausted)?;
        log::debug!("seeded {} store with {} records", E::KIND, seed.len());

        Ok(Self {
            state: RwLock::new(StoreState {
                records: seed,
                next_id,
            }),
            policy,
        })
    }

    pub fn len(&self) -> usize {
        self.state.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, id: u64) -> Option<E> {
        self.state
            .read()
            .records
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    fn ids_exhausted() -> StoreError {
        StoreError::Conflict(format!("no {} ids left to assign", E::KIND))
    }

    fn not_found(id: u64) -> StoreError {
        StoreError::NotFound { kind: E::KIND, id }
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for InMemoryStore<E> {
    async fn load_entities(&self) -> StoreResult<Vec<E>> {
        Ok(self.state.read().records.clone())
    }

    async fn save_entity(&self, id: Option<u64>, mut record: E) -> StoreResult<E> {
        record.reconcile(self.policy);
        record.validate()?;

        let mut state = self.state.write();
        match id {
            None => {
                let id = state.next_id;
                state.next_id = id.checked_add(1).ok_or_else(Self::ids_exhausted)?;
                record.set_id(id);
                state.records.push(record.clone());
                log::info!("created {} {id}", E::KIND);
            }
            Some(id) => {
                if record.id() != 0 && record.id() != id {
                    return Err(StoreError::Conflict(format!(
                        "{} record carries id {} but targets {id}",
                        E::KIND,
                        record.id()
                    )));
                }
                record.set_id(id);
                let slot = state
                    .records
                    .iter_mut()
                    .find(|existing| existing.id() == id)
                    .ok_or_else(|| Self::not_found(id))?;
                *slot = record.clone();
                log::info!("updated {} {id}", E::KIND);
            }
        }
        Ok(record)
    }

    async fn delete_entity(&self, id: u64) -> StoreResult<()> {
        let mut state = self.state.write();
        let index = state
            .records
            .iter()
            .position(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        state.records.remove(index);
        log::info!("deleted {} {id}", E::KIND);
        Ok(())
    }

    async fn set_status(&self, id: u64, status: E::Status) -> StoreResult<E> {
        let mut state = self.state.write();
        let record = state
            .records
            .iter_mut()
            .find(|record| record.id() == id)
            .ok_or_else(|| Self::not_found(id))?;
        record.set_status(status);
        record.reconcile(self.policy);
        log::info!("{} {id} status -> {}", E::KIND, record.status().as_str());
        Ok(record.clone())
    }
}
