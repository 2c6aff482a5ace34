use async_trait::async_trait;
use parking_lot::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use marble_admin::{
    Change, ChangeAware, Entity, EntityStore, InMemoryStore, StoreError, StoreResult,
};

/// In-memory store whose writes can be made to fail, to exercise rollback.
pub struct FlakyStore<E: Entity> {
    inner: InMemoryStore<E>,
    failing: AtomicBool,
}

impl<E: Entity> FlakyStore<E> {
    pub fn new(seed: Vec<E>) -> Arc<Self> {
        Arc::new(Self {
            inner: InMemoryStore::new(seed).expect("valid seed"),
            failing: AtomicBool::new(false),
        })
    }

    pub fn fail_writes(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    pub fn get(&self, id: u64) -> Option<E> {
        self.inner.get(id)
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    fn check(&self) -> StoreResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(StoreError::Transport("connection reset".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl<E: Entity> EntityStore<E> for FlakyStore<E> {
    async fn load_entities(&self) -> StoreResult<Vec<E>> {
        self.inner.load_entities().await
    }

    async fn save_entity(&self, id: Option<u64>, record: E) -> StoreResult<E> {
        self.check()?;
        self.inner.save_entity(id, record).await
    }

    async fn delete_entity(&self, id: u64) -> StoreResult<()> {
        self.check()?;
        self.inner.delete_entity(id).await
    }

    async fn set_status(&self, id: u64, status: E::Status) -> StoreResult<E> {
        self.check()?;
        self.inner.set_status(id, status).await
    }
}

/// Change-aware observer that remembers what it was told
#[derive(Default)]
pub struct RecordingObserver {
    committed: RwLock<Vec<Change>>,
    rolled_back: RwLock<Vec<Change>>,
}

impl RecordingObserver {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn committed(&self) -> Vec<Change> {
        self.committed.read().clone()
    }

    pub fn rolled_back(&self) -> Vec<Change> {
        self.rolled_back.read().clone()
    }
}

#[async_trait]
impl ChangeAware for RecordingObserver {
    async fn on_commit(&self, change: &Change) -> StoreResult<()> {
        self.committed.write().push(change.clone());
        Ok(())
    }

    async fn on_rollback(&self, change: &Change) -> StoreResult<()> {
        self.rolled_back.write().push(change.clone());
        Ok(())
    }
}

/// Change-aware observer whose hooks always fail
pub struct FailingObserver;

#[async_trait]
impl ChangeAware for FailingObserver {
    async fn on_commit(&self, _change: &Change) -> StoreResult<()> {
        Err(StoreError::Transport("feed unavailable".to_string()))
    }

    async fn on_rollback(&self, _change: &Change) -> StoreResult<()> {
        Err(StoreError::Transport("feed unavailable".to_string()))
    }
}
