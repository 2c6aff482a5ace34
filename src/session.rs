use parking_lot::RwLock;
use std::sync::Arc;
use uuid::Uuid;

use crate::change_aware::{Change, ChangeAware};
use crate::entity::Entity;

/// Factory for change sessions and registry of their observers.
///
/// Every mutation a list page makes runs inside one [`ChangeSession`]: the
/// local collection is snapshotted, changed right away, and either kept
/// (commit) or restored (rollback) once the store answers.
#[derive(Clone, Default)]
pub struct ChangeTracker {
    observers: Arc<RwLock<Vec<Arc<dyn ChangeAware>>>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a component that needs to be notified of session outcomes.
    pub fn register_change_aware(&self, observer: Arc<dyn ChangeAware>) {
        self.observers.write().push(observer);
    }

    pub fn observer_count(&self) -> usize {
        self.observers.read().len()
    }

    /// Begin a new session over `items`.
    pub fn begin<E: Entity>(&self, items: &[E]) -> ChangeSession<E> {
        ChangeSession {
            id: Uuid::new_v4(),
            snapshot: items.to_vec(),
            observers: Arc::clone(&self.observers),
        }
    }
}

/// A single optimistic change in flight.
pub struct ChangeSession<E: Entity> {
    id: Uuid,
    snapshot: Vec<E>,
    observers: Arc<RwLock<Vec<Arc<dyn ChangeAware>>>>,
}

impl<E: Entity> ChangeSession<E> {
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Keep the local change and notify all registered observers.
    ///
    /// The store has already accepted the change, so an observer failure is
    /// logged and does not undo it.
    pub async fn commit(self, change: &Change) {
        log::debug!(
            "commit {} ({:?} {} {})",
            self.id,
            change.kind,
            change.entity,
            change.id
        );

        // Notify observers after the store accepted the change
        let observers = self.observers.read().clone();
        for observer in observers.iter() {
            if let Err(err) = observer.on_commit(change).await {
                log::warn!("observer failed on commit of {}: {err}", self.id);
            }
        }
    }

    /// Restore `items` to the snapshot and notify all registered observers.
    /// Observer failures are logged; the caller reports the store's error.
    pub async fn rollback(self, items: &mut Vec<E>, change: &Change) {
        log::warn!(
            "rolling back {} ({:?} {} {})",
            self.id,
            change.kind,
            change.entity,
            change.id
        );
        *items = self.snapshot;

        // Notify observers once the local state is restored
        let observers = self.observers.read().clone();
        for observer in observers.iter() {
            if let Err(err) = observer.on_rollback(change).await {
                log::warn!("observer failed on rollback of {}: {err}", self.id);
            }
        }
    }
}
