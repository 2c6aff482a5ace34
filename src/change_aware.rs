use async_trait::async_trait;
use uuid::Uuid;

use crate::entity::EntityKind;
use crate::StoreResult;

/// What a list-page mutation did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Updated,
    Deleted,
    StatusChanged {
        from: &'static str,
        to: &'static str,
    },
    FeaturedToggled {
        featured: bool,
    },
}

/// One mutation, as reported to [`ChangeAware`] observers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Change {
    /// Id of the session that carried the mutation.
    pub op_id: Uuid,
    pub entity: EntityKind,
    pub id: u64,
    pub label: String,
    pub kind: ChangeKind,
}

/// Trait for components that need to be notified when a change session
/// ends.
///
/// Components implementing this trait can be registered with a
/// [`ChangeTracker`](crate::ChangeTracker) to hear about every change it
/// commits or rolls back, e.g. to keep an activity feed or invalidate a cache.
#[async_trait]
pub trait ChangeAware: Send + Sync {
    /// Called after the store accepted the change.
    async fn on_commit(&self, change: &Change) -> StoreResult<()>;

    /// Called after the store refused the change and the local collection
    /// was restored.
    async fn on_rollback(&self, change: &Change) -> StoreResult<()>;
}
