use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::VecDeque;
use uuid::Uuid;

use crate::change_aware::{Change, ChangeAware, ChangeKind};
use crate::entity::EntityKind;
use crate::StoreResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    pub op_id: Uuid,
    pub entity: EntityKind,
    pub id: u64,
    pub label: String,
    pub kind: ChangeKind,
    pub at: DateTime<Utc>,
}

impl ActivityEntry {
    /// One-line description for the dashboard, e.g.
    /// `product "Nero Marquina Black" marked low_stock`.
    pub fn describe(&self) -> String {
        let what = match &self.kind {
            ChangeKind::Created => "created".to_string(),
            ChangeKind::Updated => "updated".to_string(),
            ChangeKind::Deleted => "deleted".to_string(),
            ChangeKind::StatusChanged { to, .. } => format!("marked {to}"),
            ChangeKind::FeaturedToggled { featured: true } => "featured".to_string(),
            ChangeKind::FeaturedToggled { featured: false } => "unfeatured".to_string(),
        };
        format!("{} {:?} {what}", self.entity, self.label)
    }
}

/// Recent committed changes across all list pages, newest first.
///
/// Register one feed with every page's tracker. Rolled-back changes are
/// never recorded.
pub struct ActivityFeed {
    entries: RwLock<VecDeque<ActivityEntry>>,
    capacity: usize,
}

impl ActivityFeed {
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: RwLock::new(VecDeque::new()),
            capacity: capacity.max(1),
        }
    }

    pub fn recent(&self) -> Vec<ActivityEntry> {
        self.entries.read().iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    fn record(&self, change: &Change) {
        let mut entries = self.entries.write();
        entries.push_front(ActivityEntry {
            op_id: change.op_id,
            entity: change.entity,
            id: change.id,
            label: change.label.clone(),
            kind: change.kind.clone(),
            at: Utc::now(),
        });
        entries.truncate(self.capacity);
    }
}

#[async_trait]
impl ChangeAware for ActivityFeed {
    async fn on_commit(&self, change: &Change) -> StoreResult<()> {
        self.record(change);
        Ok(())
    }

    async fn on_rollback(&self, change: &Change) -> StoreResult<()> {
        log::debug!("activity feed skipping rolled back {}", change.op_id);
        Ok(())
    }
}
