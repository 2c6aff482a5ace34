use serde_json::Value;
use std::sync::Arc;
use uuid::Uuid;

use crate::change_aware::{Change, ChangeAware, ChangeKind};
use crate::entity::{Entity, FilterField, StatusSet};
use crate::filter::{compute_visible, FilterValue, ListQuery};
use crate::form::{FormController, FormMode, Submission};
use crate::session::ChangeTracker;
use crate::store::EntityStore;
use crate::view::ViewMode;
use crate::{StoreError, StoreResult};

/// A user action on a list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListAction {
    /// Open an empty form.
    New,
    Edit(u64),
    Delete(u64),
    StatusChange { id: u64, status: String },
    ToggleFeatured(u64),
    /// Submit the open form.
    Save,
    /// Discard the open form.
    Close,
}

/// Per-page state for one entity collection.
///
/// Holds the local copy of the collection, the search and filter state, the
/// selected view mode and the open form, if any. Mutations are applied to
/// the local copy first and rolled back when the store refuses them.
pub struct ListController<E: Entity, S: EntityStore<E> + ?Sized> {
    store: Arc<S>,
    items: Vec<E>,
    query: ListQuery<E::Filter>,
    view_mode: ViewMode,
    form: Option<FormController<E>>,
    tracker: ChangeTracker,
}

impl<E: Entity, S: EntityStore<E> + ?Sized> ListController<E, S> {
    pub fn new(store: Arc<S>) -> Self {
        Self::with_tracker(store, ChangeTracker::new())
    }

    /// Shares `tracker` (and so its observers) with other pages.
    pub fn with_tracker(store: Arc<S>, tracker: ChangeTracker) -> Self {
        Self {
            store,
            items: Vec::new(),
            query: ListQuery::default(),
            view_mode: E::VIEW_MODES[0],
            form: None,
            tracker,
        }
    }

    /// Replaces the local collection with the store's contents.
    pub async fn load(&mut self) -> StoreResult<usize> {
        self.items = self.store.load_entities().await?;
        log::debug!("loaded {} {} records", self.items.len(), E::KIND);
        Ok(self.items.len())
    }

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn get(&self, id: u64) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// The visible sequence for the current search and filters.
    pub fn visible(&self) -> Vec<&E> {
        compute_visible(&self.items, &self.query)
    }

    pub fn query(&self) -> &ListQuery<E::Filter> {
        &self.query
    }

    pub fn search_term(&self) -> &str {
        self.query.search_term()
    }

    pub fn set_search_term(&mut self, term: impl Into<String>) {
        self.query.set_search_term(term);
    }

    pub fn set_filter(&mut self, field: E::Filter, value: impl Into<FilterValue>) {
        self.query.set_filter(field, value);
        self.log_filter(field);
    }

    /// Filter buttons that switch off when pressed twice.
    pub fn toggle_filter(&mut self, field: E::Filter, value: &str) {
        self.query.toggle_filter(field, value);
        self.log_filter(field);
    }

    fn log_filter(&self, field: E::Filter) {
        log::debug!(
            "{} filter {} = {}",
            E::KIND,
            field.name(),
            self.query.filter_value(field)
        );
    }

    pub fn clear_filters(&mut self) {
        self.query.clear();
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn supported_view_modes(&self) -> &'static [ViewMode] {
        E::VIEW_MODES
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) -> StoreResult<()> {
        if !E::VIEW_MODES.contains(&mode) {
            return Err(StoreError::UnsupportedView { kind: E::KIND, mode });
        }
        self.view_mode = mode;
        Ok(())
    }

    pub fn tracker(&self) -> &ChangeTracker {
        &self.tracker
    }

    pub fn register_change_aware(&self, observer: Arc<dyn ChangeAware>) {
        self.tracker.register_change_aware(observer);
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&FormController<E>> {
        self.form.as_ref()
    }

    /// The record the open form edits; `None` when creating or closed.
    pub fn editing(&self) -> Option<&E> {
        let id = self.form.as_ref()?.mode().target()?;
        self.get(id)
    }

    pub fn open_create(&mut self) -> StoreResult<()> {
        self.form = Some(FormController::open_create()?);
        Ok(())
    }

    pub fn open_edit(&mut self, id: u64) -> StoreResult<()> {
        let entity = self.get(id).ok_or(StoreError::NotFound { kind: E::KIND, id })?;
        self.form = Some(FormController::open_edit(entity)?);
        Ok(())
    }

    pub fn set_field(&mut self, name: &str, value: impl Into<Value>) -> StoreResult<()> {
        self.form
            .as_mut()
            .ok_or(StoreError::FormClosed)?
            .set_field(name, value)
    }

    pub fn cancel_form(&mut self) {
        if self.form.take().is_some() {
            log::debug!("discarded {} draft", E::KIND);
        }
    }

    /// Saves the open form. The form closes when the store accepts the
    /// record and stays open, draft intact, when it does not.
    pub async fn submit_form(&mut self) -> StoreResult<E> {
        let Submission { mode, record } = self
            .form
            .as_ref()
            .ok_or(StoreError::FormClosed)?
            .submit()?;
        record.validate()?;

        let saved = match mode {
            FormMode::Create => self.create(record).await?,
            FormMode::Edit(id) => self.update(id, record).await?,
        };
        self.form = None;
        Ok(saved)
    }

    // The id is assigned by the store, so creates wait for it.
    async fn create(&mut self, record: E) -> StoreResult<E> {
        let session = self.tracker.begin(&self.items);
        match self.store.save_entity(None, record.clone()).await {
            Ok(saved) => {
                self.items.push(saved.clone());
                let change = change_for(session.id(), &saved, ChangeKind::Created);
                session.commit(&change).await;
                Ok(saved)
            }
            Err(err) => {
                let change = change_for(session.id(), &record, ChangeKind::Created);
                session.rollback(&mut self.items, &change).await;
                Err(err)
            }
        }
    }

    async fn update(&mut self, id: u64, record: E) -> StoreResult<E> {
        let index = self.index_of(id)?;
        let session = self.tracker.begin(&self.items);
        let change = change_for(session.id(), &record, ChangeKind::Updated);
        self.items[index] = record.clone();

        match self.store.save_entity(Some(id), record).await {
            Ok(saved) => {
                self.items[index] = saved.clone();
                session.commit(&change).await;
                Ok(saved)
            }
            Err(err) => {
                session.rollback(&mut self.items, &change).await;
                Err(err)
            }
        }
    }

    pub async fn delete(&mut self, id: u64) -> StoreResult<()> {
        let index = self.index_of(id)?;
        let session = self.tracker.begin(&self.items);
        let removed = self.items.remove(index);
        let change = change_for(session.id(), &removed, ChangeKind::Deleted);

        match self.store.delete_entity(id).await {
            Ok(()) => {
                if self.form.as_ref().and_then(|form| form.mode().target()) == Some(id) {
                    self.form = None;
                }
                session.commit(&change).await;
                Ok(())
            }
            Err(err) => {
                session.rollback(&mut self.items, &change).await;
                Err(err)
            }
        }
    }

    /// Sets a record's status by wire name. Names outside the entity's
    /// status domain are rejected before anything changes.
    pub async fn change_status(&mut self, id: u64, status: &str) -> StoreResult<E> {
        let status = E::parse_status(status)?;
        let index = self.index_of(id)?;
        let from = self.items[index].status().as_str();

        let session = self.tracker.begin(&self.items);
        self.items[index].set_status(status);
        let requested = ChangeKind::StatusChanged {
            from,
            to: status.as_str(),
        };

        match self.store.set_status(id, status).await {
            Ok(saved) => {
                let change = change_for(
                    session.id(),
                    &saved,
                    ChangeKind::StatusChanged {
                        from,
                        to: saved.status().as_str(),
                    },
                );
                self.items[index] = saved.clone();
                session.commit(&change).await;
                Ok(saved)
            }
            Err(err) => {
                let change = change_for(session.id(), &self.items[index], requested);
                session.rollback(&mut self.items, &change).await;
                Err(err)
            }
        }
    }

    pub async fn toggle_featured(&mut self, id: u64) -> StoreResult<E> {
        let index = self.index_of(id)?;
        let mut updated = self.items[index].clone();
        let flag = updated.featured_mut().ok_or_else(|| {
            StoreError::validation("featured", format!("{} has no featured flag", E::KIND))
        })?;
        *flag = !*flag;
        let featured = *flag;

        let session = self.tracker.begin(&self.items);
        let change = change_for(
            session.id(),
            &updated,
            ChangeKind::FeaturedToggled { featured },
        );
        self.items[index] = updated.clone();

        match self.store.save_entity(Some(id), updated).await {
            Ok(saved) => {
                self.items[index] = saved.clone();
                session.commit(&change).await;
                Ok(saved)
            }
            Err(err) => {
                session.rollback(&mut self.items, &change).await;
                Err(err)
            }
        }
    }

    /// Applies one user action.
    pub async fn dispatch(&mut self, action: ListAction) -> StoreResult<()> {
        log::debug!("{} page: {:?}", E::KIND, action);
        match action {
            ListAction::New => self.open_create(),
            ListAction::Edit(id) => self.open_edit(id),
            ListAction::Delete(id) => self.delete(id).await,
            ListAction::StatusChange { id, status } => {
                self.change_status(id, &status).await.map(|_| ())
            }
            ListAction::ToggleFeatured(id) => self.toggle_featured(id).await.map(|_| ()),
            ListAction::Save => self.submit_form().await.map(|_| ()),
            ListAction::Close => {
                self.cancel_form();
                Ok(())
            }
        }
    }

    fn index_of(&self, id: u64) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(StoreError::NotFound { kind: E::KIND, id })
    }
}

fn change_for<E: Entity>(op_id: Uuid, entity: &E, kind: ChangeKind) -> Change {
    Change {
        op_id,
        entity: E::KIND,
        id: entity.id(),
        label: entity.label().to_string(),
        kind,
    }
}
