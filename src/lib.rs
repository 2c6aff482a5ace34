//! Marble Admin
//!
//! Content and inventory management core for a marble and stone business:
//! blog posts, appointments, testimonials and products, each managed by a
//! list page with search, filters, switchable views and a create/edit form.
//! Storage sits behind the [`EntityStore`] trait.

pub mod activity;
pub mod calendar;
pub mod change_aware;
pub mod config;
pub mod controller;
pub mod dashboard;
pub mod entity;
pub mod error;
pub mod filter;
pub mod form;
pub mod seed;
pub mod session;
pub mod stats;
pub mod store;
pub mod view;

pub use activity::{ActivityEntry, ActivityFeed};
pub use calendar::{group_by_date, CalendarDay, CalendarRenderer, CalendarView};
pub use change_aware::{Change, ChangeAware, ChangeKind};
pub use config::{DashboardConfig, StockStatusPolicy};
pub use controller::{ListAction, ListController};
pub use dashboard::{Dashboard, Page};
pub use entity::{Entity, EntityKind, FilterField, StatusSet};
pub use error::{StoreError, StoreResult};
pub use filter::{compute_visible, FilterValue, ListQuery};
pub use form::{Draft, FormController, FormMode, Submission};
pub use session::{ChangeSession, ChangeTracker};
pub use store::{EntityStore, InMemoryStore};
pub use view::{GridRenderer, RenderContext, TableRenderer, ViewMode, ViewRenderer};
