//! Entity records managed by the dashboard.
//!
//! Each entity kind is an independent collection with an integer identity, a
//! closed status domain, a fixed set of searchable text fields and a set of
//! categorical filter fields. No kind references another.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;
use std::hash::Hash;

use crate::config::StockStatusPolicy;
use crate::view::ViewMode;
use crate::{StoreError, StoreResult};

pub mod appointment;
pub mod blog;
pub mod product;
pub mod testimonial;

pub use appointment::{Appointment, AppointmentFilter, AppointmentStatus};
pub use blog::{BlogFilter, BlogPost, BlogStatus};
pub use product::{Product, ProductFilter, ProductStatus};
pub use testimonial::{Testimonial, TestimonialFilter, TestimonialStatus};

/// The four collections the dashboard manages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    BlogPost,
    Appointment,
    Testimonial,
    Product,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::BlogPost => "blog post",
            EntityKind::Appointment => "appointment",
            EntityKind::Testimonial => "testimonial",
            EntityKind::Product => "product",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A closed status domain. Every variant has a stable wire name.
pub trait StatusSet:
    Copy + Eq + Hash + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Every member, in display order.
    const ALL: &'static [Self];

    /// Wire name, e.g. `"low_stock"`.
    fn as_str(&self) -> &'static str;

    /// Exact lookup by wire name.
    fn from_name(value: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|status| status.as_str() == value)
    }
}

/// A categorical field a list page can filter on.
pub trait FilterField: Copy + Eq + Hash + fmt::Debug + Send + Sync + 'static {
    fn name(&self) -> &'static str;
}

/// Common contract for every managed record.
///
/// `Default` is the create-mode record: the values a blank form starts from.
/// Decoding is lenient (`#[serde(default)]` on every record), so a partial
/// record falls back to those defaults field by field.
pub trait Entity:
    Clone + fmt::Debug + Default + Serialize + DeserializeOwned + Send + Sync + 'static
{
    const KIND: EntityKind;

    /// View modes the list page offers. The first one is the initial mode.
    const VIEW_MODES: &'static [ViewMode];

    type Status: StatusSet;
    type Filter: FilterField;

    fn id(&self) -> u64;
    fn set_id(&mut self, id: u64);

    fn status(&self) -> Self::Status;
    fn set_status(&mut self, status: Self::Status);

    /// Human-readable label used in activity entries.
    fn label(&self) -> &str;

    /// Text fields matched by the search box.
    fn search_fields(&self) -> Vec<&str>;

    /// Current value of a filter field, compared by exact equality.
    fn filter_value(&self, field: Self::Filter) -> Cow<'_, str>;

    /// Domain rules checked before a record reaches the store.
    fn validate(&self) -> StoreResult<()>;

    /// The boolean feature flag, for kinds that have one.
    fn featured(&self) -> Option<bool> {
        None
    }

    fn featured_mut(&mut self) -> Option<&mut bool> {
        None
    }

    /// Brings derived fields in line with `policy` before a save.
    fn reconcile(&mut self, _policy: StockStatusPolicy) {}

    /// Parses a status by wire name, rejecting anything outside the domain.
    fn parse_status(value: &str) -> StoreResult<Self::Status> {
        Self::Status::from_name(value).ok_or_else(|| StoreError::InvalidStatus {
            kind: Self::KIND,
            value: value.to_string(),
        })
    }
}

pub(crate) fn require(field: &str, value: &str) -> StoreResult<()> {
    if value.trim().is_empty() {
        return Err(StoreError::validation(field, "is required"));
    }
    Ok(())
}
