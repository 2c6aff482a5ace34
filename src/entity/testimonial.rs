use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::{require, Entity, EntityKind, FilterField, StatusSet};
use crate::view::ViewMode;
use crate::{StoreError, StoreResult};

pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestimonialStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

impl StatusSet for TestimonialStatus {
    const ALL: &'static [Self] = &[
        TestimonialStatus::Pending,
        TestimonialStatus::Approved,
        TestimonialStatus::Rejected,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            TestimonialStatus::Pending => "pending",
            TestimonialStatus::Approved => "approved",
            TestimonialStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for TestimonialStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TestimonialFilter {
    Status,
    /// Matched against the decimal rendering of the rating, e.g. `"4"`.
    Rating,
    Project,
}

impl FilterField for TestimonialFilter {
    fn name(&self) -> &'static str {
        match self {
            TestimonialFilter::Status => "status",
            TestimonialFilter::Rating => "rating",
            TestimonialFilter::Project => "project",
        }
    }
}

/// A client review.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Testimonial {
    pub id: u64,
    pub client_name: String,
    pub client_email: String,
    pub client_image: String,
    pub title: String,
    pub content: String,
    pub rating: u8,
    pub project: String,
    pub featured: bool,
    pub status: TestimonialStatus,
    pub date: String,
}

impl Default for Testimonial {
    fn default() -> Self {
        Self {
            id: 0,
            client_name: String::new(),
            client_email: String::new(),
            client_image: String::new(),
            title: String::new(),
            content: String::new(),
            rating: MAX_RATING,
            project: String::new(),
            featured: false,
            status: TestimonialStatus::Pending,
            date: String::new(),
        }
    }
}

impl Entity for Testimonial {
    const KIND: EntityKind = EntityKind::Testimonial;
    const VIEW_MODES: &'static [ViewMode] = &[ViewMode::Grid, ViewMode::Table];

    type Status = TestimonialStatus;
    type Filter = TestimonialFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn status(&self) -> TestimonialStatus {
        self.status
    }

    fn set_status(&mut self, status: TestimonialStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.client_name.as_str(),
            self.title.as_str(),
            self.project.as_str(),
        ]
    }

    fn filter_value(&self, field: TestimonialFilter) -> Cow<'_, str> {
        match field {
            TestimonialFilter::Status => Cow::Borrowed(self.status.as_str()),
            TestimonialFilter::Rating => Cow::Owned(self.rating.to_string()),
            TestimonialFilter::Project => Cow::Borrowed(self.project.as_str()),
        }
    }

    fn validate(&self) -> StoreResult<()> {
        require("clientName", &self.client_name)?;
        require("clientEmail", &self.client_email)?;
        require("title", &self.title)?;
        require("content", &self.content)?;
        if !(MIN_RATING..=MAX_RATING).contains(&self.rating) {
            return Err(StoreError::validation(
                "rating",
                format!("must be between {MIN_RATING} and {MAX_RATING}, got {}", self.rating),
            ));
        }
        Ok(())
    }

    fn featured(&self) -> Option<bool> {
        Some(self.featured)
    }

    fn featured_mut(&mut self) -> Option<&mut bool> {
        Some(&mut self.featured)
    }
}
