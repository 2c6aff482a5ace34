use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::{Entity, EntityKind, FilterField, StatusSet};
use crate::view::ViewMode;
use crate::StoreResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlogStatus {
    #[default]
    Draft,
    Published,
    Archived,
}

impl StatusSet for BlogStatus {
    const ALL: &'static [Self] = &[BlogStatus::Draft, BlogStatus::Published, BlogStatus::Archived];

    fn as_str(&self) -> &'static str {
        match self {
            BlogStatus::Draft => "draft",
            BlogStatus::Published => "published",
            BlogStatus::Archived => "archived",
        }
    }
}

impl fmt::Display for BlogStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlogFilter {
    Status,
    Category,
}

impl FilterField for BlogFilter {
    fn name(&self) -> &'static str {
        match self {
            BlogFilter::Status => "status",
            BlogFilter::Category => "category",
        }
    }
}

/// A blog article.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BlogPost {
    pub id: u64,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub category: String,
    pub author: String,
    pub tags: Vec<String>,
    pub featured_image: String,
    pub status: BlogStatus,
    pub publish_date: String,
    pub views: u64,
}

impl Entity for BlogPost {
    const KIND: EntityKind = EntityKind::BlogPost;
    const VIEW_MODES: &'static [ViewMode] = &[ViewMode::Table];

    type Status = BlogStatus;
    type Filter = BlogFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn status(&self) -> BlogStatus {
        self.status
    }

    fn set_status(&mut self, status: BlogStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.author.as_str()]
    }

    fn filter_value(&self, field: BlogFilter) -> Cow<'_, str> {
        match field {
            BlogFilter::Status => Cow::Borrowed(self.status.as_str()),
            BlogFilter::Category => Cow::Borrowed(self.category.as_str()),
        }
    }

    // Blog drafts are saved incomplete on purpose.
    fn validate(&self) -> StoreResult<()> {
        Ok(())
    }
}
