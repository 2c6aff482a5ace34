//! Presentation variants of a list page.
//!
//! A renderer consumes the visible sequence and produces a layout whose rows
//! carry the [`ListAction`]s the user can trigger on them. The page feeds
//! those actions back to [`ListController::dispatch`](crate::ListController::dispatch).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::config::DashboardConfig;
use crate::controller::ListAction;
use crate::entity::{Appointment, BlogPost, Entity, Product, StatusSet, Testimonial};
use crate::StoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    Table,
    Grid,
    Calendar,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Table => "table",
            ViewMode::Grid => "grid",
            ViewMode::Calendar => "calendar",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = StoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "table" => Ok(ViewMode::Table),
            "grid" => Ok(ViewMode::Grid),
            "calendar" => Ok(ViewMode::Calendar),
            other => Err(StoreError::validation(
                "viewMode",
                format!("unknown view mode {other:?}"),
            )),
        }
    }
}

/// Anything that turns a visible sequence into a presentation.
pub trait ViewRenderer<'a, E: Entity> {
    type Output;

    fn mode(&self) -> ViewMode;

    fn render(&self, visible: &[&'a E]) -> Self::Output;
}

/// Status label as shown on badges: `low_stock` reads `low stock`.
pub fn status_label<S: StatusSet>(status: S) -> String {
    status.as_str().replace('_', " ")
}

/// Actions offered on a table row or grid card.
pub fn row_actions<E: Entity>(entity: &E) -> Vec<ListAction> {
    let id = entity.id();
    let mut actions = vec![ListAction::Edit(id), ListAction::Delete(id)];
    actions.extend(
        E::Status::ALL
            .iter()
            .filter(|status| **status != entity.status())
            .map(|status| ListAction::StatusChange {
                id,
                status: status.as_str().to_string(),
            }),
    );
    if entity.featured().is_some() {
        actions.push(ListAction::ToggleFeatured(id));
    }
    actions
}

/// Formatting settings shared by the renderers.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderContext {
    pub currency_symbol: String,
    pub placeholder_image: String,
}

impl From<&DashboardConfig> for RenderContext {
    fn from(config: &DashboardConfig) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            placeholder_image: config.placeholder_image.clone(),
        }
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self::from(&DashboardConfig::default())
    }
}

impl RenderContext {
    pub fn price(&self, amount: f64, unit: &str) -> String {
        format!("{}{:.2}/{}", self.currency_symbol, amount, unit)
    }

    pub fn image_or_placeholder<'s>(&'s self, url: Option<&'s str>) -> &'s str {
        match url {
            Some(url) if !url.trim().is_empty() => url,
            _ => &self.placeholder_image,
        }
    }
}

/// Entities with a table layout.
pub trait Tabular: Entity {
    /// Column headers, not counting the trailing actions column.
    const COLUMNS: &'static [&'static str];

    fn cells(&self, ctx: &RenderContext) -> Vec<String>;
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub id: u64,
    pub cells: Vec<String>,
    pub actions: Vec<ListAction>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: &'static [&'static str],
    pub rows: Vec<TableRow>,
}

impl Table {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone, Default)]
pub struct TableRenderer {
    ctx: RenderContext,
}

impl TableRenderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }
}

impl<'a, E: Tabular> ViewRenderer<'a, E> for TableRenderer {
    type Output = Table;

    fn mode(&self) -> ViewMode {
        ViewMode::Table
    }

    fn render(&self, visible: &[&'a E]) -> Table {
        Table {
            columns: E::COLUMNS,
            rows: visible
                .iter()
                .map(|entity| TableRow {
                    id: entity.id(),
                    cells: entity.cells(&self.ctx),
                    actions: row_actions(*entity),
                })
                .collect(),
        }
    }
}

impl Tabular for BlogPost {
    const COLUMNS: &'static [&'static str] =
        &["Title", "Author", "Category", "Status", "Date", "Views"];

    fn cells(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![
            self.title.clone(),
            self.author.clone(),
            self.category.clone(),
            status_label(self.status),
            self.publish_date.clone(),
            self.views.to_string(),
        ]
    }
}

impl Tabular for Appointment {
    const COLUMNS: &'static [&'static str] =
        &["Client", "Service", "Date & Time", "Status", "Duration"];

    fn cells(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![
            format!("{} <{}>", self.client_name, self.client_email),
            self.service.clone(),
            format!("{} {}", self.date, self.time),
            status_label(self.status),
            format!("{} min", self.duration),
        ]
    }
}

impl Tabular for Testimonial {
    const COLUMNS: &'static [&'static str] =
        &["Client", "Review", "Project", "Rating", "Status", "Date"];

    fn cells(&self, _ctx: &RenderContext) -> Vec<String> {
        vec![
            self.client_name.clone(),
            self.title.clone(),
            self.project.clone(),
            format!("{}/5", self.rating),
            status_label(self.status),
            self.date.clone(),
        ]
    }
}

impl Tabular for Product {
    const COLUMNS: &'static [&'static str] =
        &["Product", "Category", "Price", "Stock", "Status", "Supplier"];

    fn cells(&self, ctx: &RenderContext) -> Vec<String> {
        vec![
            self.name.clone(),
            self.category.clone(),
            ctx.price(self.price, &self.unit),
            format!("{} {}", self.stock, self.unit),
            status_label(self.status),
            self.supplier.clone(),
        ]
    }
}

/// Entities with a card layout.
pub trait Cardable: Entity {
    fn card(&self, ctx: &RenderContext) -> Card;
}

#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    pub title: String,
    pub subtitle: String,
    pub image: String,
    pub status: String,
    pub details: Vec<(&'static str, String)>,
    pub body: String,
    pub featured: Option<bool>,
    pub actions: Vec<ListAction>,
}

#[derive(Debug, Clone, Default)]
pub struct GridRenderer {
    ctx: RenderContext,
}

impl GridRenderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }
}

impl<'a, E: Cardable> ViewRenderer<'a, E> for GridRenderer {
    type Output = Vec<Card>;

    fn mode(&self) -> ViewMode {
        ViewMode::Grid
    }

    fn render(&self, visible: &[&'a E]) -> Vec<Card> {
        visible.iter().map(|entity| entity.card(&self.ctx)).collect()
    }
}

impl Cardable for Product {
    fn card(&self, ctx: &RenderContext) -> Card {
        Card {
            id: self.id,
            title: self.name.clone(),
            subtitle: self.category.clone(),
            image: ctx
                .image_or_placeholder(self.images.first().map(String::as_str))
                .to_string(),
            status: status_label(self.status),
            details: vec![
                ("Price", ctx.price(self.price, &self.unit)),
                ("Stock", format!("{} {}", self.stock, self.unit)),
                ("Origin", self.origin.clone()),
                ("Finish", self.finish.clone()),
                ("Size", self.dimensions.clone()),
            ],
            body: self.description.clone(),
            featured: None,
            actions: row_actions(self),
        }
    }
}

impl Cardable for Testimonial {
    fn card(&self, ctx: &RenderContext) -> Card {
        Card {
            id: self.id,
            title: self.title.clone(),
            subtitle: self.client_name.clone(),
            image: ctx
                .image_or_placeholder(Some(self.client_image.as_str()))
                .to_string(),
            status: status_label(self.status),
            details: vec![
                ("Rating", format!("{}/5", self.rating)),
                ("Project", self.project.clone()),
                ("Date", self.date.clone()),
            ],
            body: self.content.clone(),
            featured: Some(self.featured),
            actions: row_actions(self),
        }
    }
}
