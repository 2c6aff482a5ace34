use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

use super::{require, Entity, EntityKind, FilterField, StatusSet};
use crate::config::StockStatusPolicy;
use crate::view::ViewMode;
use crate::{StoreError, StoreResult};

pub const DEFAULT_UNIT: &str = "sq ft";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    Active,
    LowStock,
    OutOfStock,
    Discontinued,
}

impl StatusSet for ProductStatus {
    const ALL: &'static [Self] = &[
        ProductStatus::Active,
        ProductStatus::LowStock,
        ProductStatus::OutOfStock,
        ProductStatus::Discontinued,
    ];

    fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "active",
            ProductStatus::LowStock => "low_stock",
            ProductStatus::OutOfStock => "out_of_stock",
            ProductStatus::Discontinued => "discontinued",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductFilter {
    Category,
    Status,
    Type,
}

impl FilterField for ProductFilter {
    fn name(&self) -> &'static str {
        match self {
            ProductFilter::Category => "category",
            ProductFilter::Status => "status",
            ProductFilter::Type => "type",
        }
    }
}

/// An inventory line.
///
/// `status` is set by hand. It can disagree with `stock`/`min_stock`;
/// [`Product::derived_status`] gives the value the stock levels imply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub category: String,
    #[serde(rename = "type")]
    pub product_type: String,
    pub description: String,
    pub price: f64,
    pub unit: String,
    pub stock: u32,
    pub min_stock: u32,
    pub dimensions: String,
    pub finish: String,
    pub origin: String,
    pub supplier: String,
    pub status: ProductStatus,
    pub images: Vec<String>,
    pub last_updated: String,
}

impl Default for Product {
    fn default() -> Self {
        Self {
            id: 0,
            name: String::new(),
            category: String::new(),
            product_type: String::new(),
            description: String::new(),
            price: 0.0,
            unit: DEFAULT_UNIT.to_string(),
            stock: 0,
            min_stock: 0,
            dimensions: String::new(),
            finish: String::new(),
            origin: String::new(),
            supplier: String::new(),
            status: ProductStatus::Active,
            images: Vec::new(),
            last_updated: String::new(),
        }
    }
}

impl Product {
    /// True when stock has fallen to or below the reorder threshold.
    pub fn is_below_min_stock(&self) -> bool {
        self.stock <= self.min_stock
    }

    /// The status implied by the stock levels. Discontinued lines stay
    /// discontinued whatever their stock.
    pub fn derived_status(&self) -> ProductStatus {
        match self.status {
            ProductStatus::Discontinued => ProductStatus::Discontinued,
            _ if self.stock == 0 => ProductStatus::OutOfStock,
            _ if self.is_below_min_stock() => ProductStatus::LowStock,
            _ => ProductStatus::Active,
        }
    }

    /// Value of the units on hand.
    pub fn stock_value(&self) -> f64 {
        self.price * f64::from(self.stock)
    }
}

impl Entity for Product {
    const KIND: EntityKind = EntityKind::Product;
    const VIEW_MODES: &'static [ViewMode] = &[ViewMode::Grid, ViewMode::Table];

    type Status = ProductStatus;
    type Filter = ProductFilter;

    fn id(&self) -> u64 {
        self.id
    }

    fn set_id(&mut self, id: u64) {
        self.id = id;
    }

    fn status(&self) -> ProductStatus {
        self.status
    }

    fn set_status(&mut self, status: ProductStatus) {
        self.status = status;
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.category.as_str(),
            self.supplier.as_str(),
        ]
    }

    fn filter_value(&self, field: ProductFilter) -> Cow<'_, str> {
        match field {
            ProductFilter::Category => Cow::Borrowed(self.category.as_str()),
            ProductFilter::Status => Cow::Borrowed(self.status.as_str()),
            ProductFilter::Type => Cow::Borrowed(self.product_type.as_str()),
        }
    }

    fn validate(&self) -> StoreResult<()> {
        require("name", &self.name)?;
        if !self.price.is_finite() || self.price < 0.0 {
            return Err(StoreError::validation(
                "price",
                format!("must be a non-negative amount, got {}", self.price),
            ));
        }
        Ok(())
    }

    fn reconcile(&mut self, policy: StockStatusPolicy) {
        if policy == StockStatusPolicy::Derived {
            self.status = self.derived_status();
        }
    }
}
