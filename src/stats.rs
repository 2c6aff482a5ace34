//! Summary figures for the page headers and the dashboard overview.

use crate::activity::{ActivityEntry, ActivityFeed};
use crate::entity::{
    Appointment, BlogPost, BlogStatus, Entity, Product, ProductStatus, StatusSet, Testimonial,
    TestimonialStatus,
};

/// Total plus a count for every status, in status display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageStats {
    pub total: usize,
    pub by_status: Vec<(&'static str, usize)>,
}

impl PageStats {
    pub fn of<E: Entity>(items: &[E]) -> Self {
        let by_status = E::Status::ALL
            .iter()
            .map(|status| {
                let count = items.iter().filter(|item| item.status() == *status).count();
                (status.as_str(), count)
            })
            .collect();
        Self {
            total: items.len(),
            by_status,
        }
    }

    pub fn count(&self, status: &str) -> usize {
        self.by_status
            .iter()
            .find(|(name, _)| *name == status)
            .map(|(_, count)| *count)
            .unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogStats {
    pub total: usize,
    pub published: usize,
    pub drafts: usize,
    pub total_views: u64,
}

impl BlogStats {
    pub fn of(posts: &[BlogPost]) -> Self {
        Self {
            total: posts.len(),
            published: posts.iter().filter(|p| p.status == BlogStatus::Published).count(),
            drafts: posts.iter().filter(|p| p.status == BlogStatus::Draft).count(),
            total_views: posts.iter().map(|p| p.views).sum(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestimonialStats {
    pub total: usize,
    pub pending: usize,
    pub approved: usize,
    /// `None` when there are no reviews.
    pub average_rating: Option<f64>,
    pub featured: usize,
}

impl TestimonialStats {
    pub fn of(testimonials: &[Testimonial]) -> Self {
        let average_rating = if testimonials.is_empty() {
            None
        } else {
            let sum: u32 = testimonials.iter().map(|t| u32::from(t.rating)).sum();
            Some(f64::from(sum) / testimonials.len() as f64)
        };
        Self {
            total: testimonials.len(),
            pending: testimonials
                .iter()
                .filter(|t| t.status == TestimonialStatus::Pending)
                .count(),
            approved: testimonials
                .iter()
                .filter(|t| t.status == TestimonialStatus::Approved)
                .count(),
            average_rating,
            featured: testimonials.iter().filter(|t| t.featured).count(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct InventoryStats {
    pub total: usize,
    pub active: usize,
    /// Products whose status says low stock.
    pub low_stock: usize,
    pub out_of_stock: usize,
    /// Products at or under their reorder threshold, whatever their status.
    pub below_min_stock: usize,
    pub total_value: f64,
}

impl InventoryStats {
    pub fn of(products: &[Product]) -> Self {
        let with_status =
            |status: ProductStatus| products.iter().filter(|p| p.status == status).count();
        Self {
            total: products.len(),
            active: with_status(ProductStatus::Active),
            low_stock: with_status(ProductStatus::LowStock),
            out_of_stock: with_status(ProductStatus::OutOfStock),
            below_min_stock: products.iter().filter(|p| p.is_below_min_stock()).count(),
            total_value: products.iter().map(Product::stock_value).sum(),
        }
    }
}

/// Landing-page summary across all four collections.
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardOverview {
    pub blog_posts: usize,
    pub appointments: usize,
    pub testimonials: usize,
    pub products: usize,
    pub inventory: InventoryStats,
    pub recent_activity: Vec<ActivityEntry>,
}

impl DashboardOverview {
    pub fn collect(
        blog_posts: &[BlogPost],
        appointments: &[Appointment],
        testimonials: &[Testimonial],
        products: &[Product],
        activity: &ActivityFeed,
    ) -> Self {
        Self {
            blog_posts: blog_posts.len(),
            appointments: appointments.len(),
            testimonials: testimonials.len(),
            products: products.len(),
            inventory: InventoryStats::of(products),
            recent_activity: activity.recent(),
        }
    }
}
