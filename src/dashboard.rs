use std::sync::Arc;

use crate::activity::ActivityFeed;
use crate::calendar::CalendarRenderer;
use crate::config::DashboardConfig;
use crate::controller::ListController;
use crate::entity::{Appointment, BlogPost, Entity, Product, Testimonial};
use crate::seed;
use crate::session::ChangeTracker;
use crate::stats::DashboardOverview;
use crate::store::{EntityStore, InMemoryStore};
use crate::view::{GridRenderer, RenderContext, TableRenderer};
use crate::StoreResult;

pub type Page<E> = ListController<E, dyn EntityStore<E>>;

/// The four list pages, wired to one change tracker and activity feed.
pub struct Dashboard {
    pub config: DashboardConfig,
    pub blog_posts: Page<BlogPost>,
    pub appointments: Page<Appointment>,
    pub testimonials: Page<Testimonial>,
    pub products: Page<Product>,
    activity: Arc<ActivityFeed>,
}

impl Dashboard {
    /// Builds the pages over caller-supplied stores.
    pub fn new(
        config: DashboardConfig,
        blog_posts: Arc<dyn EntityStore<BlogPost>>,
        appointments: Arc<dyn EntityStore<Appointment>>,
        testimonials: Arc<dyn EntityStore<Testimonial>>,
        products: Arc<dyn EntityStore<Product>>,
    ) -> Self {
        let tracker = ChangeTracker::new();
        let activity = Arc::new(ActivityFeed::new(config.activity_capacity));
        tracker.register_change_aware(activity.clone());

        Self {
            blog_posts: ListController::with_tracker(blog_posts, tracker.clone()),
            appointments: ListController::with_tracker(appointments, tracker.clone()),
            testimonials: ListController::with_tracker(testimonials, tracker.clone()),
            products: ListController::with_tracker(products, tracker),
            activity,
            config,
        }
    }

    /// In-memory stores holding the bundled demo data, already loaded.
    pub async fn seeded(config: DashboardConfig) -> StoreResult<Self> {
        let policy = config.stock_status_policy;
        let mut dashboard = Self::new(
            config,
            Arc::new(InMemoryStore::with_policy(seed::blog_posts()?, policy)?),
            Arc::new(InMemoryStore::with_policy(seed::appointments()?, policy)?),
            Arc::new(InMemoryStore::with_policy(seed::testimonials()?, policy)?),
            Arc::new(InMemoryStore::with_policy(seed::products()?, policy)?),
        );
        dashboard.reload().await?;
        Ok(dashboard)
    }

    pub async fn reload(&mut self) -> StoreResult<()> {
        self.blog_posts.load().await?;
        self.appointments.load().await?;
        self.testimonials.load().await?;
        self.products.load().await?;
        log::info!(
            "dashboard loaded: {} {}s, {} {}s, {} {}s, {} {}s",
            self.blog_posts.items().len(),
            BlogPost::KIND,
            self.appointments.items().len(),
            Appointment::KIND,
            self.testimonials.items().len(),
            Testimonial::KIND,
            self.products.items().len(),
            Product::KIND,
        );
        Ok(())
    }

    pub fn activity(&self) -> &ActivityFeed {
        &self.activity
    }

    pub fn overview(&self) -> DashboardOverview {
        DashboardOverview::collect(
            self.blog_posts.items(),
            self.appointments.items(),
            self.testimonials.items(),
            self.products.items(),
            &self.activity,
        )
    }

    pub fn table_renderer(&self) -> TableRenderer {
        TableRenderer::new(RenderContext::from(&self.config))
    }

    pub fn grid_renderer(&self) -> GridRenderer {
        GridRenderer::new(RenderContext::from(&self.config))
    }

    pub fn calendar_renderer(&self) -> CalendarRenderer {
        CalendarRenderer::new(self.config.calendar_time_formats.clone())
    }
}
