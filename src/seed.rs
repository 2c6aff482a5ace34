//! Demo collections shipped with the crate.

use crate::entity::{Appointment, BlogPost, Entity, Product, Testimonial};
use crate::StoreResult;

const BLOG_POSTS: &str = include_str!("../seed/blog_posts.json");
const APPOINTMENTS: &str = include_str!("../seed/appointments.json");
const TESTIMONIALS: &str = include_str!("../seed/testimonials.json");
const PRODUCTS: &str = include_str!("../seed/products.json");

/// Decodes a JSON array of records. Missing fields take the entity defaults.
pub fn parse<E: Entity>(json: &str) -> StoreResult<Vec<E>> {
    let records: Vec<E> = serde_json::from_str(json)?;
    log::debug!("parsed {} {} seed records", records.len(), E::KIND);
    Ok(records)
}

pub fn blog_posts() -> StoreResult<Vec<BlogPost>> {
    parse(BLOG_POSTS)
}

pub fn appointments() -> StoreResult<Vec<Appointment>> {
    parse(APPOINTMENTS)
}

pub fn testimonials() -> StoreResult<Vec<Testimonial>> {
    parse(TESTIMONIALS)
}

pub fn products() -> StoreResult<Vec<Product>> {
    parse(PRODUCTS)
}
