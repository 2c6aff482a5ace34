mod common;

use common::{product, testimonial};
use marble_admin::entity::{Product, ProductStatus, Testimonial, TestimonialStatus};
use marble_admin::view::{row_actions, status_label, Card, Table};
use marble_admin::{
    seed, GridRenderer, ListAction, RenderContext, StoreError, TableRenderer, ViewMode,
    ViewRenderer,
};

#[test]
fn test_product_table() {
    let products = seed::products().unwrap();
    let visible: Vec<&Product> = products.iter().collect();
    let renderer = TableRenderer::default();
    assert_eq!(
        <TableRenderer as ViewRenderer<'_, Product>>::mode(&renderer),
        ViewMode::Table
    );

    let table: Table = renderer.render(&visible);
    assert_eq!(table.columns.len(), 6);
    assert_eq!(table.rows.len(), 3);
    assert_eq!(
        table.rows[0].cells,
        vec![
            "Carrara White Marble",
            "Natural Stone",
            "₹89.99/sq ft",
            "245 sq ft",
            "active",
            "Italian Stone Co.",
        ]
    );
    assert_eq!(table.rows[1].cells[2], "₹125.50/sq ft");
    assert_eq!(table.rows[1].cells[4], "low stock");
}

#[test]
fn test_empty_table() {
    let visible: Vec<&Testimonial> = Vec::new();
    let table: Table = TableRenderer::default().render(&visible);
    assert!(table.is_empty());
    assert_eq!(table.columns[0], "Client");
}

#[test]
fn test_currency_from_context() {
    let ctx = RenderContext {
        currency_symbol: "$".to_string(),
        ..RenderContext::default()
    };
    assert_eq!(ctx.price(45.75, "sq ft"), "$45.75/sq ft");
    assert_eq!(ctx.price(12.0, "piece"), "$12.00/piece");
}

#[test]
fn test_grid_cards_use_placeholder() {
    let bare = product(1, "Travertine", 20, 5, ProductStatus::Active);
    let mut pictured = product(2, "Onyx", 20, 5, ProductStatus::Active);
    pictured.images = vec!["/onyx.jpg".to_string(), "/onyx-2.jpg".to_string()];
    let visible = vec![&bare, &pictured];

    let cards: Vec<Card> = GridRenderer::default().render(&visible);
    assert_eq!(cards[0].image, "/placeholder.svg");
    assert_eq!(cards[1].image, "/onyx.jpg");
    assert_eq!(cards[0].featured, None);

    let mut review = testimonial(3, "Emily", 5, TestimonialStatus::Approved);
    review.client_image = "   ".to_string();
    review.featured = true;
    let ctx = RenderContext {
        placeholder_image: "/avatar.svg".to_string(),
        ..RenderContext::default()
    };
    let cards: Vec<Card> = GridRenderer::new(ctx).render(&[&review]);
    assert_eq!(cards[0].image, "/avatar.svg");
    assert_eq!(cards[0].featured, Some(true));
    assert_eq!(cards[0].subtitle, "Emily");
}

#[test]
fn test_row_actions_offer_other_statuses() {
    let active = product(1, "Carrara", 245, 50, ProductStatus::Active);
    let actions = row_actions(&active);
    assert_eq!(actions[0], ListAction::Edit(1));
    assert_eq!(actions[1], ListAction::Delete(1));
    let statuses: Vec<&str> = actions
        .iter()
        .filter_map(|action| match action {
            ListAction::StatusChange { status, .. } => Some(status.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(statuses, vec!["low_stock", "out_of_stock", "discontinued"]);
    assert!(!actions.contains(&ListAction::ToggleFeatured(1)));

    let review = testimonial(4, "Sarah", 5, TestimonialStatus::Pending);
    let actions = row_actions(&review);
    assert_eq!(actions.len(), 5);
    assert_eq!(actions.last(), Some(&ListAction::ToggleFeatured(4)));
}

#[test]
fn test_status_label() {
    assert_eq!(status_label(ProductStatus::OutOfStock), "out of stock");
    assert_eq!(status_label(TestimonialStatus::Approved), "approved");
}

#[test]
fn test_view_mode_names() {
    assert_eq!("calendar".parse::<ViewMode>().unwrap(), ViewMode::Calendar);
    assert_eq!(ViewMode::Grid.to_string(), "grid");
    assert!(matches!(
        "list".parse::<ViewMode>(),
        Err(StoreError::Validation { .. })
    ));
}
