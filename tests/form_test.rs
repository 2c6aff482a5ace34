use marble_admin::entity::{Appointment, BlogPost, BlogStatus, Product, Testimonial};
use marble_admin::{Draft, FormController, FormMode, StoreError};
use serde_json::json;

#[test]
fn test_create_defaults_for_testimonial() {
    let form = FormController::<Testimonial>::open_create().unwrap();
    assert_eq!(form.mode(), FormMode::Create);
    assert_eq!(form.draft().get("rating"), Some(&json!(5)));
    assert_eq!(form.draft().get("featured"), Some(&json!(false)));
    assert_eq!(form.draft().get("status"), Some(&json!("pending")));
}

#[test]
fn test_create_defaults_for_other_kinds() {
    let appointment = Draft::<Appointment>::blank().unwrap();
    assert_eq!(appointment.get("duration"), Some(&json!(60)));
    assert_eq!(appointment.get_str("status"), Some("pending"));

    let product = Draft::<Product>::blank().unwrap();
    assert_eq!(product.get_str("unit"), Some("sq ft"));
    assert_eq!(product.get_str("status"), Some("active"));
    assert_eq!(product.get("images"), Some(&json!([])));

    let blog = Draft::<BlogPost>::blank().unwrap();
    assert_eq!(blog.get_str("status"), Some("draft"));
    assert!(blog.get("id").is_none(), "ids are never part of a draft");
}

#[test]
fn test_edit_record_missing_field_falls_back_to_default() {
    let record = json!({
        "clientName": "David Chen",
        "clientEmail": "david@example.com",
        "title": "Beautiful Bathroom Design",
        "content": "Professional service.",
        "rating": 4,
        "status": "approved",
        "unexpected": "dropped"
    });
    let form = FormController::<Testimonial>::open_edit_record(2, &record).unwrap();
    assert_eq!(form.mode(), FormMode::Edit(2));
    assert_eq!(form.draft().get_str("clientImage"), Some(""));
    assert_eq!(form.draft().get("rating"), Some(&json!(4)));
    assert!(form.draft().get("unexpected").is_none());
}

#[test]
fn test_edit_copies_entity() {
    let post = BlogPost {
        id: 9,
        title: "Marble Maintenance Tips".to_string(),
        tags: vec!["care".to_string(), "cleaning".to_string()],
        status: BlogStatus::Published,
        ..BlogPost::default()
    };
    let form = FormController::open_edit(&post).unwrap();
    assert_eq!(form.mode(), FormMode::Edit(9));

    let submission = form.submit().unwrap();
    assert_eq!(submission.record, post);
}

#[test]
fn test_set_field_merges_without_validation() {
    let mut form = FormController::<Testimonial>::open_create().unwrap();
    form.set_field("rating", 9).unwrap();
    form.set_field("clientName", "").unwrap();
    assert_eq!(form.draft().get("rating"), Some(&json!(9)));

    // Decoding succeeds; domain rules are left to the save path
    let submission = form.submit().unwrap();
    assert_eq!(submission.record.rating, 9);
    assert_eq!(submission.record.id, 0);
}

#[test]
fn test_set_unknown_field() {
    let mut form = FormController::<Product>::open_create().unwrap();
    let err = form.set_field("colour", "white").unwrap_err();
    assert!(matches!(err, StoreError::UnknownField { ref field, .. } if field == "colour"));

    let err = form.set_field("id", 42).unwrap_err();
    assert!(matches!(err, StoreError::UnknownField { .. }));
}

#[test]
fn test_submit_with_wrong_type_fails_to_decode() {
    let mut form = FormController::<Product>::open_create().unwrap();
    form.set_field("stock", "lots").unwrap();
    assert!(matches!(form.submit().unwrap_err(), StoreError::Decode(_)));
}

#[test]
fn test_product_type_field_uses_wire_name() {
    let mut form = FormController::<Product>::open_create().unwrap();
    form.set_field("type", "Tile").unwrap();
    form.set_field("images", json!(["/a.jpg", "/b.jpg"])).unwrap();
    let record = form.submit().unwrap().record;
    assert_eq!(record.product_type, "Tile");
    assert_eq!(record.images.len(), 2);
}

#[test]
fn test_null_field_resets_to_default() {
    let post = BlogPost {
        id: 4,
        title: "Choosing a Finish".to_string(),
        status: BlogStatus::Archived,
        ..BlogPost::default()
    };
    let mut form = FormController::open_edit(&post).unwrap();
    form.set_field("title", serde_json::Value::Null).unwrap();
    form.set_field("status", serde_json::Value::Null).unwrap();
    assert_eq!(form.draft().get_str("title"), Some(""));
    assert_eq!(form.draft().get_str("status"), Some("draft"));

    let mut review = FormController::<Testimonial>::open_create().unwrap();
    review.set_field("rating", 2).unwrap();
    review.set_field("rating", serde_json::Value::Null).unwrap();
    let record = review.submit().unwrap().record;
    assert_eq!(record.rating, 5);
}
