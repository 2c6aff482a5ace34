use marble_admin::entity::{
    Appointment, AppointmentStatus, Product, ProductStatus, Testimonial, TestimonialStatus,
};

/// Sample appointment for testing
pub fn appointment(
    id: u64,
    client_name: &str,
    date: &str,
    time: &str,
    status: AppointmentStatus,
) -> Appointment {
    Appointment {
        id,
        client_name: client_name.to_string(),
        client_email: format!("{}@example.com", client_name.to_lowercase().replace(' ', ".")),
        client_phone: "+1 (555) 000-0000".to_string(),
        service: "Kitchen Consultation".to_string(),
        date: date.to_string(),
        time: time.to_string(),
        status,
        ..Appointment::default()
    }
}

/// Sample product for testing
pub fn product(id: u64, name: &str, stock: u32, min_stock: u32, status: ProductStatus) -> Product {
    Product {
        id,
        name: name.to_string(),
        category: "Natural Stone".to_string(),
        product_type: "Slab".to_string(),
        price: 100.0,
        stock,
        min_stock,
        supplier: "Test Quarry".to_string(),
        status,
        ..Product::default()
    }
}

/// Sample testimonial for testing
pub fn testimonial(id: u64, client_name: &str, rating: u8, status: TestimonialStatus) -> Testimonial {
    Testimonial {
        id,
        client_name: client_name.to_string(),
        client_email: "client@example.com".to_string(),
        title: format!("Review by {client_name}"),
        content: "Great work on our floors.".to_string(),
        rating,
        project: "Installation".to_string(),
        status,
        ..Testimonial::default()
    }
}
