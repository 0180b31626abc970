//! The fixed two-record seed set installed at startup and on reset.

use chrono::{DateTime, NaiveDate, Utc};

use super::product::{Dimensions, Product, ProductMeta, Review};

/// Build a fresh copy of the seed records (ids 1 and 2).
pub fn seed_products() -> Vec<Product> {
    vec![
        Product {
            id: 1,
            title: "Demo Headphones".to_string(),
            description: "Wireless over-ear headphones with ANC".to_string(),
            category: "audio".to_string(),
            price: 199.0,
            discount_percentage: 10.5,
            rating: 4.3,
            stock: 42,
            tags: vec!["audio".to_string(), "wireless".to_string(), "anc".to_string()],
            brand: "AcoustiCo".to_string(),
            sku: "AC-HP-001".to_string(),
            weight: 350.0,
            dimensions: Dimensions { width: 18.0, height: 22.0, depth: 8.0 },
            warranty_information: "1 year limited warranty".to_string(),
            shipping_information: "Ships in 2-3 business days".to_string(),
            availability_status: "In Stock".to_string(),
            reviews: vec![Review {
                rating: 5.0,
                comment: "Great sound!".to_string(),
                date: fixed_date(2025, 9, 1),
                reviewer_name: "Alex".to_string(),
                reviewer_email: "alex@example.com".to_string(),
            }],
            return_policy: "30-day return policy".to_string(),
            minimum_order_quantity: 1,
            meta: ProductMeta {
                created_at: fixed_timestamp("2025-09-01T10:00:00Z"),
                updated_at: fixed_timestamp("2025-09-10T10:00:00Z"),
                barcode: "000000000001".to_string(),
                qr_code: "http://localhost:3000/products/1".to_string(),
            },
            images: vec!["https://picsum.photos/seed/1/400/300".to_string()],
            thumbnail: "https://picsum.photos/seed/1/200/150".to_string(),
        },
        Product {
            id: 2,
            title: "Studio Mic".to_string(),
            description: "USB condenser microphone".to_string(),
            category: "audio".to_string(),
            price: 129.0,
            discount_percentage: 5.0,
            rating: 4.5,
            stock: 20,
            tags: vec!["audio".to_string(), "usb".to_string(), "mic".to_string()],
            brand: "Vocalis".to_string(),
            sku: "VO-MIC-002".to_string(),
            weight: 250.0,
            dimensions: Dimensions { width: 6.0, height: 15.0, depth: 6.0 },
            warranty_information: "2 years".to_string(),
            shipping_information: "Ships next day".to_string(),
            availability_status: "In Stock".to_string(),
            reviews: Vec::new(),
            return_policy: "15-day return policy".to_string(),
            minimum_order_quantity: 1,
            meta: ProductMeta {
                created_at: fixed_timestamp("2025-09-02T10:00:00Z"),
                updated_at: fixed_timestamp("2025-09-11T10:00:00Z"),
                barcode: "000000000002".to_string(),
                qr_code: "http://localhost:3000/products/2".to_string(),
            },
            images: vec!["https://picsum.photos/seed/2/400/300".to_string()],
            thumbnail: "https://picsum.photos/seed/2/200/150".to_string(),
        },
    ]
}

// Seed literals are fixed known-good strings; a typo falls back to the epoch
// and is caught by the tests below.
fn fixed_timestamp(raw: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(raw).map(|value| value.with_timezone(&Utc)).unwrap_or_default()
}

fn fixed_date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use chrono::Datelike;

    use super::seed_products;

    #[test]
    fn seed_set_has_the_two_fixed_records() {
        let seeds = seed_products();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].id, 1);
        assert_eq!(seeds[0].title, "Demo Headphones");
        assert_eq!(seeds[1].id, 2);
        assert_eq!(seeds[1].title, "Studio Mic");
    }

    #[test]
    fn seed_timestamps_parse_to_their_literal_values() {
        for record in seed_products() {
            assert_eq!(record.meta.created_at.year(), 2025);
            assert_eq!(record.meta.updated_at.year(), 2025);
            assert!(record.meta.updated_at > record.meta.created_at);
        }
    }

    #[test]
    fn seed_review_date_is_not_the_epoch_fallback() {
        let seeds = seed_products();
        assert_eq!(seeds[0].reviews[0].date.year(), 2025);
    }
}
