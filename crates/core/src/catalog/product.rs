//! The product record and the two write payloads derived from it: the
//! permissive add payload and the shallow-merge update patch.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Title used when an add payload carries none.
pub const DEFAULT_TITLE: &str = "Untitled product";

/// One product entry in the collection. Field names on the wire are the
/// camelCase names of the emulated service; field order matches its JSON
/// output.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub price: f64,
    pub discount_percentage: f64,
    pub rating: f64,
    pub stock: u32,
    pub tags: Vec<String>,
    pub brand: String,
    pub sku: String,
    pub weight: f64,
    pub dimensions: Dimensions,
    pub warranty_information: String,
    pub shipping_information: String,
    pub availability_status: String,
    pub reviews: Vec<Review>,
    pub return_policy: String,
    pub minimum_order_quantity: u32,
    pub meta: ProductMeta,
    pub images: Vec<String>,
    pub thumbnail: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub depth: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub rating: f64,
    pub comment: String,
    pub date: NaiveDate,
    pub reviewer_name: String,
    pub reviewer_email: String,
}

/// Bookkeeping attached to every record. `created_at` is written once when
/// the record is built; `updated_at` is refreshed on every successful
/// update.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductMeta {
    #[serde(with = "timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "timestamp")]
    pub updated_at: DateTime<Utc>,
    pub barcode: String,
    pub qr_code: String,
}

// ---------------------------------------------------------------------------
// Add payload
// ---------------------------------------------------------------------------

/// Body of an add request. Both fields are optional; `price` additionally
/// tolerates a numeric string, anything else counts as missing.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct NewProduct {
    pub title: Option<String>,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: Option<f64>,
}

fn lenient_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|raw| match raw {
        serde_json::Value::Number(number) => number.as_f64(),
        serde_json::Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }))
}

fn product_url(id: u64) -> String {
    format!("http://localhost:3000/products/{id}")
}

fn image_url(id: u64) -> String {
    format!("https://picsum.photos/seed/{id}/400/300")
}

fn thumbnail_url(id: u64) -> String {
    format!("https://picsum.photos/seed/{id}/200/150")
}

impl NewProduct {
    /// Build a fully populated record from the add payload. Missing fields
    /// fall back to fixed defaults; an add request never fails.
    pub fn into_product(self, id: u64, now: DateTime<Utc>) -> Product {
        Product {
            id,
            title: self.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            description: "N/A".to_string(),
            category: "general".to_string(),
            price: self.price.unwrap_or(0.0),
            discount_percentage: 0.0,
            rating: 0.0,
            stock: 0,
            tags: vec!["new".to_string()],
            brand: "Generic".to_string(),
            sku: format!("SKU-{id}"),
            weight: 0.0,
            dimensions: Dimensions::default(),
            warranty_information: "N/A".to_string(),
            shipping_information: "N/A".to_string(),
            availability_status: "In Stock".to_string(),
            reviews: Vec::new(),
            return_policy: "N/A".to_string(),
            minimum_order_quantity: 1,
            meta: ProductMeta {
                created_at: now,
                updated_at: now,
                barcode: format!("{id:012}"),
                qr_code: product_url(id),
            },
            images: vec![image_url(id)],
            thumbnail: thumbnail_url(id),
        }
    }
}

// ---------------------------------------------------------------------------
// Update patch
// ---------------------------------------------------------------------------

/// Body of an update request: every top-level record field, each optional.
/// There is deliberately no `id` field — ids are store-assigned and an
/// update cannot re-key a record.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub price: Option<f64>,
    pub discount_percentage: Option<f64>,
    pub rating: Option<f64>,
    pub stock: Option<u32>,
    pub tags: Option<Vec<String>>,
    pub brand: Option<String>,
    pub sku: Option<String>,
    pub weight: Option<f64>,
    pub dimensions: Option<Dimensions>,
    pub warranty_information: Option<String>,
    pub shipping_information: Option<String>,
    pub availability_status: Option<String>,
    pub reviews: Option<Vec<Review>>,
    pub return_policy: Option<String>,
    pub minimum_order_quantity: Option<u32>,
    pub meta: Option<MetaPatch>,
    pub images: Option<Vec<String>>,
    pub thumbnail: Option<String>,
}

/// Replacement `meta` supplied in an update. A patch that carries one
/// replaces the record's `meta` wholesale — members the caller omits fall
/// back to defaults, they are not merged from the old value.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetaPatch {
    #[serde(default, with = "timestamp::option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, with = "timestamp::option")]
    pub updated_at: Option<DateTime<Utc>>,
    pub barcode: Option<String>,
    pub qr_code: Option<String>,
}

impl MetaPatch {
    fn into_meta(self, now: DateTime<Utc>) -> ProductMeta {
        ProductMeta {
            created_at: self.created_at.unwrap_or(now),
            updated_at: self.updated_at.unwrap_or(now),
            barcode: self.barcode.unwrap_or_default(),
            qr_code: self.qr_code.unwrap_or_default(),
        }
    }
}

impl Product {
    /// Shallow merge: overwrite exactly the fields present in the patch. A
    /// supplied `meta` replaces the whole struct; `meta.updated_at` is then
    /// forced to `now` no matter what the caller sent.
    pub fn apply_patch(&mut self, patch: ProductPatch, now: DateTime<Utc>) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
        if let Some(price) = patch.price {
            self.price = price;
        }
        if let Some(discount_percentage) = patch.discount_percentage {
            self.discount_percentage = discount_percentage;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(stock) = patch.stock {
            self.stock = stock;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(brand) = patch.brand {
            self.brand = brand;
        }
        if let Some(sku) = patch.sku {
            self.sku = sku;
        }
        if let Some(weight) = patch.weight {
            self.weight = weight;
        }
        if let Some(dimensions) = patch.dimensions {
            self.dimensions = dimensions;
        }
        if let Some(warranty_information) = patch.warranty_information {
            self.warranty_information = warranty_information;
        }
        if let Some(shipping_information) = patch.shipping_information {
            self.shipping_information = shipping_information;
        }
        if let Some(availability_status) = patch.availability_status {
            self.availability_status = availability_status;
        }
        if let Some(reviews) = patch.reviews {
            self.reviews = reviews;
        }
        if let Some(return_policy) = patch.return_policy {
            self.return_policy = return_policy;
        }
        if let Some(minimum_order_quantity) = patch.minimum_order_quantity {
            self.minimum_order_quantity = minimum_order_quantity;
        }
        if let Some(meta) = patch.meta {
            self.meta = meta.into_meta(now);
        }
        if let Some(images) = patch.images {
            self.images = images;
        }
        if let Some(thumbnail) = patch.thumbnail {
            self.thumbnail = thumbnail;
        }

        self.meta.updated_at = now;
    }
}

/// RFC 3339 timestamps with millisecond precision and a `Z` suffix, the
/// format the emulated service puts on the wire.
mod timestamp {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.to_rfc3339_opts(SecondsFormat::Millis, true))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_rfc3339(&raw)
            .map(|value| value.with_timezone(&Utc))
            .map_err(de::Error::custom)
    }

    pub mod option {
        use chrono::{DateTime, Utc};
        use serde::{de, Deserialize, Deserializer};

        pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
        where
            D: Deserializer<'de>,
        {
            Option::<String>::deserialize(deserializer)?
                .map(|raw| DateTime::parse_from_rfc3339(&raw).map(|v| v.with_timezone(&Utc)))
                .transpose()
                .map_err(de::Error::custom)
        }
    }
}
