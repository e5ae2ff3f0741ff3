//! Service entity: a bookable offering of a store.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use super::{Category, Image, NewImage};

/// A service record without its relations.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    pub id: String,
    pub store_id: String,
    pub category_id: String,
    pub name: String,
    pub price: Decimal,
    /// Duration in minutes.
    pub time: i32,
    pub is_featured: bool,
    pub is_archived: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A service together with its images and category.
///
/// Serializes flat, so clients see the service fields plus `images` and
/// `category` keys.
#[derive(Debug, Clone, Serialize)]
pub struct ServiceDetails {
    #[serde(flatten)]
    pub service: Service,
    pub images: Vec<Image>,
    pub category: Option<Category>,
}

/// Validated input for creating or updating a service.
///
/// On update, `None` flags leave the stored value unchanged. On create they
/// default to `false`. The image list always replaces the stored set.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceInput {
    pub name: String,
    pub price: Decimal,
    pub time: i32,
    pub category_id: String,
    pub images: Vec<NewImage>,
    pub is_featured: Option<bool>,
    pub is_archived: Option<bool>,
}

/// Filters for listing the services of a store.
///
/// Archived services are never listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServiceFilter {
    pub category_id: Option<String>,
    pub is_featured: Option<bool>,
}
