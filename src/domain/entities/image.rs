//! Image entity attached to a service.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Image {
    pub id: String,
    pub service_id: String,
    pub url: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// An image to attach to a service. Only the URL is supplied by clients.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NewImage {
    pub url: String,
}
