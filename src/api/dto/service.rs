//! DTOs for the service endpoints.

use rust_decimal::Decimal;
use serde::Deserialize;
use serde_with::{DisplayFromStr, PickFirst, serde_as};

use crate::domain::entities::{NewImage, ServiceFilter, ServiceInput};
use crate::error::AppError;

/// Request body for `POST /api/{storeId}/services` and
/// `PATCH /api/{storeId}/services/{serviceId}`.
///
/// Every field is optional at the serde level so that a missing field turns
/// into its own field-specific message instead of a generic parse error.
/// `time` accepts a number or a numeric string, as HTML forms send either.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    pub name: Option<String>,

    pub price: Option<Decimal>,

    #[serde_as(as = "Option<PickFirst<(_, DisplayFromStr)>>")]
    #[serde(default)]
    pub time: Option<i32>,

    pub category_id: Option<String>,

    pub images: Option<Vec<NewImage>>,

    pub is_featured: Option<bool>,

    pub is_archived: Option<bool>,
}

impl ServiceRequest {
    /// Parses a raw JSON body.
    ///
    /// The body is parsed by hand rather than through the `Json` extractor so
    /// that identity is checked before the body is looked at.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the body is not a JSON object of
    /// the expected shape.
    pub fn from_body(body: &[u8]) -> Result<Self, AppError> {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!(error = %e, "Rejected service request body");
            AppError::bad_request("Invalid request body")
        })
    }

    /// Checks required fields in a fixed order and builds the domain input.
    ///
    /// Order: `name`, `time`, `images`, `price`, `categoryId`. A field counts
    /// as absent when it is missing, null, an empty string, zero or an empty
    /// list. Whitespace is a value.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] naming the first absent field.
    pub fn into_input(self) -> Result<ServiceInput, AppError> {
        let name = self
            .name
            .filter(|n| !n.is_empty())
            .ok_or_else(|| AppError::bad_request("Name is required"))?;

        let time = self
            .time
            .filter(|t| *t != 0)
            .ok_or_else(|| AppError::bad_request("Time is required"))?;

        let images = self
            .images
            .filter(|i| !i.is_empty())
            .ok_or_else(|| AppError::bad_request("Images are required"))?;

        let price = self
            .price
            .filter(|p| !p.is_zero())
            .ok_or_else(|| AppError::bad_request("Price is required"))?;

        let category_id = self
            .category_id
            .filter(|c| !c.is_empty())
            .ok_or_else(|| AppError::bad_request("Category id is required"))?;

        Ok(ServiceInput {
            name,
            price,
            time,
            category_id,
            images,
            is_featured: self.is_featured,
            is_archived: self.is_archived,
        })
    }
}

/// Query parameters for `GET /api/{storeId}/services`.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceListQuery {
    pub category_id: Option<String>,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub is_featured: Option<bool>,
}

impl From<ServiceListQuery> for ServiceFilter {
    fn from(q: ServiceListQuery) -> Self {
        ServiceFilter {
            category_id: q.category_id.filter(|c| !c.is_empty()),
            is_featured: q.is_featured,
        }
    }
}
