//! DTO for the discovery query.

use serde::Deserialize;
use validator::Validate;

/// Query parameters for `GET /api/customer/search` and
/// `GET /api/provider/search`.
///
/// Every discovery query carries a geo point and a category.
#[derive(Debug, Deserialize, Validate)]
pub struct SearchQuery {
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,

    pub category_id: i64,
}
