//! Read-only projection of a user record.
//!
//! Accounts are owned by the identity provider; this service reads users only
//! to resolve providers and their permanent location.

use super::geo::GeoPoint;
use sqlx::FromRow;

/// The columns of the user record this service cares about.
///
/// `permanent_latitude`/`permanent_longitude` form the distance anchor for all
/// of the provider's listings in nearest-queries. Both may be absent: a
/// provider without a registered location is simply excluded from discovery.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i64,
    pub user_name: String,
    pub role: String,
    pub permanent_latitude: Option<f64>,
    pub permanent_longitude: Option<f64>,
}

impl User {
    /// The provider's registered permanent location, if both coordinates are set.
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.permanent_latitude, self.permanent_longitude) {
            (Some(lat), Some(lng)) => Some(GeoPoint::new(lat, lng)),
            _ => None,
        }
    }
}
