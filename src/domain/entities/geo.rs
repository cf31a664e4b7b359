//! Geographic query point and the great-circle distance contract.

/// Earth radius in kilometres, as used by the nearest-listing ranking.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// A latitude/longitude pair in floating-point degrees.
///
/// Not a stored entity: every discovery query carries one as the anchor the
/// results are ranked against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Great-circle distance between two points in kilometres.
///
/// Spherical law of cosines with Earth radius [`EARTH_RADIUS_KM`]: the same
/// formula the storage layer evaluates when ranking listings, kept here as
/// the documented contract. The cosine argument is clamped to `[-1, 1]` so
/// coincident points stay inside `acos`'s domain.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let (lat_a, lng_a) = (a.lat.to_radians(), a.lng.to_radians());
    let (lat_b, lng_b) = (b.lat.to_radians(), b.lng.to_radians());

    let cos_angle =
        lat_a.cos() * lat_b.cos() * (lng_b - lng_a).cos() + lat_a.sin() * lat_b.sin();

    EARTH_RADIUS_KM * cos_angle.clamp(-1.0, 1.0).acos()
}
