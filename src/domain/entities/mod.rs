//! Core business entities.

mod category;
mod geo;
mod listing;
mod user;

pub use category::{Category, NewCategory};
pub use geo::{EARTH_RADIUS_KM, GeoPoint, distance_km};
pub use listing::{Listing, ListingPatch, NewListing};
pub use user::User;
