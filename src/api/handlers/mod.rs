//! REST API request handlers.

mod admin;
mod categories;
mod health;
mod listings;
mod search;

pub use admin::{approve_listing_handler, create_category_handler, reject_listing_handler};
pub use categories::list_categories_handler;
pub use health::health_handler;
pub use listings::{
    create_listing_handler, delete_listing_handler, get_listing_handler,
    provider_listings_handler, update_listing_handler,
};
pub use search::search_handler;
