//! Application services orchestrating domain logic.

mod category_service;
mod listing_service;
mod search_service;

pub use category_service::CategoryService;
pub use listing_service::{ListingDraft, ListingService};
pub use search_service::SearchService;
