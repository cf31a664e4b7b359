//! Request and response DTOs for the REST API.

pub mod category;
pub mod create_listing;
pub mod health;
pub mod image;
pub mod listing;
pub mod search;
pub mod update_listing;
