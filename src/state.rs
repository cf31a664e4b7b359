//! Shared application state injected into handlers.

use sqlx::PgPool;
use std::sync::Arc;

use crate::application::services::{CategoryService, ListingService, SearchService};
use crate::infrastructure::media::MediaStore;
use crate::infrastructure::persistence::{
    PgCategoryRepository, PgListingRepository, PgUserRepository,
};

/// Listing lifecycle service over the PostgreSQL repositories.
pub type PgListingService = ListingService<PgListingRepository, PgUserRepository>;
/// Category service over the PostgreSQL repository.
pub type PgCategoryService = CategoryService<PgCategoryRepository>;
/// Discovery service over the PostgreSQL repository.
pub type PgSearchService = SearchService<PgListingRepository>;

/// Application state shared across all request handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<PgPool>,
    pub listing_service: Arc<PgListingService>,
    pub category_service: Arc<PgCategoryService>,
    pub search_service: Arc<PgSearchService>,
    pub media_store: Arc<dyn MediaStore>,
}

impl AppState {
    /// Wires repositories and services over the given pool and media store.
    pub fn new(db: Arc<PgPool>, media_store: Arc<dyn MediaStore>) -> Self {
        let listing_repository = Arc::new(PgListingRepository::new(db.clone()));
        let user_repository = Arc::new(PgUserRepository::new(db.clone()));
        let category_repository = Arc::new(PgCategoryRepository::new(db.clone()));

        let listing_service = Arc::new(ListingService::new(
            listing_repository.clone(),
            user_repository,
            media_store.clone(),
        ));
        let category_service = Arc::new(CategoryService::new(category_repository));
        let search_service = Arc::new(SearchService::new(listing_repository));

        Self {
            db,
            listing_service,
            category_service,
            search_service,
            media_store,
        }
    }
}
