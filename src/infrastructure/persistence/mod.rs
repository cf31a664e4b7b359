//! PostgreSQL repository implementations.

mod pg_category_repository;
mod pg_listing_repository;
mod pg_user_repository;

pub use pg_category_repository::PgCategoryRepository;
pub use pg_listing_repository::PgListingRepository;
pub use pg_user_repository::PgUserRepository;
