//! Repository traits decoupling business logic from storage.

mod category_repository;
mod listing_repository;
mod user_repository;

pub use category_repository::CategoryRepository;
pub use listing_repository::{ListingRepository, NEAREST_LIMIT};
pub use user_repository::UserRepository;

#[cfg(test)]
pub use category_repository::MockCategoryRepository;
#[cfg(test)]
pub use listing_repository::MockListingRepository;
#[cfg(test)]
pub use user_repository::MockUserRepository;
