//! PostgreSQL implementation of the listing repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{GeoPoint, Listing, NewListing};
use crate::domain::repositories::ListingRepository;
use crate::error::AppError;

/// PostgreSQL repository for listing storage and geo-ranked retrieval.
///
/// Distance ranking is pushed into SQL so ordering and truncation happen in
/// the database; the formula is the documented contract from
/// [`ListingRepository::find_nearest`], not incidental query text.
pub struct PgListingRepository {
    pool: Arc<PgPool>,
}

impl PgListingRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListingRepository for PgListingRepository {
    async fn create(&self, new_listing: NewListing) -> Result<Listing, AppError> {
        // is_approved is omitted so the schema default (FALSE) always wins.
        let listing = sqlx::query_as::<_, Listing>(
            r#"
            INSERT INTO listings (provider_id, category_id, title, description, price, image_url)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, provider_id, category_id, title, description, price,
                      image_url, is_approved, created_at
            "#,
        )
        .bind(new_listing.provider_id)
        .bind(new_listing.category_id)
        .bind(&new_listing.title)
        .bind(&new_listing.description)
        .bind(new_listing.price)
        .bind(&new_listing.image_url)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(listing)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Listing>, AppError> {
        let listing = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, provider_id, category_id, title, description, price,
                   image_url, is_approved, created_at
            FROM listings
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(listing)
    }

    async fn list_by_provider(&self, provider_id: i64) -> Result<Vec<Listing>, AppError> {
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT id, provider_id, category_id, title, description, price,
                   image_url, is_approved, created_at
            FROM listings
            WHERE provider_id = $1
            "#,
        )
        .bind(provider_id)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(listings)
    }

    async fn update(&self, listing: &Listing) -> Result<Option<Listing>, AppError> {
        // Single statement, all mutable fields except is_approved: approval is
        // changed only through set_approval, never as a side effect of edits.
        let updated = sqlx::query_as::<_, Listing>(
            r#"
            UPDATE listings
            SET category_id = $2,
                title       = $3,
                description = $4,
                price       = $5,
                image_url   = $6
            WHERE id = $1
            RETURNING id, provider_id, category_id, title, description, price,
                      image_url, is_approved, created_at
            "#,
        )
        .bind(listing.id)
        .bind(listing.category_id)
        .bind(&listing.title)
        .bind(&listing.description)
        .bind(listing.price)
        .bind(&listing.image_url)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(updated)
    }

    async fn set_approval(&self, id: i64, approved: bool) -> Result<Option<Listing>, AppError> {
        let updated = sqlx::query_as::<_, Listing>(
            r#"
            UPDATE listings
            SET is_approved = $2
            WHERE id = $1
            RETURNING id, provider_id, category_id, title, description, price,
                      image_url, is_approved, created_at
            "#,
        )
        .bind(id)
        .bind(approved)
        .fetch_optional(self.pool.as_ref())
        .await?;

        Ok(updated)
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM listings WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn find_nearest(
        &self,
        point: GeoPoint,
        category_id: i64,
        limit: i64,
    ) -> Result<Vec<Listing>, AppError> {
        // Spherical law of cosines, Earth radius 6371 km. The acos argument is
        // clamped to [-1, 1]: floating-point rounding for near-coincident
        // points can otherwise push it out of acos's domain. Providers with no
        // registered location have undefined distance and are excluded.
        let listings = sqlx::query_as::<_, Listing>(
            r#"
            SELECT l.id, l.provider_id, l.category_id, l.title, l.description,
                   l.price, l.image_url, l.is_approved, l.created_at
            FROM listings l
            JOIN users u ON u.id = l.provider_id
            WHERE l.category_id = $3
              AND l.is_approved = TRUE
              AND u.permanent_latitude IS NOT NULL
              AND u.permanent_longitude IS NOT NULL
            ORDER BY (
                6371 * acos(LEAST(1.0, GREATEST(-1.0,
                    cos(radians($1)) * cos(radians(u.permanent_latitude)) *
                    cos(radians(u.permanent_longitude) - radians($2)) +
                    sin(radians($1)) * sin(radians(u.permanent_latitude))
                )))
            )
            LIMIT $4
            "#,
        )
        .bind(point.lat)
        .bind(point.lng)
        .bind(category_id)
        .bind(limit)
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(listings)
    }
}
