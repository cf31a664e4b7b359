//! Listing lifecycle service: creation, update, deletion, and approval.

use std::sync::Arc;

use rust_decimal::Decimal;
use serde_json::json;

use crate::domain::auth::AuthContext;
use crate::domain::entities::{Listing, ListingPatch, NewListing};
use crate::domain::repositories::{ListingRepository, UserRepository};
use crate::error::AppError;
use crate::infrastructure::media::{MediaError, MediaStore, MediaUpload};

/// Fields a provider supplies when creating a listing.
///
/// Approval is deliberately absent: a new listing is always persisted
/// unapproved, whatever the request carried.
#[derive(Debug, Clone)]
pub struct ListingDraft {
    pub category_id: i64,
    pub title: String,
    pub description: Option<String>,
    pub price: Decimal,
}

/// Service enforcing creation/update/delete rules and the approval state
/// machine. Sole mutator of listing fields.
///
/// State machine per listing: unapproved on creation, flipped by the explicit
/// admin approve/reject operation only, deleted terminally by the owner or an
/// admin. Provider edits never change the approval flag, in either direction.
pub struct ListingService<L: ListingRepository, U: UserRepository> {
    listing_repository: Arc<L>,
    user_repository: Arc<U>,
    media_store: Arc<dyn MediaStore>,
}

impl<L: ListingRepository, U: UserRepository> ListingService<L, U> {
    /// Creates a new listing service.
    pub fn new(
        listing_repository: Arc<L>,
        user_repository: Arc<U>,
        media_store: Arc<dyn MediaStore>,
    ) -> Self {
        Self {
            listing_repository,
            user_repository,
            media_store,
        }
    }

    /// Creates a listing owned by `provider_id`.
    ///
    /// The image payload, if any, is pushed to the media store first; a failed
    /// upload aborts the whole request rather than falling back to a listing
    /// without an image.
    ///
    /// # Errors
    ///
    /// - [`AppError::Forbidden`] if the caller is neither the provider nor an admin
    /// - [`AppError::NotFound`] if `provider_id` does not resolve to a user
    /// - [`AppError::Validation`] for an empty title or negative price
    /// - [`AppError::Dependency`] if the media upload or storage fails
    pub async fn create_listing(
        &self,
        ctx: AuthContext,
        provider_id: i64,
        draft: ListingDraft,
        image: Option<MediaUpload>,
    ) -> Result<Listing, AppError> {
        if !ctx.can_manage(provider_id) {
            return Err(AppError::forbidden(
                "Cannot create listings for another provider",
                json!({ "provider_id": provider_id }),
            ));
        }

        self.user_repository
            .find_by_id(provider_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Provider not found", json!({ "provider_id": provider_id }))
            })?;

        validate_title(&draft.title)?;
        validate_price(draft.price)?;

        let image_url = match image {
            Some(upload) => Some(
                self.media_store
                    .upload(upload)
                    .await
                    .map_err(map_media_error)?,
            ),
            None => None,
        };

        let listing = self
            .listing_repository
            .create(NewListing {
                provider_id,
                category_id: draft.category_id,
                title: draft.title,
                description: draft.description,
                price: draft.price,
                image_url,
            })
            .await?;

        tracing::info!(listing_id = listing.id, provider_id, "Listing created");

        Ok(listing)
    }

    /// Partially updates a listing.
    ///
    /// Absent patch fields are left unchanged. A supplied image payload
    /// triggers a fresh upload whose URL replaces the stored one. The
    /// approval flag is never touched here, so an edit does not reset approval.
    ///
    /// # Errors
    ///
    /// - [`AppError::NotFound`] if the listing does not exist
    /// - [`AppError::Forbidden`] if the caller is neither the owner nor an admin
    /// - [`AppError::Validation`] for an empty title or negative price
    /// - [`AppError::Dependency`] if the media upload or storage fails
    pub async fn update_listing(
        &self,
        ctx: AuthContext,
        listing_id: i64,
        mut patch: ListingPatch,
        image: Option<MediaUpload>,
    ) -> Result<Listing, AppError> {
        let mut listing = self.get_listing(listing_id).await?;

        if !ctx.can_manage(listing.provider_id) {
            return Err(AppError::forbidden(
                "Cannot modify another provider's listing",
                json!({ "listing_id": listing_id }),
            ));
        }

        if let Some(title) = &patch.title {
            validate_title(title)?;
        }
        if let Some(price) = patch.price {
            validate_price(price)?;
        }

        if let Some(upload) = image {
            let url = self
                .media_store
                .upload(upload)
                .await
                .map_err(map_media_error)?;
            patch.image_url = Some(url);
        }

        listing.apply(patch);

        self.listing_repository
            .update(&listing)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Listing not found", json!({ "listing_id": listing_id }))
            })
    }

    /// Removes a listing permanently.
    ///
    /// Idempotent: deleting an id that does not exist succeeds without a
    /// distinguishable error, unlike the other single-entity operations.
    /// Callers must not rely on a not-found signal here. When the record does
    /// exist, ownership is enforced before removal.
    pub async fn delete_listing(&self, ctx: AuthContext, listing_id: i64) -> Result<(), AppError> {
        let Some(listing) = self.listing_repository.find_by_id(listing_id).await? else {
            tracing::debug!(listing_id, "Delete of non-existent listing treated as success");
            return Ok(());
        };

        if !ctx.can_manage(listing.provider_id) {
            return Err(AppError::forbidden(
                "Cannot delete another provider's listing",
                json!({ "listing_id": listing_id }),
            ));
        }

        self.listing_repository.delete(listing_id).await?;
        tracing::info!(listing_id, "Listing deleted");

        Ok(())
    }

    /// Approves or rejects a listing. Admin only.
    ///
    /// This is the single path that mutates the approval flag.
    ///
    /// # Errors
    ///
    /// - [`AppError::Forbidden`] if the caller is not an admin
    /// - [`AppError::NotFound`] if the listing does not exist
    pub async fn set_approval(
        &self,
        ctx: AuthContext,
        listing_id: i64,
        approve: bool,
    ) -> Result<Listing, AppError> {
        ctx.require_admin()?;

        let listing = self
            .listing_repository
            .set_approval(listing_id, approve)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Listing not found", json!({ "listing_id": listing_id }))
            })?;

        tracing::info!(listing_id, approved = approve, "Listing approval changed");

        Ok(listing)
    }

    /// Retrieves a listing by id, approval state included.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no listing matches.
    pub async fn get_listing(&self, listing_id: i64) -> Result<Listing, AppError> {
        self.listing_repository
            .find_by_id(listing_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Listing not found", json!({ "listing_id": listing_id }))
            })
    }

    /// All listings owned by a provider, with no approval filtering: a
    /// provider sees their own unapproved listings.
    pub async fn listings_by_provider(&self, provider_id: i64) -> Result<Vec<Listing>, AppError> {
        self.listing_repository.list_by_provider(provider_id).await
    }
}

fn validate_title(title: &str) -> Result<(), AppError> {
    if title.trim().is_empty() {
        return Err(AppError::bad_request("Title must not be empty", json!({})));
    }
    Ok(())
}

fn validate_price(price: Decimal) -> Result<(), AppError> {
    if price < Decimal::ZERO {
        return Err(AppError::bad_request(
            "Price must not be negative",
            json!({ "price": price.to_string() }),
        ));
    }
    Ok(())
}

fn map_media_error(e: MediaError) -> AppError {
    match e {
        MediaError::TooLarge { size, max } => AppError::bad_request(
            "Image payload too large",
            json!({ "size": size, "max": max }),
        ),
        MediaError::Unsupported(content_type) => AppError::bad_request(
            "Unsupported image content type",
            json!({ "content_type": content_type }),
        ),
        MediaError::Unavailable(reason) => {
            AppError::dependency("Media upload failed", json!({ "reason": reason }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::auth::{AuthContext, Role};
    use crate::domain::entities::User;
    use crate::domain::repositories::{MockListingRepository, MockUserRepository};
    use crate::infrastructure::media::{MockMediaStore, NullMediaStore};
    use chrono::Utc;

    fn provider_ctx(id: i64) -> AuthContext {
        AuthContext::new(id, Role::Provider)
    }

    fn admin_ctx() -> AuthContext {
        AuthContext::new(1, Role::Admin)
    }

    fn test_user(id: i64) -> User {
        User {
            id,
            user_name: "asha".to_string(),
            role: "PROVIDER".to_string(),
            permanent_latitude: Some(12.97),
            permanent_longitude: Some(77.59),
        }
    }

    fn test_listing(id: i64, provider_id: i64, approved: bool) -> Listing {
        Listing {
            id,
            provider_id,
            category_id: 3,
            title: "Plumbing repair".to_string(),
            description: Some("Leaks and taps".to_string()),
            price: Decimal::new(10000, 2),
            image_url: None,
            is_approved: approved,
            created_at: Utc::now(),
        }
    }

    fn test_draft() -> ListingDraft {
        ListingDraft {
            category_id: 3,
            title: "Plumbing repair".to_string(),
            description: Some("Leaks and taps".to_string()),
            price: Decimal::new(10000, 2),
        }
    }

    fn service(
        listings: MockListingRepository,
        users: MockUserRepository,
    ) -> ListingService<MockListingRepository, MockUserRepository> {
        ListingService::new(Arc::new(listings), Arc::new(users), Arc::new(NullMediaStore))
    }

    fn service_with_media(
        listings: MockListingRepository,
        users: MockUserRepository,
        media: MockMediaStore,
    ) -> ListingService<MockListingRepository, MockUserRepository> {
        ListingService::new(Arc::new(listings), Arc::new(users), Arc::new(media))
    }

    #[tokio::test]
    async fn test_create_listing_is_unapproved() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));

        listings
            .expect_create()
            .withf(|new| new.image_url.is_none() && new.provider_id == 10)
            .times(1)
            .returning(|new| {
                let mut listing = test_listing(42, new.provider_id, false);
                listing.title = new.title.clone();
                Ok(listing)
            });

        let result = service(listings, users)
            .create_listing(provider_ctx(10), 10, test_draft(), None)
            .await;

        let listing = result.unwrap();
        assert!(!listing.is_approved);
        assert_eq!(listing.provider_id, 10);
    }

    #[tokio::test]
    async fn test_create_listing_unknown_provider() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();

        users.expect_find_by_id().times(1).returning(|_| Ok(None));
        listings.expect_create().times(0);

        let result = service(listings, users)
            .create_listing(provider_ctx(99), 99, test_draft(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_create_listing_for_other_provider_forbidden() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();
        listings.expect_create().times(0);

        let result = service(listings, users)
            .create_listing(provider_ctx(10), 11, test_draft(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_admin_can_create_for_any_provider() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));
        listings
            .expect_create()
            .times(1)
            .returning(|new| Ok(test_listing(1, new.provider_id, false)));

        let result = service(listings, users)
            .create_listing(admin_ctx(), 10, test_draft(), None)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_create_listing_negative_price() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));
        listings.expect_create().times(0);

        let mut draft = test_draft();
        draft.price = Decimal::new(-1, 0);

        let result = service(listings, users)
            .create_listing(provider_ctx(10), 10, draft, None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_create_listing_stores_uploaded_image_url() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();
        let mut media = MockMediaStore::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));

        media
            .expect_upload()
            .times(1)
            .returning(|_| Ok("https://api.test/media/abc.jpg".to_string()));

        listings
            .expect_create()
            .withf(|new| new.image_url.as_deref() == Some("https://api.test/media/abc.jpg"))
            .times(1)
            .returning(|new| {
                let mut listing = test_listing(1, new.provider_id, false);
                listing.image_url = new.image_url.clone();
                Ok(listing)
            });

        let upload = MediaUpload {
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".to_string(),
        };

        let result = service_with_media(listings, users, media)
            .create_listing(provider_ctx(10), 10, test_draft(), Some(upload))
            .await;

        assert_eq!(
            result.unwrap().image_url.as_deref(),
            Some("https://api.test/media/abc.jpg")
        );
    }

    #[tokio::test]
    async fn test_create_listing_failed_upload_aborts() {
        let mut listings = MockListingRepository::new();
        let mut users = MockUserRepository::new();
        let mut media = MockMediaStore::new();

        users
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_user(id))));

        media
            .expect_upload()
            .times(1)
            .returning(|_| Err(MediaError::Unavailable("disk full".to_string())));

        // Nothing is persisted when the upload fails.
        listings.expect_create().times(0);

        let upload = MediaUpload {
            bytes: vec![1, 2, 3],
            content_type: "image/jpeg".to_string(),
        };

        let result = service_with_media(listings, users, media)
            .create_listing(provider_ctx(10), 10, test_draft(), Some(upload))
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Dependency { .. }));
    }

    #[tokio::test]
    async fn test_update_listing_partial_patch() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_listing(id, 10, true))));

        listings
            .expect_update()
            .withf(|l| {
                l.price == Decimal::new(25000, 2)
                    && l.title == "Plumbing repair"
                    && l.category_id == 3
                    && l.is_approved
            })
            .times(1)
            .returning(|l| Ok(Some(l.clone())));

        let patch = ListingPatch {
            price: Some(Decimal::new(25000, 2)),
            ..Default::default()
        };

        let result = service(listings, users)
            .update_listing(provider_ctx(10), 5, patch, None)
            .await;

        let updated = result.unwrap();
        assert_eq!(updated.price, Decimal::new(25000, 2));
        // An edit never resets approval.
        assert!(updated.is_approved);
    }

    #[tokio::test]
    async fn test_update_listing_not_found() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings.expect_find_by_id().times(1).returning(|_| Ok(None));
        listings.expect_update().times(0);

        let result = service(listings, users)
            .update_listing(provider_ctx(10), 404, ListingPatch::default(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_listing_non_owner_forbidden() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_listing(id, 10, false))));
        listings.expect_update().times(0);

        let result = service(listings, users)
            .update_listing(provider_ctx(11), 5, ListingPatch::default(), None)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_delete_listing_missing_id_is_success() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings.expect_find_by_id().times(1).returning(|_| Ok(None));
        listings.expect_delete().times(0);

        let result = service(listings, users)
            .delete_listing(provider_ctx(10), 404)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_listing_owner() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_listing(id, 10, true))));
        listings.expect_delete().times(1).returning(|_| Ok(true));

        let result = service(listings, users)
            .delete_listing(provider_ctx(10), 5)
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_delete_listing_non_owner_forbidden() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_find_by_id()
            .times(1)
            .returning(|id| Ok(Some(test_listing(id, 10, true))));
        listings.expect_delete().times(0);

        let result = service(listings, users)
            .delete_listing(provider_ctx(11), 5)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_set_approval_requires_admin() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();
        listings.expect_set_approval().times(0);

        let result = service(listings, users)
            .set_approval(provider_ctx(10), 5, true)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Forbidden { .. }));
    }

    #[tokio::test]
    async fn test_set_approval_round_trip() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_set_approval()
            .times(2)
            .returning(|id, approved| Ok(Some(test_listing(id, 10, approved))));

        let svc = service(listings, users);

        let approved = svc.set_approval(admin_ctx(), 5, true).await.unwrap();
        assert!(approved.is_approved);

        let rejected = svc.set_approval(admin_ctx(), 5, false).await.unwrap();
        assert!(!rejected.is_approved);
    }

    #[tokio::test]
    async fn test_set_approval_not_found() {
        let mut listings = MockListingRepository::new();
        let users = MockUserRepository::new();

        listings
            .expect_set_approval()
            .times(1)
            .returning(|_, _| Ok(None));

        let result = service(listings, users)
            .set_approval(admin_ctx(), 404, true)
            .await;

        assert!(matches!(result.unwrap_err(), AppError::NotFound { .. }));
    }
}
