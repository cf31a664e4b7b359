//! Identity context extraction.
//!
//! An upstream identity provider authenticates every request and conveys the
//! verified principal as headers; this service trusts them unconditionally.
//! Handlers receive the principal as an explicit [`AuthContext`] extractor
//! argument; there is no ambient, request-thread-bound security context.

use axum::{extract::FromRequestParts, http::request::Parts};
use serde_json::json;

use crate::domain::auth::{AuthContext, Role};
use crate::error::AppError;

/// Header carrying the verified user id.
pub const USER_ID_HEADER: &str = "x-user-id";
/// Header carrying the verified role.
pub const USER_ROLE_HEADER: &str = "x-user-role";

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = header_value(parts, USER_ID_HEADER)?
            .parse::<i64>()
            .map_err(|_| {
                AppError::unauthorized(
                    "Invalid identity context",
                    json!({ "header": USER_ID_HEADER }),
                )
            })?;

        let role = header_value(parts, USER_ROLE_HEADER)?
            .parse::<Role>()
            .map_err(|_| {
                AppError::unauthorized(
                    "Invalid identity context",
                    json!({ "header": USER_ROLE_HEADER }),
                )
            })?;

        Ok(AuthContext::new(user_id, role))
    }
}

fn header_value<'a>(parts: &'a Parts, name: &str) -> Result<&'a str, AppError> {
    parts
        .headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| {
            AppError::unauthorized("Missing identity context", json!({ "header": name }))
        })
}
