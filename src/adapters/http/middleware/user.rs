//! Identity extractor.
//!
//! Authentication happens upstream; the auth collaborator forwards the
//! signed-in user's id in the `X-User-Id` header.

use async_trait::async_trait;
use axum::{
    extract::FromRequestParts,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::domain::foundation::UserId;

/// Header carrying the authenticated user id.
pub const USER_ID_HEADER: &str = "x-user-id";

/// Extractor that requires an identified user.
///
/// # Example
///
/// ```ignore
/// async fn my_handler(RequireUser(user_id): RequireUser) -> impl IntoResponse {
///     format!("Hello, {}!", user_id)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireUser(pub UserId);

#[async_trait]
impl<S> FromRequestParts<S> for RequireUser
where
    S: Send + Sync,
{
    type Rejection = UserRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| UserId::new(value.trim()).ok())
            .map(RequireUser)
            .ok_or(UserRejection::Unidentified)
    }
}

/// Rejection type for identity failures.
#[derive(Debug, Clone)]
pub enum UserRejection {
    /// No usable user id header was present.
    Unidentified,
}

impl IntoResponse for UserRejection {
    fn into_response(self) -> Response {
        match self {
            UserRejection::Unidentified => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorResponse::unauthorized("Authentication required")),
            )
                .into_response(),
        }
    }
}
