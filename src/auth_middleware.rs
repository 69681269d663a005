use axum::{
    RequestPartsExt, async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::TypedHeader;
use headers::{Authorization, authorization::Bearer};
use tracing::warn;

use crate::{AppState, error::AppError};

// Extracted from requests in protected handlers
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub token: String,
    pub email: String,
    pub name: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
    AppState: FromRef<S>, // Require that AppState can be extracted from S
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|e| {
                warn!("Failed to extract Authorization header: {}", e);
                AppError::Unauthorized("Missing or invalid Authorization header".into())
            })?;

        let app_state = AppState::from_ref(state);

        let session = app_state.sessions.lookup(bearer.token()).await.ok_or_else(|| {
            warn!("Unknown or expired session token");
            AppError::Unauthorized("Session expired or not found".into())
        })?;

        Ok(AuthenticatedUser {
            token: session.token,
            email: session.email,
            name: session.name,
        })
    }
}
