use axum::{
    extract::{FromRequestParts, Request, State},
    http::{HeaderMap, request::Parts},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::{ApiError, AppState};
use crate::domain::CurrentUser;

// ============================================================================
// Middleware
// ============================================================================

/// Resolves the caller from, in order:
/// 1. `X-Api-Key` header
/// 2. `Authorization: Token <api_key>` header
/// 3. `Authorization: Bearer <api_key>` header
///
/// A request without credentials passes through anonymously. A request with
/// credentials that match no user is rejected.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let Some(key) = extract_api_key(&headers) else {
        return Ok(next.run(request).await);
    };

    let user = state
        .store()
        .verify_api_key(&key)
        .await?
        .ok_or_else(|| ApiError::Unauthorized("Invalid token.".to_string()))?;

    tracing::Span::current().record("user_id", &user.username);
    request.extensions_mut().insert(CurrentUser::from(user));

    Ok(next.run(request).await)
}

/// Extract API key from headers
fn extract_api_key(headers: &HeaderMap) -> Option<String> {
    if let Some(api_key) = headers.get("X-Api-Key")
        && let Ok(key_str) = api_key.to_str()
    {
        return Some(key_str.trim().to_string());
    }

    if let Some(auth_header) = headers.get("Authorization")
        && let Ok(auth_str) = auth_header.to_str()
        && let Some(token) = auth_str
            .strip_prefix("Token ")
            .or_else(|| auth_str.strip_prefix("Bearer "))
    {
        return Some(token.trim().to_string());
    }

    None
}

// ============================================================================
// Extractors
// ============================================================================

/// The caller, if any. Never rejects.
#[derive(Debug, Clone)]
pub struct Viewer(pub Option<CurrentUser>);

impl Viewer {
    #[must_use]
    pub fn user(&self) -> Option<&CurrentUser> {
        self.0.as_ref()
    }
}

impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(Self(parts.extensions.get::<CurrentUser>().cloned()))
    }
}

/// A signed-in caller. Rejects anonymous requests with 401.
#[derive(Debug, Clone)]
pub struct Authenticated(pub CurrentUser);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .map(Self)
            .ok_or_else(ApiError::unauthenticated)
    }
}
