use axum::{Json, extract::State};
use std::sync::Arc;

use super::auth::Authenticated;
use super::{ApiError, AppState, CurrentUserDto};

/// `GET /current_user`
///
/// Profile of the caller. The password hash and token are never included.
pub async fn get_current_user(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
) -> Result<Json<CurrentUserDto>, ApiError> {
    let account = state
        .store()
        .get_user_by_id(user.id.value())
        .await?
        .ok_or_else(ApiError::unauthenticated)?;

    Ok(Json(CurrentUserDto::from(account)))
}
