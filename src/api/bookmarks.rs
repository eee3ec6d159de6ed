use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::{Authenticated, Viewer};
use super::validation::validate_id;
use super::{ApiError, AppState, BookmarkListQuery, BookmarkPayload, BookmarkView};
use crate::domain::{BookmarkId, EntryId};
use crate::services::BookmarkError;

impl From<BookmarkError> for ApiError {
    fn from(err: BookmarkError) -> Self {
        match err {
            BookmarkError::NotFound(_)
            | BookmarkError::EntryNotFound(_)
            | BookmarkError::UserNotFound(_) => Self::NotFound(err.to_string()),
            BookmarkError::Forbidden(_) => Self::forbidden(err.to_string()),
            BookmarkError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

/// `GET /bookmarks?username=&expand=entry`
pub async fn list_bookmarks(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
    Query(query): Query<BookmarkListQuery>,
) -> Result<Json<Vec<BookmarkView>>, ApiError> {
    let bookmarks = state
        .bookmark_service()
        .list(
            viewer.user(),
            query.username(),
            query.expand_entry(),
        )
        .await?;

    Ok(Json(bookmarks))
}

/// `GET /bookmarks/{id}`
pub async fn get_bookmark(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
    id: Result<Path<BookmarkId>, PathRejection>,
) -> Result<Json<BookmarkView>, ApiError> {
    let Path(id) = id?;
    let bookmark = state.bookmark_service().get(viewer.user(), id).await?;
    Ok(Json(bookmark))
}

/// `POST /bookmarks`
pub async fn create_bookmark(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    payload: Result<Json<BookmarkPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<BookmarkView>), ApiError> {
    let Json(payload) = payload?;
    let entry_id = EntryId::new(validate_id(payload.entry_id, "entry")?);

    let bookmark = state.bookmark_service().create(&user, entry_id).await?;
    Ok((StatusCode::CREATED, Json(bookmark)))
}

/// `DELETE /bookmarks/{id}`
pub async fn delete_bookmark(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    id: Result<Path<BookmarkId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.bookmark_service().delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
