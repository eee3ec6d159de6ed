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
use super::validation::validate_entry_payload;
use super::{ApiError, AppState, EntryPayload, EntryView, ListQuery};
use crate::domain::EntryId;
use crate::services::EntryError;

impl From<EntryError> for ApiError {
    fn from(err: EntryError) -> Self {
        match err {
            EntryError::NotFound(_)
            | EntryError::UserNotFound(_)
            | EntryError::ReferenceNotFound(_) => Self::NotFound(err.to_string()),
            EntryError::Forbidden(_) => Self::forbidden(err.to_string()),
            EntryError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

/// `GET /entries?username=`
pub async fn list_entries(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<EntryView>>, ApiError> {
    let entries = state
        .entry_service()
        .list(viewer.user(), query.username())
        .await?;

    Ok(Json(entries))
}

/// `GET /entries/{id}`
pub async fn get_entry(
    State(state): State<Arc<AppState>>,
    viewer: Viewer,
    id: Result<Path<EntryId>, PathRejection>,
) -> Result<Json<EntryView>, ApiError> {
    let Path(id) = id?;
    let entry = state.entry_service().get(viewer.user(), id).await?;
    Ok(Json(entry))
}

/// `POST /entries`
///
/// Responds with the new entry, lookups expanded.
pub async fn create_entry(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<(StatusCode, Json<EntryView>), ApiError> {
    let Json(payload) = payload?;
    let fields = validate_entry_payload(payload)?;

    let entry = state.entry_service().create(&user, fields).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// `PUT|PATCH /entries/{id}`
///
/// Replaces the whole entry. Accepted with no body.
pub async fn update_entry(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    id: Result<Path<EntryId>, PathRejection>,
    payload: Result<Json<EntryPayload>, JsonRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    let Json(payload) = payload?;
    let fields = validate_entry_payload(payload)?;

    state.entry_service().update(&user, id, fields).await?;
    Ok(StatusCode::ACCEPTED)
}

/// `DELETE /entries/{id}`
pub async fn delete_entry(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    id: Result<Path<EntryId>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.entry_service().delete(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
