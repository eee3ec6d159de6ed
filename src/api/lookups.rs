//! Reference tables: whiskey types, colors and ratings.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use std::sync::Arc;

use super::auth::Authenticated;
use super::validation::validate_label;
use super::{ApiError, AppState, ColorDto, RatingDto, TypePayload, WhiskeyTypeDto};
use crate::services::LookupError;

impl From<LookupError> for ApiError {
    fn from(err: LookupError) -> Self {
        match err {
            LookupError::TypeNotFound(_)
            | LookupError::ColorNotFound(_)
            | LookupError::RatingNotFound(_) => Self::NotFound(err.to_string()),
            LookupError::Forbidden => Self::forbidden(err.to_string()),
            LookupError::Validation(msg) => Self::validation(msg),
            LookupError::Database(msg) => Self::DatabaseError(msg),
        }
    }
}

pub async fn list_types(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<WhiskeyTypeDto>>, ApiError> {
    Ok(Json(state.lookup_service().list_types().await?))
}

pub async fn get_type(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<WhiskeyTypeDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.lookup_service().get_type(id).await?))
}

/// `POST /types`, admins only.
pub async fn create_type(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    payload: Result<Json<TypePayload>, JsonRejection>,
) -> Result<(StatusCode, Json<WhiskeyTypeDto>), ApiError> {
    let Json(payload) = payload?;
    let label = validate_label(payload.label.as_deref())?;

    let created = state.lookup_service().create_type(&user, label).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// `DELETE /types/{id}`, admins only.
pub async fn delete_type(
    State(state): State<Arc<AppState>>,
    Authenticated(user): Authenticated,
    id: Result<Path<i32>, PathRejection>,
) -> Result<StatusCode, ApiError> {
    let Path(id) = id?;
    state.lookup_service().delete_type(&user, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_colors(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ColorDto>>, ApiError> {
    Ok(Json(state.lookup_service().list_colors().await?))
}

pub async fn get_color(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<ColorDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.lookup_service().get_color(id).await?))
}

pub async fn list_ratings(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<RatingDto>>, ApiError> {
    Ok(Json(state.lookup_service().list_ratings().await?))
}

pub async fn get_rating(
    State(state): State<Arc<AppState>>,
    id: Result<Path<i32>, PathRejection>,
) -> Result<Json<RatingDto>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.lookup_service().get_rating(id).await?))
}
