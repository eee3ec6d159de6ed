//! Domain service for the reference tables entries point at.
//!
//! Colors and ratings are read-only. Whiskey types can also be added and
//! removed, by admins only.

use crate::api::types::{ColorDto, RatingDto, WhiskeyTypeDto};
use crate::domain::CurrentUser;
use thiserror::Error;

/// Errors specific to lookup operations.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Whiskey type {0} not found")]
    TypeNotFound(i32),

    #[error("Color {0} not found")]
    ColorNotFound(i32),

    #[error("Rating {0} not found")]
    RatingNotFound(i32),

    #[error("Only admins can manage whiskey types")]
    Forbidden,

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<anyhow::Error> for LookupError {
    fn from(err: anyhow::Error) -> Self {
        Self::Database(format!("{err:#}"))
    }
}

#[async_trait::async_trait]
pub trait LookupService: Send + Sync {
    async fn list_types(&self) -> Result<Vec<WhiskeyTypeDto>, LookupError>;

    async fn get_type(&self, id: i32) -> Result<WhiskeyTypeDto, LookupError>;

    /// Adds a whiskey type. Admin only.
    async fn create_type(
        &self,
        caller: &CurrentUser,
        label: &str,
    ) -> Result<WhiskeyTypeDto, LookupError>;

    /// Removes a whiskey type and, through the cascade, every entry of that type. Admin only.
    async fn delete_type(&self, caller: &CurrentUser, id: i32) -> Result<(), LookupError>;

    async fn list_colors(&self) -> Result<Vec<ColorDto>, LookupError>;

    async fn get_color(&self, id: i32) -> Result<ColorDto, LookupError>;

    async fn list_ratings(&self) -> Result<Vec<RatingDto>, LookupError>;

    async fn get_rating(&self, id: i32) -> Result<RatingDto, LookupError>;
}
