use axum::http::Uri;

use crate::error::AppError;

pub mod config;
pub mod pages;

pub async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}
