//! Request extractors whose rejections render like every other API error.

use axum::extract::FromRequest;

use crate::errors::AppError;

/// `axum::Json` with its rejection mapped to `AppError`, so a malformed body
/// gets a `{"error": ...}` 400 instead of axum's plain-text response.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);
