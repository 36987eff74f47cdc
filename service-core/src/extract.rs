//! Request extractors.

use crate::error::AppError;
use axum::extract::FromRequest;

/// `axum::Json` with [`AppError`] as its rejection.
///
/// A body that is not JSON, or that does not match `T`, follows the same
/// opaque server-error path as any other failure instead of axum's 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
