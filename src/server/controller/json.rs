use axum::extract::FromRequest;

use crate::server::error::AppError;

/// JSON body extractor whose rejections are reported as `AppError::BadRequest`.
///
/// Behaves like `axum::Json`, but malformed bodies, wrong field types and a missing
/// `application/json` content type produce a 400 with an `ErrorDto` body.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
