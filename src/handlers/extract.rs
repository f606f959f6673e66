// src/handlers/extract.rs
use axum::{
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};

use crate::errors::GameError;

/// `Json` extractor whose rejections use the same `{ "error": ... }` body as
/// every other failure.
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
    S: Send + Sync,
{
    type Rejection = GameError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(ApiJson(value))
    }
}
