//! Application interface and state.

pub mod error;

use std::sync::Arc;

pub use error::AppError;

use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    response::{IntoResponse, Response},
};

use derive_more::Deref;

use http::header;

use serde::de::DeserializeOwned;

use crate::seed::Seed;

/// Shared app state.
///
/// Cheaply cloneable.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Everything the mock serves.
    pub seed: Arc<Seed>,
}

impl AppState {
    /// Creates app state over a seed table.
    pub fn new(seed: Seed) -> AppState {
        AppState {
            seed: Arc::new(seed),
        }
    }
}

/// Forgiving JSON body extractor.
///
/// Frontends under development send all sorts of things. A body that is
/// missing, isn't labelled as JSON, isn't JSON, or doesn't fit `T` is read
/// as `T::default()` rather than rejected, and handlers decide what an absent
/// field means.
#[derive(Debug, Deref)]
pub struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default + 'static,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // switch on content type
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);

        if !is_json {
            tracing::debug!("body is not json, using defaults");
            return Ok(Payload(T::default()));
        }

        let body = match Bytes::from_request(req, state).await {
            Ok(body) => body,
            Err(err) => {
                tracing::debug!(%err, "failed to buffer body, using defaults");
                return Ok(Payload(T::default()));
            }
        };

        if body.is_empty() {
            return Ok(Payload(T::default()));
        }

        match serde_json::from_slice(&body) {
            Ok(value) => Ok(Payload(value)),
            Err(err) => {
                tracing::debug!(%err, "unusable json body, using defaults");
                Ok(Payload(T::default()))
            }
        }
    }
}

/// Checks for `application/json` or a `+json` subtype, ignoring parameters.
fn is_json_content_type(content_type: &str) -> bool {
    let mime = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
}

/// App path extractor.
#[derive(Debug, Deref, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

/// App JSON responder.
#[derive(Debug, Deref)]
pub struct AppJson<T>(pub T);

impl<T> IntoResponse for AppJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_content_types() {
        assert!(is_json_content_type("application/json"));
        assert!(is_json_content_type("application/json; charset=utf-8"));
        assert!(is_json_content_type("Application/JSON"));
        assert!(is_json_content_type("application/problem+json"));

        assert!(!is_json_content_type("text/plain"));
        assert!(!is_json_content_type("application/x-www-form-urlencoded"));
        assert!(!is_json_content_type(""));
    }
}
