//! Request extractors whose rejections render as [`ApiError::Validation`].

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header, request::Parts},
    Json,
};
use serde::de::DeserializeOwned;

use crate::ApiError;

/// The integer primary key taken from the single path segment of a
/// `/{collection}/{id}` route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub i32);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(id) = Path::<i32>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(id))
    }
}

/// An entity's field set, read from a JSON body when the request declares
/// `Content-Type: application/json`, otherwise from the query string.
#[derive(Debug, Clone)]
pub struct Fields<T>(pub T);

impl<S, T> FromRequest<S> for Fields<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_json(&req) {
            let Json(fields) = Json::<T>::from_request(req, state)
                .await
                .map_err(|e| ApiError::Validation(e.body_text()))?;
            return Ok(Self(fields));
        }

        let Query(fields) = Query::<T>::try_from_uri(req.uri())
            .map_err(|e| ApiError::Validation(e.body_text()))?;
        Ok(Self(fields))
    }
}

/// `application/json` or any `application/*+json`, ignoring case and
/// parameters.
fn is_json(req: &Request) -> bool {
    let Some(content_type) = req
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
    else {
        return false;
    };

    let essence = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    match essence.split_once('/') {
        Some(("application", subtype)) => subtype == "json" || subtype.ends_with("+json"),
        _ => false,
    }
}
