use axum::{
    extract::{
        path::ErrorKind,
        rejection::{PathRejection, QueryRejection},
        FromRequestParts, Path, Query,
    },
    http::request::Parts,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;

use crate::core::error::AppError;
use crate::shared::constants::{MSG_INVALID_PATH, MSG_INVALID_QUERY};

/// Query-string extractor whose rejections use the error envelope
pub struct AppQuery<T>(pub T);

impl<T, S> FromRequestParts<S> for AppQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppQueryRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Query::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppQueryRejection(rejection)),
        }
    }
}

pub struct AppQueryRejection(QueryRejection);

impl IntoResponse for AppQueryRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected query string: {}", self.0.body_text());
        AppError::InvalidParameter(MSG_INVALID_QUERY.to_string()).into_response()
    }
}

/// Path extractor whose rejections use the error envelope
pub struct AppPath<T>(pub T);

impl<T, S> FromRequestParts<S> for AppPath<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppPathRejection;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<T>::from_request_parts(parts, state).await {
            Ok(value) => Ok(Self(value.0)),
            Err(rejection) => Err(AppPathRejection(rejection)),
        }
    }
}

pub struct AppPathRejection(PathRejection);

impl AppPathRejection {
    /// Client message naming the offending segment when axum reports one
    fn message(&self) -> String {
        let key = match &self.0 {
            PathRejection::FailedToDeserializePathParams(err) => match err.kind() {
                ErrorKind::InvalidUtf8InPathParam { key }
                | ErrorKind::ParseErrorAtKey { key, .. }
                | ErrorKind::DeserializeError { key, .. } => Some(key.as_str()),
                _ => None,
            },
            _ => None,
        };

        match key {
            Some(key) => format!("Le paramètre '{}' doit être un entier positif.", key),
            None => MSG_INVALID_PATH.to_string(),
        }
    }
}

impl IntoResponse for AppPathRejection {
    fn into_response(self) -> Response {
        tracing::debug!("Rejected path parameters: {}", self.0.body_text());
        AppError::InvalidParameter(self.message()).into_response()
    }
}
