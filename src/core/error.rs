use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::shared::constants::{
    MSG_INTERNAL_ERROR, MSG_RESOURCE_NOT_FOUND, MSG_ROUTE_NOT_FOUND,
};
use crate::shared::types::ApiErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A path or query parameter failed its format/range constraint.
    /// The message is sent to the client as-is.
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// The detail is for logs only, clients get a generic message
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Route not found")]
    RouteNotFound,

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) | AppError::RouteNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error: {:?}", e);
                MSG_INTERNAL_ERROR.to_string()
            }
            AppError::InvalidParameter(msg) => msg,
            AppError::NotFound(ref detail) => {
                tracing::debug!("Not found: {}", detail);
                MSG_RESOURCE_NOT_FOUND.to_string()
            }
            AppError::RouteNotFound => MSG_ROUTE_NOT_FOUND.to_string(),
            AppError::Internal(ref msg) => {
                tracing::error!("Internal error: {}", msg);
                MSG_INTERNAL_ERROR.to_string()
            }
        };

        let body = Json(ApiErrorResponse::new(message, None));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

/// Router fallback for unknown paths
pub async fn route_not_found() -> AppError {
    AppError::RouteNotFound
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    async fn body_json(error: AppError) -> (StatusCode, serde_json::Value) {
        let response = error.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn test_invalid_parameter_keeps_its_message() {
        let (status, body) = body_json(AppError::InvalidParameter(
            "Le paramètre 'id' doit être un entier positif.".to_string(),
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["success"], false);
        assert_eq!(
            body["message"],
            "Le paramètre 'id' doit être un entier positif."
        );
        assert!(body["errors"].is_null());
    }

    #[tokio::test]
    async fn test_not_found_hides_lookup_detail() {
        let (status, body) =
            body_json(AppError::NotFound("Commune 42 not found".to_string())).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], MSG_RESOURCE_NOT_FOUND);
        assert!(!body.to_string().contains("42"));
    }

    #[tokio::test]
    async fn test_internal_errors_are_generic() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::PoolTimedOut)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body["message"], MSG_INTERNAL_ERROR);
        assert!(body.get("data").is_none());
    }
}
