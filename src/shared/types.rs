use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::shared::constants::MSG_SUCCESS;

/// Success envelope: `{success: true, message, data}` plus `meta` on paginated listings
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<PaginationMeta>,
}

/// Error envelope: `{success: false, message, errors}`
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[schema(as = ErrorResponse)]
pub struct ApiErrorResponse {
    pub success: bool,
    pub message: String,
    pub errors: Option<Vec<String>>,
}

// =============================================================================
// PAGINATION
// =============================================================================

/// A validated page request (1-indexed)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub page: i64,
    pub limit: i64,
}

impl PageRequest {
    /// Calculate SQL OFFSET from page number
    pub fn offset(&self) -> i64 {
        (self.page.max(1) - 1).saturating_mul(self.limit)
    }
}

/// One slice of an ordered listing
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub request: PageRequest,
}

impl<T> Page<T> {
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            total: self.total,
            request: self.request,
        }
    }

    pub fn meta(&self) -> PaginationMeta {
        PaginationMeta::new(self.request, self.total)
    }
}

/// Pagination metadata for response
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct PaginationMeta {
    pub page: i64,
    pub limit: i64,
    pub total: i64,
    pub total_pages: i64,
}

impl PaginationMeta {
    pub fn new(request: PageRequest, total: i64) -> Self {
        let limit = request.limit.max(1);
        Self {
            page: request.page,
            limit,
            total,
            total_pages: (total + limit - 1) / limit,
        }
    }
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: MSG_SUCCESS.to_string(),
            data,
            meta: None,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_meta(mut self, meta: PaginationMeta) -> Self {
        self.meta = Some(meta);
        self
    }
}

impl ApiErrorResponse {
    pub fn new(message: impl Into<String>, errors: Option<Vec<String>>) -> Self {
        Self {
            success: false,
            message: message.into(),
            errors,
        }
    }
}
