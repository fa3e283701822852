//! HTTP error responses

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Errors surfaced to HTTP clients
#[derive(Debug, Error)]
pub enum ApiError {
    /// The requested category is not on the allow-list
    #[error("Invalid category. Allowed categories are: {allowed}")]
    InvalidCategory { allowed: String },

    /// A static page file could not be read
    #[error("Page not found")]
    PageNotFound,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::InvalidCategory { .. } => StatusCode::BAD_REQUEST,
            ApiError::PageNotFound => StatusCode::NOT_FOUND,
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_category_message_names_allowed_set() {
        let err = ApiError::InvalidCategory {
            allowed: "politics, tech".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("Invalid category"));
        assert!(message.contains("politics, tech"));
    }

    #[test]
    fn test_invalid_category_maps_to_400() {
        let response = ApiError::InvalidCategory {
            allowed: "politics".to_string(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_page_not_found_maps_to_404() {
        let response = ApiError::PageNotFound.into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
