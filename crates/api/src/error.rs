use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use persistence::StoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// Field-level validation failure with one detail per offending field.
    #[error("Validation error: {0}")]
    InvalidFields(String, Vec<ValidationDetail>),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<Vec<ValidationDetail>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationDetail {
    pub field: String,
    pub message: String,
}

impl ApiError {
    pub fn gift_not_found() -> Self {
        ApiError::NotFound("Gift not found".into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message, details) = match self {
            ApiError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "unauthorized", msg, None),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "not_found", msg, None),
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "validation_error", msg, None)
            }
            ApiError::InvalidFields(msg, details) => (
                StatusCode::BAD_REQUEST,
                "validation_error",
                msg,
                Some(details),
            ),
            ApiError::PayloadTooLarge(msg) => {
                (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large", msg, None)
            }
            ApiError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal_error",
                    "An internal error occurred".into(),
                    None,
                )
            }
            ApiError::ServiceUnavailable(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "service_unavailable",
                msg,
                None,
            ),
        };

        let body = ErrorBody {
            error: error_code.into(),
            message,
            details,
        };

        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::GiftNotFound(_) => ApiError::gift_not_found(),
            StoreError::InsufficientAvailability(e) => ApiError::Validation(e.to_string()),
            StoreError::LockPoisoned => ApiError::Internal("Store lock poisoned".into()),
        }
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut details: Vec<ValidationDetail> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                let field = camel_case(field);
                errors.iter().map(move |e| ValidationDetail {
                    field: field.clone(),
                    message: e
                        .message
                        .clone()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("Invalid value ({})", e.code)),
                })
            })
            .collect();
        // field_errors() is a HashMap
        details.sort_by(|a, b| a.field.cmp(&b.field));

        let message = if details.len() == 1 {
            details[0].message.clone()
        } else {
            format!("{} validation errors", details.len())
        };

        ApiError::InvalidFields(message, details)
    }
}

/// Request bodies use camelCase; validator reports Rust field names.
fn camel_case(field: &str) -> String {
    let mut out = String::with_capacity(field.len());
    let mut upper = false;
    for c in field.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.extend(c.to_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use domain::services::InsufficientAvailability;
    use uuid::Uuid;
    use validator::ValidationError;

    #[test]
    fn test_api_error_unauthorized() {
        let error = ApiError::Unauthorized("test message".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_api_error_not_found() {
        let response = ApiError::gift_not_found().into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_api_error_validation() {
        let error = ApiError::Validation("invalid input".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_invalid_fields() {
        let error = ApiError::InvalidFields("bad".to_string(), vec![]);
        assert_eq!(error.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_api_error_payload_too_large() {
        let error = ApiError::PayloadTooLarge("too big".to_string());
        assert_eq!(error.into_response().status(), StatusCode::PAYLOAD_TOO_LARGE);
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("lock poisoned".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_api_error_service_unavailable() {
        let error = ApiError::ServiceUnavailable("store unavailable".to_string());
        let response = error.into_response();
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_api_error_display() {
        assert_eq!(
            format!("{}", ApiError::Unauthorized("test".to_string())),
            "Unauthorized: test"
        );
        assert_eq!(
            format!("{}", ApiError::NotFound("test".to_string())),
            "Not found: test"
        );
        assert_eq!(
            format!("{}", ApiError::Validation("test".to_string())),
            "Validation error: test"
        );
        assert_eq!(
            format!("{}", ApiError::Internal("test".to_string())),
            "Internal error: test"
        );
    }

    #[test]
    fn test_from_store_gift_not_found() {
        let error: ApiError = StoreError::GiftNotFound(Uuid::new_v4()).into();
        match error {
            ApiError::NotFound(msg) => assert_eq!(msg, "Gift not found"),
            other => panic!("Expected NotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_store_insufficient_availability() {
        let error: ApiError = StoreError::InsufficientAvailability(InsufficientAvailability {
            requested: 1,
            available: 0,
        })
        .into();
        match error {
            ApiError::Validation(msg) => {
                assert_eq!(msg, "Only 0 units available for reservation")
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_from_store_lock_poisoned() {
        let error: ApiError = StoreError::LockPoisoned.into();
        assert!(matches!(error, ApiError::Internal(_)));
    }

    #[test]
    fn test_from_validation_errors_uses_camel_case_fields() {
        let mut errors = validator::ValidationErrors::new();
        let mut err = ValidationError::new("blank");
        err.message = Some("Value cannot be blank".into());
        errors.add("reserved_by", err);

        match ApiError::from(errors) {
            ApiError::InvalidFields(message, details) => {
                assert_eq!(message, "Value cannot be blank");
                assert_eq!(
                    details,
                    vec![ValidationDetail {
                        field: "reservedBy".to_string(),
                        message: "Value cannot be blank".to_string(),
                    }]
                );
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_from_validation_errors_counts_multiple() {
        let mut errors = validator::ValidationErrors::new();
        errors.add("name", ValidationError::new("blank"));
        errors.add("quantity", ValidationError::new("range"));

        match ApiError::from(errors) {
            ApiError::InvalidFields(message, details) => {
                assert_eq!(message, "2 validation errors");
                assert_eq!(details[0].field, "name");
                assert_eq!(details[1].message, "Invalid value (range)");
            }
            other => panic!("Expected InvalidFields, got {:?}", other),
        }
    }

    #[test]
    fn test_camel_case() {
        assert_eq!(camel_case("gift_id"), "giftId");
        assert_eq!(camel_case("name"), "name");
    }
}
