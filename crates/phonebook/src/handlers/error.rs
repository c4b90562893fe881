use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use phonebook_core::service::{service_error_to_status_code, ServiceError};

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    pub message: String,
    pub request_id: Uuid,
}

/// Error response for the HTTP boundary.
///
/// Each error gets a fresh request ID so a log line can be matched to the
/// response the client saw.
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    body: ErrorBody,
}

impl AppError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                errors: None,
                message: message.into(),
                request_id: Uuid::new_v4(),
            },
        }
    }

    /// A 400 listing every invalid input.
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            body: ErrorBody {
                errors: Some(errors),
                message: "Validation errors found.".to_string(),
                request_id: Uuid::new_v4(),
            },
        }
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let status = StatusCode::from_u16(service_error_to_status_code(&err))
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        Self::new(status, err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let request_id = self.body.request_id;
        let message = &self.body.message;

        if self.status.is_server_error() {
            tracing::error!(status = %self.status, %request_id, message = %message, "Request failed");
        } else {
            tracing::warn!(status = %self.status, %request_id, message = %message, "Request rejected");
        }

        (self.status, Json(self.body)).into_response()
    }
}
