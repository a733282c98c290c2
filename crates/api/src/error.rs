//! API error types with HTTP response mapping.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use domain::PurchaseRejected;
use purchase::{PaymentError, PurchaseError, ReservationError};

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// The purchase failed, either validation or a collaborator.
    Purchase(PurchaseError),
    /// The request body was not valid JSON for the endpoint.
    InvalidBody(JsonRejection),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::Purchase(err) => purchase_error_to_response(err),
            ApiError::InvalidBody(rejection) => {
                (rejection.status(), "INVALID_REQUEST", rejection.body_text())
            }
        };

        let body = serde_json::json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

fn purchase_error_to_response(err: PurchaseError) -> (StatusCode, &'static str, String) {
    match &err {
        PurchaseError::Rejected(rejection) => (
            StatusCode::UNPROCESSABLE_ENTITY,
            rejection.code(),
            err.to_string(),
        ),
        PurchaseError::Payment(payment_err) => {
            let status = match payment_err {
                PaymentError::Declined { .. } => StatusCode::PAYMENT_REQUIRED,
                PaymentError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            };
            (status, "PAYMENT_FAILED", err.to_string())
        }
        PurchaseError::Reservation(reservation_err) => {
            let status = match reservation_err {
                ReservationError::SeatsUnavailable { .. } => StatusCode::CONFLICT,
                ReservationError::Unavailable(_) => StatusCode::BAD_GATEWAY,
            };
            tracing::error!(error = %err, "purchase charged but seats not reserved");
            (status, "RESERVATION_FAILED", err.to_string())
        }
    }
}

impl From<PurchaseError> for ApiError {
    fn from(err: PurchaseError) -> Self {
        ApiError::Purchase(err)
    }
}

impl From<PurchaseRejected> for ApiError {
    fn from(err: PurchaseRejected) -> Self {
        ApiError::Purchase(PurchaseError::Rejected(err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidBody(rejection)
    }
}
