//! Service error types with HTTP status code mapping.
//!
//! [`BingoError`] is the error returned to join callers. Each variant maps
//! to a numeric code, a stable machine-readable reason and an HTTP status.
//! [`TransportError`] covers push-channel delivery failures and never
//! leaves the connection hub.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

/// Structured JSON error response body.
///
/// All error responses follow this shape:
/// ```json
/// {
///   "error": {
///     "code": 2002,
///     "reason": "CardTaken",
///     "message": "card 7 is already taken"
///   }
/// }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Structured error payload.
    pub error: ErrorBody,
}

/// Inner error body with numeric code, stable reason and message.
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorBody {
    /// Numeric error code (see code ranges on [`BingoError`]).
    pub code: u32,
    /// Stable reason string, safe to match on.
    pub reason: String,
    /// Human-readable error message.
    pub message: String,
}

/// Join-side error enum with HTTP status code mapping.
///
/// # Error Code Ranges
///
/// | Range     | Category   | HTTP Status               |
/// |-----------|------------|---------------------------|
/// | 1000–1999 | Validation | 400 Bad Request           |
/// | 2000–2099 | Conflict   | 409 Conflict              |
/// | 2100–2199 | State      | 409 Conflict              |
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BingoError {
    /// The join payload was malformed or failed validation.
    #[error("invalid request payload: {0}")]
    InvalidPayload(String),

    /// The identity is already registered in the current lobby.
    #[error("player {0} already joined")]
    AlreadyJoined(String),

    /// The card is held by a different player.
    #[error("card {0} is already taken")]
    CardTaken(u32),

    /// A round is running; the lobby is closed until it completes.
    #[error("round already started")]
    RoundInProgress,
}

impl BingoError {
    /// Returns the numeric error code for this variant.
    #[must_use]
    pub const fn error_code(&self) -> u32 {
        match self {
            Self::InvalidPayload(_) => 1001,
            Self::AlreadyJoined(_) => 2001,
            Self::CardTaken(_) => 2002,
            Self::RoundInProgress => 2101,
        }
    }

    /// Returns the stable reason string for this variant.
    #[must_use]
    pub const fn reason(&self) -> &'static str {
        match self {
            Self::InvalidPayload(_) => "InvalidPayload",
            Self::AlreadyJoined(_) => "AlreadyJoined",
            Self::CardTaken(_) => "CardTaken",
            Self::RoundInProgress => "RoundInProgress",
        }
    }

    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidPayload(_) => StatusCode::BAD_REQUEST,
            Self::AlreadyJoined(_) | Self::CardTaken(_) | Self::RoundInProgress => {
                StatusCode::CONFLICT
            }
        }
    }
}

impl IntoResponse for BingoError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.error_code(),
                reason: self.reason().to_string(),
                message: self.to_string(),
            },
        };
        let mut response = axum::Json(body).into_response();
        *response.status_mut() = status;
        response
    }
}

/// Delivery failure on a single push channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// The connection's write side has gone away.
    #[error("push channel closed")]
    Closed,

    /// The connection stopped draining its frame queue.
    #[error("push channel queue full")]
    Backlogged,
}
