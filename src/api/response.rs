//! Response types for the stay engine API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`EngineError`] to HTTP status codes.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::models::{AuditStep, PriceBreakdown, Room};
use crate::store::BookingRecord;

/// A room offered by search, with its price for the requested stay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomQuote {
    /// The room.
    pub room: Room,
    /// The price of the requested stay in this room.
    pub price: PriceBreakdown,
}

/// Response body for `POST /search`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// First night searched.
    pub check_in: NaiveDate,
    /// Departure day searched.
    pub check_out: NaiveDate,
    /// Party size searched for.
    pub guests: u32,
    /// Currency of every price in the response.
    pub currency: String,
    /// Free rooms in catalogue order. Empty when nothing is free.
    pub rooms: Vec<RoomQuote>,
}

/// Response body for `POST /quote`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuoteResponse {
    /// The priced room.
    pub room_id: String,
    /// Currency of the price.
    pub currency: String,
    /// The price breakdown.
    pub price: PriceBreakdown,
}

/// Response body for `POST /availability`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    /// The checked room.
    pub room_id: String,
    /// Whether the room is free.
    pub available: bool,
    /// Bookings that overlap the requested stay.
    pub conflicting_booking_ids: Vec<String>,
    /// How the verdict was reached.
    pub audit_step: AuditStep,
}

/// Response body for booking endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingResponse {
    /// The stored booking.
    pub booking: BookingRecord,
    /// Price breakdown, present when the booking was just priced.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<PriceBreakdown>,
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                ApiErrorResponse {
                    status: StatusCode::INTERNAL_SERVER_ERROR,
                    error: ApiError::with_details("CONFIG_ERROR", "Configuration error", message),
                }
            }
            EngineError::InvalidRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::with_details(
                    "INVALID_RANGE",
                    message,
                    "Stays must be at least one night long",
                ),
            },
            EngineError::StayTooLong { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("STAY_TOO_LONG", message),
            },
            EngineError::InvalidGuestCount { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_GUEST_COUNT", message),
            },
            EngineError::DateInPast { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DATE_IN_PAST", message),
            },
            EngineError::RoomNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("ROOM_NOT_FOUND", message),
            },
            EngineError::BookingNotFound { .. } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("BOOKING_NOT_FOUND", message),
            },
            EngineError::MissingPriceData { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::with_details(
                    "MISSING_PRICE_DATA",
                    message,
                    "The room record is incomplete and cannot be priced",
                ),
            },
            EngineError::InvalidPrice { .. } => ApiErrorResponse {
                status: StatusCode::UNPROCESSABLE_ENTITY,
                error: ApiError::new("INVALID_PRICE", message),
            },
            EngineError::RoomUnavailable {
                conflicting_booking_ids,
                ..
            } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::with_details(
                    "ROOM_UNAVAILABLE",
                    message,
                    format!("Conflicts with: {}", conflicting_booking_ids.join(", ")),
                ),
            },
            EngineError::InvalidStatusTransition { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("INVALID_STATUS_TRANSITION", message),
            },
            EngineError::BookingNotEditable { .. } => ApiErrorResponse {
                status: StatusCode::CONFLICT,
                error: ApiError::new("BOOKING_NOT_EDITABLE", message),
            },
        }
    }
}
