//! HTTP API module for the stay engine.
//!
//! This module provides the REST endpoints for searching free rooms,
//! quoting stays, checking availability and managing bookings.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{
    AvailabilityRequest, CreateBookingRequest, QuoteRequest, SearchRequest, StatusChangeRequest,
    UpdateBookingRequest,
};
pub use response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, BookingResponse, QuoteResponse, RoomQuote,
    SearchResponse,
};
pub use state::AppState;
