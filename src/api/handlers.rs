//! HTTP request handlers for the stay engine API.
//!
//! Each handler plays the part of one booking flow and calls into
//! [`crate::calculation`] for every availability verdict and price, so the
//! numbers a guest sees in search are the numbers a booking is stored with.

use axum::{
    Json, Router,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_stay_price, check_availability, filter_available_rooms};
use crate::error::{EngineError, EngineResult};
use crate::models::Room;

use super::request::{
    AvailabilityRequest, CreateBookingRequest, QuoteRequest, SearchRequest, StatusChangeRequest,
    UpdateBookingRequest,
};
use super::response::{
    ApiError, ApiErrorResponse, AvailabilityResponse, BookingResponse, QuoteResponse, RoomQuote,
    SearchResponse,
};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/rooms", get(list_rooms_handler))
        .route("/search", post(search_handler))
        .route("/quote", post(quote_handler))
        .route("/availability", post(availability_handler))
        .route("/bookings", post(create_booking_handler))
        .route(
            "/bookings/:id",
            get(get_booking_handler).put(update_booking_handler),
        )
        .route("/bookings/:id/status", post(change_status_handler))
        .with_state(state)
}

/// Serializes `body` as a JSON response with `status`.
fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (
        status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

/// Logs an engine error and converts it into a JSON error response.
fn error_response(correlation_id: Uuid, err: EngineError) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Request failed"
    );
    ApiErrorResponse::from(err).into_response()
}

/// Unwraps a JSON body, or builds the 400 response for a rejected one.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    let rejection = match payload {
        Ok(Json(req)) => return Ok(req),
        Err(rejection) => rejection,
    };

    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    Err(json_response(StatusCode::BAD_REQUEST, error))
}

/// Handler for GET /health.
async fn health_handler() -> impl IntoResponse {
    json_response(StatusCode::OK, serde_json::json!({ "status": "ok" }))
}

/// Handler for GET /rooms.
async fn list_rooms_handler(State(state): State<AppState>) -> Response {
    json_response(StatusCode::OK, state.config().rooms())
}

/// Handler for POST /search.
///
/// Filters the catalogue to rooms that fit the party and are free for the
/// stay, then prices each one. No free rooms is a successful empty result.
async fn search_handler(
    State(state): State<AppState>,
    payload: Result<Json<SearchRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing search request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match search(&state, &request).await {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                check_in = %request.check_in,
                check_out = %request.check_out,
                guests = request.guests,
                rooms_found = response.rooms.len(),
                "Search completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

async fn search(state: &AppState, request: &SearchRequest) -> EngineResult<SearchResponse> {
    let config = state.config();
    let stay = request.stay()?;
    stay.ensure_max_nights(config.max_stay_nights())?;
    if request.guests < 1 {
        return Err(EngineError::InvalidGuestCount {
            guest_count: request.guests,
            message: "at least one guest is required".to_string(),
        });
    }

    let bookings = state.store().bookings().await;
    let free: Vec<&Room> = filter_available_rooms(
        config.rooms(),
        &stay,
        &bookings,
        Some(request.guests),
        config.overlap_policy(),
    );

    let rooms = free
        .into_iter()
        .map(|room| {
            let price = calculate_stay_price(room, &stay, request.guests, config.pricing())?;
            Ok(RoomQuote {
                room: room.clone(),
                price,
            })
        })
        .collect::<EngineResult<Vec<_>>>()?;

    Ok(SearchResponse {
        check_in: stay.check_in(),
        check_out: stay.check_out(),
        guests: request.guests,
        currency: config.currency().to_string(),
        rooms,
    })
}

/// Handler for POST /quote.
async fn quote_handler(
    State(state): State<AppState>,
    payload: Result<Json<QuoteRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing quote request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match quote(&state, &request) {
        Ok(response) => {
            info!(
                correlation_id = %correlation_id,
                room_id = %response.room_id,
                total = %response.price.total,
                "Quote completed"
            );
            json_response(StatusCode::OK, response)
        }
        Err(err) => error_response(correlation_id, err),
    }
}

fn quote(state: &AppState, request: &QuoteRequest) -> EngineResult<QuoteResponse> {
    let config = state.config();
    let stay = request.stay()?;
    stay.ensure_max_nights(config.max_stay_nights())?;
    let room = config.get_room(&request.room_id)?;
    let price = calculate_stay_price(room, &stay, request.guests, config.pricing())?;
    Ok(QuoteResponse {
        room_id: room.id.clone(),
        currency: config.currency().to_string(),
        price,
    })
}

/// Handler for POST /availability.
async fn availability_handler(
    State(state): State<AppState>,
    payload: Result<Json<AvailabilityRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing availability request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let config = state.config();
    let stay = match request.stay() {
        Ok(stay) => stay,
        Err(err) => return error_response(correlation_id, err),
    };
    if let Err(err) = stay.ensure_max_nights(config.max_stay_nights()) {
        return error_response(correlation_id, err);
    }
    if let Err(err) = config.get_room(&request.room_id) {
        return error_response(correlation_id, err);
    }

    let bookings = state.store().bookings().await;
    let result = check_availability(
        &request.room_id,
        &stay,
        &bookings,
        request.exclude_booking_id.as_deref(),
        config.overlap_policy(),
        1,
    );

    info!(
        correlation_id = %correlation_id,
        room_id = %request.room_id,
        available = result.available,
        "Availability check completed"
    );

    json_response(
        StatusCode::OK,
        AvailabilityResponse {
            room_id: request.room_id,
            available: result.available,
            conflicting_booking_ids: result.conflicting_booking_ids,
            audit_step: result.audit_step,
        },
    )
}

/// Handler for POST /bookings.
async fn create_booking_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateBookingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing booking request");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    let new_booking = match request.into_new_booking() {
        Ok(booking) => booking,
        Err(err) => return error_response(correlation_id, err),
    };

    match state
        .store()
        .create(new_booking, state.config(), state.today())
        .await
    {
        Ok((record, price)) => {
            info!(
                correlation_id = %correlation_id,
                booking_id = %record.booking.id,
                "Booking request completed"
            );
            json_response(
                StatusCode::CREATED,
                BookingResponse {
                    booking: record,
                    price: Some(price),
                },
            )
        }
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for GET /bookings/:id.
async fn get_booking_handler(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let correlation_id = Uuid::new_v4();
    match state.store().get(&id).await {
        Ok(record) => json_response(
            StatusCode::OK,
            BookingResponse {
                booking: record,
                price: None,
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for PUT /bookings/:id.
///
/// Re-checks availability (ignoring the booking itself) and re-prices before
/// accepting the change.
async fn update_booking_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateBookingRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, booking_id = %id, "Processing booking update");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match state
        .store()
        .update(&id, request.into(), state.config(), state.today())
        .await
    {
        Ok((record, price)) => json_response(
            StatusCode::OK,
            BookingResponse {
                booking: record,
                price: Some(price),
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}

/// Handler for POST /bookings/:id/status.
async fn change_status_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<StatusChangeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, booking_id = %id, "Processing status change");

    let request = match parse_json(correlation_id, payload) {
        Ok(req) => req,
        Err(response) => return response,
    };

    match state.store().transition(&id, request.status).await {
        Ok(record) => json_response(
            StatusCode::OK,
            BookingResponse {
                booking: record,
                price: None,
            },
        ),
        Err(err) => error_response(correlation_id, err),
    }
}
