pub mod model;

use crate::AppState;
use crate::domain::NewReservation;
use crate::error::ApiError;
use anyhow::Context;
use axum::{Json, Router, body::Bytes, extract::State, http::StatusCode, routing::post};
use model::{JsonMessage, RESERVATION_CREATED_MESSAGE, ReservationRequest};

pub fn reservations_router() -> Router<AppState> {
    Router::new().route("/", post(create_reservation_handler))
}

// the raw body is decoded by hand: a missing or malformed field is a 500 here, not the
// 400/415/422 the Json extractor would produce
async fn create_reservation_handler(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<JsonMessage>), ApiError> {
    let verbose = state.config.debug;

    let new_reservation =
        parse_reservation_body(&body).map_err(|e| ApiError::internal(&e, verbose))?;

    let id = state
        .reservations
        .create_reservation(&new_reservation)
        .await
        .map_err(|e| ApiError::internal(&e, verbose))?;

    tracing::info!(
        reservation_id = id,
        user_id = new_reservation.user_id,
        cafe_id = new_reservation.cafe_id,
        "reservation created"
    );

    Ok((
        StatusCode::CREATED,
        Json(JsonMessage {
            message: RESERVATION_CREATED_MESSAGE.to_string(),
        }),
    ))
}

pub fn parse_reservation_body(body: &[u8]) -> anyhow::Result<NewReservation> {
    let request: ReservationRequest =
        serde_json::from_slice(body).context("Malformed reservation request body")?;

    request.try_into()
}
