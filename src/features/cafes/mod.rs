pub mod model;

use crate::AppState;
use crate::domain::Cafe;
use crate::error::ApiError;
use axum::{
    Json, Router,
    extract::{Path, State},
    routing::get,
};
use model::JsonCafe;

pub fn cafes_router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_cafes_handler))
        .route("/{id}", get(get_cafe_handler))
}

async fn list_cafes_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<JsonCafe>>, ApiError> {
    let cafes = state
        .cafes
        .get_all_cafes()
        .await
        .map_err(|e| ApiError::internal(&e, state.config.debug))?;

    Ok(Json(cafes.iter().map(JsonCafe::from).collect()))
}

// the id is taken as a string so that "/cafes/abc" is a 404 like any other unknown cafe
async fn get_cafe_handler(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<JsonCafe>, ApiError> {
    let id = parse_cafe_id(&raw_id).ok_or(ApiError::NotFound)?;

    let cafe_option: Option<Cafe> = state
        .cafes
        .get_cafe_by_id(id)
        .await
        .map_err(|e| ApiError::internal(&e, state.config.debug))?;

    match cafe_option {
        None => Err(ApiError::NotFound),
        Some(cafe) => Ok(Json(JsonCafe::from(&cafe))),
    }
}

// digits only: no sign, no whitespace
fn parse_cafe_id(raw_id: &str) -> Option<i64> {
    if raw_id.is_empty() || !raw_id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw_id.parse().ok()
}
