pub mod cafes;
pub mod reservations;
pub mod users;

use crate::AppState;
use axum::Router;

// everything served under /api
pub fn api_router() -> Router<AppState> {
    Router::new()
        .nest("/cafes", cafes::cafes_router())
        .nest("/reservations", reservations::reservations_router())
}
