use axum::{
    body::Bytes,
    extract::State,
    http::StatusCode,
    routing::{post, MethodRouter},
    Json, Router,
};

use crate::error::{AppError, Result};
use crate::models::{RelayRequest, RelayResponse};
use crate::state::AppState;

/// Relay routes. `/api/welcome` is the path the club site already calls.
pub fn relay_routes() -> Router<AppState> {
    Router::new()
        .route("/", relay_method_router())
        .route("/api/welcome", relay_method_router())
}

fn relay_method_router() -> MethodRouter<AppState> {
    post(send_email).options(preflight).fallback(method_not_allowed)
}

/// OPTIONS - CORS preflight, headers are added by the CORS middleware
async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// POST - Relay one email
///
/// The body is decoded by hand so a bad payload maps to our own 400 and the
/// `Content-Type` header is not enforced.
#[axum::debug_handler]
async fn send_email(State(state): State<AppState>, body: Bytes) -> Result<Json<RelayResponse>> {
    let request: RelayRequest = serde_json::from_slice(&body)?;
    let response = state.relay.relay(request).await?;
    Ok(Json(response))
}

async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
