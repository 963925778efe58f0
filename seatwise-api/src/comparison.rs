use axum::{
    extract::{Path, State},
    routing::{delete, get},
    Json, Router,
};
use serde::Deserialize;
use seatwise_core::SeatComparison;
use crate::error::AppError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AddToComparisonRequest {
    pub seat_id: String,
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/v1/session/comparison",
            get(get_comparison).post(add_to_comparison).delete(clear_comparison),
        )
        .route("/v1/session/comparison/{seat_id}", delete(remove_from_comparison))
}

/// GET /v1/session/comparison
async fn get_comparison(State(state): State<AppState>) -> Json<SeatComparison> {
    let session = state.session.lock().await;
    Json(session.comparison())
}

/// POST /v1/session/comparison
/// A fourth seat is refused and the set is left as it was
async fn add_to_comparison(
    State(state): State<AppState>,
    Json(req): Json<AddToComparisonRequest>,
) -> Result<Json<SeatComparison>, AppError> {
    let mut session = state.session.lock().await;
    session.add_to_comparison(&req.seat_id)?;
    Ok(Json(session.comparison()))
}

/// DELETE /v1/session/comparison/{seat_id}
async fn remove_from_comparison(
    State(state): State<AppState>,
    Path(seat_id): Path<String>,
) -> Result<Json<SeatComparison>, AppError> {
    let mut session = state.session.lock().await;
    if !session.remove_from_comparison(&seat_id) {
        return Err(AppError::NotFoundError(format!("Seat {} is not being compared", seat_id)));
    }
    Ok(Json(session.comparison()))
}

/// DELETE /v1/session/comparison
async fn clear_comparison(State(state): State<AppState>) -> Json<SeatComparison> {
    let mut session = state.session.lock().await;
    session.clear_comparison();
    Json(session.comparison())
}
