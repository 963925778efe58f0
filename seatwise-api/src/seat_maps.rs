use axum::{
    extract::{Path, State},
    routing::{get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use seatwise_catalog::{Seat, SeatMap, SeatMapSummary, SeatStatus};
use seatwise_core::{SeatFilter, SeatPreferences};
use seatwise_shared::models::events::SeatMapEvent;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct ActivateSeatMapRequest {
    pub seat_map_id: String,
}

#[derive(Debug, Serialize)]
pub struct SeatMapResponse {
    pub seat_map: SeatMap,
    pub status_counts: BTreeMap<SeatStatus, usize>,
}

impl From<&SeatMap> for SeatMapResponse {
    fn from(seat_map: &SeatMap) -> Self {
        Self {
            status_counts: seat_map.status_counts(),
            seat_map: seat_map.clone(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    #[serde(flatten)]
    pub preferences: SeatPreferences,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendedSeat {
    pub seat: Seat,
    pub score: f64,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/seat-maps", get(list_seat_maps))
        .route("/v1/session/seat-map", get(get_active_seat_map).put(activate_seat_map))
        .route("/v1/session/seats", get(filtered_seats))
        .route("/v1/session/seats/{row}/{column}", get(seat_at))
        .route("/v1/session/filter", put(set_filter).get(get_filter).delete(reset_filter))
        .route("/v1/session/recommendations", post(recommendations))
}

/// GET /v1/seat-maps
async fn list_seat_maps(State(state): State<AppState>) -> Result<Json<Vec<SeatMapSummary>>, AppError> {
    Ok(Json(state.seat_maps.list_seat_maps().await?))
}

/// PUT /v1/session/seat-map
/// Switches the session to another seat map, dropping every selection
async fn activate_seat_map(
    State(state): State<AppState>,
    Json(req): Json<ActivateSeatMapRequest>,
) -> Result<Json<SeatMapResponse>, AppError> {
    let seat_map = state
        .seat_maps
        .get_seat_map(&req.seat_map_id)
        .await?
        .ok_or_else(|| AppError::NotFoundError(format!("Seat map not found: {}", req.seat_map_id)))?;

    let event = SeatMapEvent::SeatMapActivated {
        seat_map_id: seat_map.id.clone(),
        flight_id: seat_map.flight_id.clone(),
        timestamp: SeatMapEvent::now(),
    };

    let response = {
        let mut session = state.session.lock().await;
        session.set_active_seat_map(seat_map);
        let response = session.active_seat_map().map(SeatMapResponse::from);
        response.ok_or_else(|| AppError::InternalServerError("seat map activation lost".to_string()))?
    };

    info!("Seat map {} activated", req.seat_map_id);
    state.events.publish(event);
    Ok(Json(response))
}

/// GET /v1/session/seat-map
async fn get_active_seat_map(State(state): State<AppState>) -> Result<Json<SeatMapResponse>, AppError> {
    let session = state.session.lock().await;
    let seat_map = session
        .active_seat_map()
        .ok_or_else(|| AppError::from(seatwise_core::CoreError::NoActiveSeatMap))?;
    Ok(Json(SeatMapResponse::from(seat_map)))
}

/// GET /v1/session/seats
/// Seats passing the session filter
async fn filtered_seats(State(state): State<AppState>) -> Json<Vec<Seat>> {
    let session = state.session.lock().await;
    let seats: Vec<Seat> = session.filtered_seats().into_iter().cloned().collect();
    Json(seats)
}

/// GET /v1/session/seats/{row}/{column}
async fn seat_at(
    State(state): State<AppState>,
    Path((row, column)): Path<(u32, String)>,
) -> Result<Json<Seat>, AppError> {
    let mut chars = column.chars();
    let letter = match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_ascii_alphabetic() => c,
        _ => return Err(AppError::ValidationError(format!("Invalid seat column: {}", column))),
    };

    let session = state.session.lock().await;
    let seat = session
        .seat_at(row, letter)
        .cloned()
        .ok_or_else(|| AppError::NotFoundError(format!("No seat at {}{}", row, letter)))?;
    Ok(Json(seat))
}

/// GET /v1/session/filter
async fn get_filter(State(state): State<AppState>) -> Json<SeatFilter> {
    let session = state.session.lock().await;
    Json(session.filter().clone())
}

/// PUT /v1/session/filter
/// Fields left out of the body keep their permissive defaults
async fn set_filter(State(state): State<AppState>, Json(filter): Json<SeatFilter>) -> Json<Vec<Seat>> {
    let mut session = state.session.lock().await;
    session.set_filter(filter);
    let seats: Vec<Seat> = session.filtered_seats().into_iter().cloned().collect();
    Json(seats)
}

/// DELETE /v1/session/filter
async fn reset_filter(State(state): State<AppState>) -> Json<SeatFilter> {
    let mut session = state.session.lock().await;
    session.reset_filter();
    Json(session.filter().clone())
}

/// POST /v1/session/recommendations
async fn recommendations(
    State(state): State<AppState>,
    Json(req): Json<RecommendationRequest>,
) -> Json<Vec<RecommendedSeat>> {
    let limit = req.limit.unwrap_or(state.recommendation.limit);
    let session = state.session.lock().await;

    let ranked: Vec<RecommendedSeat> = session
        .recommendations(&req.preferences, &state.recommendation.weights, limit)
        .into_iter()
        .map(|scored| RecommendedSeat { seat: scored.seat.clone(), score: scored.score })
        .collect();

    Json(ranked)
}
