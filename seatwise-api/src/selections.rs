use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::info;
use seatwise_catalog::Seat;
use seatwise_core::{PendingConfirmation, SeatSelection, SeatSelectionSession};
use seatwise_shared::models::events::SeatMapEvent;
use crate::error::AppError;
use crate::state::AppState;

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct SelectSeatRequest {
    pub passenger_id: String,
    pub seat_id: String,
}

#[derive(Debug, Serialize)]
pub struct SelectSeatResponse {
    pub passenger_id: String,
    pub seat: Seat,
    pub released_seat_id: Option<String>,
    pub total_price_nuc: i32,
}

#[derive(Debug, Serialize)]
pub struct ReleasedSeatsResponse {
    pub released_seat_ids: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct ConfirmRequest {
    pub passenger_id: String,
    pub passenger_name: String,
}

/// Derived view of the session, recomputed on every read
#[derive(Debug, Serialize)]
pub struct SessionSummary {
    pub seat_map_id: Option<String>,
    pub currency: Option<String>,
    pub selections: BTreeMap<String, String>,
    pub total_price_nuc: i32,
    pub error: Option<String>,
    pub loading: bool,
    pub confirmed_count: usize,
}

// ============================================================================
// Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/v1/session/selections", post(select_seat).delete(clear_selections))
        .route(
            "/v1/session/selections/{passenger_id}",
            get(passenger_seat).delete(deselect_seat),
        )
        .route("/v1/session/summary", get(summary))
        .route("/v1/session/confirm", post(confirm_selection))
        .route("/v1/session/history", get(history))
}

fn active_seat_map_id(session: &SeatSelectionSession) -> String {
    session.active_seat_map().map(|m| m.id.clone()).unwrap_or_default()
}

/// POST /v1/session/selections
async fn select_seat(
    State(state): State<AppState>,
    Json(req): Json<SelectSeatRequest>,
) -> Result<Json<SelectSeatResponse>, AppError> {
    let (response, seat_map_id) = {
        let mut session = state.session.lock().await;
        let released_seat_id = session.select_seat(&req.passenger_id, &req.seat_id)?;
        let seat = session
            .passenger_seat(&req.passenger_id)
            .cloned()
            .ok_or_else(|| AppError::InternalServerError("selected seat missing".to_string()))?;
        let response = SelectSeatResponse {
            passenger_id: req.passenger_id.clone(),
            seat,
            released_seat_id,
            total_price_nuc: session.total_price_nuc(),
        };
        (response, active_seat_map_id(&session))
    };

    state.events.publish(SeatMapEvent::SeatSelected {
        seat_map_id,
        passenger_id: req.passenger_id,
        seat_id: req.seat_id,
        released_seat_id: response.released_seat_id.clone(),
        timestamp: SeatMapEvent::now(),
    });

    Ok(Json(response))
}

/// GET /v1/session/selections/{passenger_id}
async fn passenger_seat(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Result<Json<Seat>, AppError> {
    let session = state.session.lock().await;
    let seat = session
        .passenger_seat(&passenger_id)
        .cloned()
        .ok_or_else(|| AppError::NotFoundError(format!("Passenger {} has no seat selected", passenger_id)))?;
    Ok(Json(seat))
}

/// DELETE /v1/session/selections/{passenger_id}
/// Releasing a passenger without a seat succeeds with nothing released
async fn deselect_seat(
    State(state): State<AppState>,
    Path(passenger_id): Path<String>,
) -> Json<ReleasedSeatsResponse> {
    let (released, seat_map_id) = {
        let mut session = state.session.lock().await;
        (session.deselect_seat(&passenger_id), active_seat_map_id(&session))
    };

    if let Some(seat_id) = &released {
        state.events.publish(SeatMapEvent::SeatReleased {
            seat_map_id,
            passenger_id,
            seat_id: seat_id.clone(),
            timestamp: SeatMapEvent::now(),
        });
    }

    Json(ReleasedSeatsResponse { released_seat_ids: released.into_iter().collect() })
}

/// DELETE /v1/session/selections
async fn clear_selections(State(state): State<AppState>) -> Json<ReleasedSeatsResponse> {
    let (released, seat_map_id) = {
        let mut session = state.session.lock().await;
        (session.clear_all_selections(), active_seat_map_id(&session))
    };

    state.events.publish(SeatMapEvent::SelectionsCleared {
        seat_map_id,
        released_seat_ids: released.clone(),
        timestamp: SeatMapEvent::now(),
    });

    Json(ReleasedSeatsResponse { released_seat_ids: released })
}

/// GET /v1/session/summary
async fn summary(State(state): State<AppState>) -> Json<SessionSummary> {
    let session = state.session.lock().await;
    let seat_map = session.active_seat_map();

    let summary = SessionSummary {
        seat_map_id: seat_map.map(|m| m.id.clone()),
        currency: seat_map.map(|m| m.currency.clone()),
        selections: session.selections().clone(),
        total_price_nuc: session.total_price_nuc(),
        error: session.error().map(str::to_string),
        loading: session.is_loading(),
        confirmed_count: session.history().len(),
    };
    Json(summary)
}

/// POST /v1/session/confirm
/// The session lock is released while the gateway call is in flight, so the
/// loading flag is visible to other requests. The gateway call and its
/// completion run on their own task and finish even if the client goes away.
async fn confirm_selection(
    State(state): State<AppState>,
    Json(req): Json<ConfirmRequest>,
) -> Result<Json<SeatSelection>, AppError> {
    let pending = {
        let mut session = state.session.lock().await;
        session.begin_confirmation(&req.passenger_id, &req.passenger_name)?
    };

    let task = tokio::spawn(complete_confirmation(state, pending));
    let record = task
        .await
        .map_err(|e| AppError::InternalServerError(format!("confirmation task failed: {}", e)))??;

    Ok(Json(record))
}

async fn complete_confirmation(state: AppState, pending: PendingConfirmation) -> Result<SeatSelection, AppError> {
    let outcome = state.gateway.confirm(&pending).await;

    let record = {
        let mut session = state.session.lock().await;
        session.finish_confirmation(pending, outcome)?
    };

    info!("Seat {} confirmed on {}", record.seat_number, record.flight_id);
    state.events.publish(SeatMapEvent::SelectionConfirmed {
        selection_id: record.id.to_string(),
        flight_id: record.flight_id.clone(),
        seat_number: record.seat_number.clone(),
        price_nuc: record.price_nuc,
        timestamp: record.confirmed_at.timestamp(),
    });

    Ok(record)
}

/// GET /v1/session/history
async fn history(State(state): State<AppState>) -> Json<Vec<SeatSelection>> {
    let session = state.session.lock().await;
    Json(session.history().to_vec())
}
