use serde::{Deserialize, Serialize};

/// Change notifications emitted after a successful session command.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeatMapEvent {
    SeatMapActivated {
        seat_map_id: String,
        flight_id: String,
        timestamp: i64,
    },
    SeatSelected {
        seat_map_id: String,
        passenger_id: String,
        seat_id: String,
        /// Seat the passenger held before this selection, if any
        released_seat_id: Option<String>,
        timestamp: i64,
    },
    SeatReleased {
        seat_map_id: String,
        passenger_id: String,
        seat_id: String,
        timestamp: i64,
    },
    SelectionsCleared {
        seat_map_id: String,
        released_seat_ids: Vec<String>,
        timestamp: i64,
    },
    SelectionConfirmed {
        selection_id: String,
        flight_id: String,
        seat_number: String,
        price_nuc: Option<i32>,
        timestamp: i64,
    },
}

impl SeatMapEvent {
    /// Name used for the SSE `event:` field
    pub fn name(&self) -> &'static str {
        match self {
            SeatMapEvent::SeatMapActivated { .. } => "seat_map_activated",
            SeatMapEvent::SeatSelected { .. } => "seat_selected",
            SeatMapEvent::SeatReleased { .. } => "seat_released",
            SeatMapEvent::SelectionsCleared { .. } => "selections_cleared",
            SeatMapEvent::SelectionConfirmed { .. } => "selection_confirmed",
        }
    }

    pub fn now() -> i64 {
        chrono::Utc::now().timestamp()
    }
}
