pub mod filter;
pub mod selection;
pub mod recommend;
pub mod compare;
pub mod confirm;

#[cfg(test)]
pub(crate) mod testing;

use seatwise_catalog::SeatStatus;

pub use filter::{filter_seats, SeatFilter};
pub use selection::SeatSelectionSession;
pub use recommend::{recommend, ScoredSeat, ScoringWeights, SeatPreferences, DEFAULT_RECOMMENDATION_LIMIT};
pub use compare::{compare, ComparisonSet, SeatComparison, MAX_COMPARISON_SEATS};
pub use confirm::{ConfirmationGateway, PendingConfirmation, SeatSelection, SimulatedGateway};

/// Recoverable engine errors. Session commands record the message in the
/// session's `error` field and hand the error back as a value.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("No seat map is active")]
    NoActiveSeatMap,
    #[error("Seat not found: {0}")]
    SeatNotFound(String),
    #[error("Seat {seat_id} is unavailable ({status})")]
    SeatUnavailable { seat_id: String, status: SeatStatus },
    #[error("Seat {seat_id} is already selected by another passenger")]
    SeatTaken { seat_id: String },
    #[error("Passenger {0} has no seat selected")]
    NoSelection(String),
    #[error("Comparison is limited to {max} seats")]
    ComparisonFull { max: usize },
    #[error("A confirmation is already in progress")]
    ConfirmationPending,
    #[error("Seat confirmation failed: {0}")]
    ConfirmationFailed(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
