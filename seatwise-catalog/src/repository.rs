use async_trait::async_trait;
use crate::seat_map::{SeatMap, SeatMapSummary};

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Seat map not found: {0}")]
    NotFound(String),

    #[error("Seat map data invalid: {0}")]
    InvalidData(String),
}

/// Read access to the static seat map dataset.
///
/// Implementations hand out owned copies; callers mutate their copy only.
#[async_trait]
pub trait SeatMapRepository: Send + Sync {
    async fn list_seat_maps(&self) -> Result<Vec<SeatMapSummary>, RepositoryError>;

    async fn get_seat_map(&self, id: &str) -> Result<Option<SeatMap>, RepositoryError>;
}
