use async_trait::async_trait;
use std::collections::BTreeMap;
use tracing::debug;
use seatwise_catalog::{RepositoryError, SeatMap, SeatMapRepository, SeatMapSummary};
use crate::fixtures;

/// Serves the mock seat maps. Loaded once, never written to.
pub struct InMemorySeatMapRepository {
    seat_maps: BTreeMap<String, SeatMap>,
}

impl InMemorySeatMapRepository {
    pub fn new(seat_maps: Vec<SeatMap>) -> Result<Self, RepositoryError> {
        let mut by_id = BTreeMap::new();
        for seat_map in seat_maps {
            if by_id.contains_key(&seat_map.id) {
                return Err(RepositoryError::InvalidData(format!("duplicate seat map id {}", seat_map.id)));
            }
            by_id.insert(seat_map.id.clone(), seat_map);
        }
        Ok(Self { seat_maps: by_id })
    }

    pub fn with_fixtures() -> Self {
        Self {
            seat_maps: fixtures::all().into_iter().map(|m| (m.id.clone(), m)).collect(),
        }
    }
}

#[async_trait]
impl SeatMapRepository for InMemorySeatMapRepository {
    async fn list_seat_maps(&self) -> Result<Vec<SeatMapSummary>, RepositoryError> {
        Ok(self.seat_maps.values().map(SeatMap::summary).collect())
    }

    async fn get_seat_map(&self, id: &str) -> Result<Option<SeatMap>, RepositoryError> {
        debug!("Loading seat map {}", id);
        Ok(self.seat_maps.get(id).cloned())
    }
}
