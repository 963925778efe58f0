use std::sync::Arc;
use tokio::sync::Mutex;
use seatwise_catalog::SeatMapRepository;
use seatwise_core::{ConfirmationGateway, SeatSelectionSession};
use seatwise_store::app_config::RecommendationConfig;
use seatwise_store::EventPublisher;

#[derive(Clone)]
pub struct AppState {
    pub seat_maps: Arc<dyn SeatMapRepository>,
    /// The one selection session every handler works on
    pub session: Arc<Mutex<SeatSelectionSession>>,
    pub events: EventPublisher,
    pub gateway: Arc<dyn ConfirmationGateway>,
    pub recommendation: RecommendationConfig,
}

impl AppState {
    pub fn new(
        seat_maps: Arc<dyn SeatMapRepository>,
        gateway: Arc<dyn ConfirmationGateway>,
        events: EventPublisher,
        recommendation: RecommendationConfig,
    ) -> Self {
        Self {
            seat_maps,
            session: Arc::new(Mutex::new(SeatSelectionSession::new())),
            events,
            gateway,
            recommendation,
        }
    }
}
