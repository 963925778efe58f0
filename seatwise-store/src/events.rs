use tokio::sync::broadcast;
use tracing::{debug, info};
use seatwise_shared::models::events::SeatMapEvent;

/// In-process fan-out of seat map events to stream subscribers
#[derive(Clone)]
pub struct EventPublisher {
    tx: broadcast::Sender<SeatMapEvent>,
}

impl EventPublisher {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publishes to current subscribers. Returns how many received it;
    /// having nobody listening is not an error.
    pub fn publish(&self, event: SeatMapEvent) -> usize {
        match self.tx.send(event) {
            Ok(receivers) => {
                info!("Published seat map event to {} subscribers", receivers);
                receivers
            }
            Err(broadcast::error::SendError(event)) => {
                debug!("No subscribers for {}", event.name());
                0
            }
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<SeatMapEvent> {
        self.tx.subscribe()
    }
}
