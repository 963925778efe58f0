use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Duration;
use uuid::Uuid;
use seatwise_catalog::CabinClass;
use seatwise_shared::Masked;
use crate::{CoreError, CoreResult};

/// Snapshot of a selection handed to the gateway while confirmation is in
/// flight
#[derive(Debug, Clone, Serialize)]
pub struct PendingConfirmation {
    pub seat_map_id: String,
    pub flight_id: String,
    pub passenger_id: String,
    pub passenger_name: Masked<String>,
    pub seat_id: String,
    pub seat_number: String,
    pub class: CabinClass,
    pub price_nuc: Option<i32>,
}

/// Confirmed seat selection. Created once, never modified.
#[derive(Debug, Clone, Serialize)]
pub struct SeatSelection {
    pub id: Uuid,
    pub passenger_id: String,
    pub passenger_name: Masked<String>,
    pub seat_id: String,
    pub seat_number: String,
    pub class: CabinClass,
    pub price_nuc: Option<i32>,
    pub flight_id: String,
    pub confirmed_at: DateTime<Utc>,
}

impl From<PendingConfirmation> for SeatSelection {
    fn from(pending: PendingConfirmation) -> Self {
        Self {
            id: Uuid::new_v4(),
            passenger_id: pending.passenger_id,
            passenger_name: pending.passenger_name,
            seat_id: pending.seat_id,
            seat_number: pending.seat_number,
            class: pending.class,
            price_nuc: pending.price_nuc,
            flight_id: pending.flight_id,
            confirmed_at: Utc::now(),
        }
    }
}

#[async_trait]
pub trait ConfirmationGateway: Send + Sync {
    /// Confirm a seat with the carrier
    async fn confirm(&self, pending: &PendingConfirmation) -> CoreResult<()>;
}

/// Stand-in for the carrier call: waits a fixed latency, then succeeds or
/// fails as configured.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    latency: Duration,
    fail: bool,
}

impl SimulatedGateway {
    pub fn new(latency: Duration) -> Self {
        Self { latency, fail: false }
    }

    pub fn failing(latency: Duration) -> Self {
        Self { latency, fail: true }
    }
}

#[async_trait]
impl ConfirmationGateway for SimulatedGateway {
    async fn confirm(&self, pending: &PendingConfirmation) -> CoreResult<()> {
        tokio::time::sleep(self.latency).await;

        if self.fail {
            tracing::warn!("Simulated confirmation rejected seat {}", pending.seat_number);
            return Err(CoreError::ConfirmationFailed(format!(
                "carrier rejected seat {}",
                pending.seat_number
            )));
        }

        tracing::debug!("Simulated confirmation accepted seat {}", pending.seat_number);
        Ok(())
    }
}
