use std::net::SocketAddr;
use std::sync::Arc;
use anyhow::Context;
use seatwise_api::{app, AppState};
use seatwise_core::SimulatedGateway;
use seatwise_store::{app_config::Config, EventPublisher, InMemorySeatMapRepository};
use seatwise_catalog::SeatMapRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "seatwise_api=debug,seatwise_core=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::load().context("Failed to load config")?;
    tracing::info!("Starting Seatwise on port {}", config.server.port);

    let repository = Arc::new(InMemorySeatMapRepository::with_fixtures());

    let gateway = if config.confirmation.fail {
        SimulatedGateway::failing(config.confirmation.latency())
    } else {
        SimulatedGateway::new(config.confirmation.latency())
    };

    let app_state = AppState::new(
        repository.clone(),
        Arc::new(gateway),
        EventPublisher::new(config.events.capacity),
        config.recommendation.clone(),
    );

    if let Some(seat_map_id) = &config.seat_maps.default_seat_map_id {
        let seat_map = repository
            .get_seat_map(seat_map_id)
            .await?
            .with_context(|| format!("Default seat map {} not found", seat_map_id))?;
        app_state.session.lock().await.set_active_seat_map(seat_map);
    }

    let app = app(app_state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
