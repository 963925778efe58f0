use serde::Deserialize;
use std::env;
use std::time::Duration;
use seatwise_core::ScoringWeights;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub seat_maps: SeatMapsConfig,
    pub recommendation: RecommendationConfig,
    pub confirmation: ConfirmationConfig,
    pub events: EventsConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SeatMapsConfig {
    /// Seat map activated when the service starts
    pub default_seat_map_id: Option<String>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct RecommendationConfig {
    #[serde(default = "default_limit")]
    pub limit: usize,
    #[serde(default)]
    pub weights: ScoringWeights,
}

fn default_limit() -> usize { seatwise_core::DEFAULT_RECOMMENDATION_LIMIT }

#[derive(Debug, Deserialize, Clone)]
pub struct ConfirmationConfig {
    pub latency_ms: u64,
    #[serde(default)]
    pub fail: bool,
}

impl ConfirmationConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

#[derive(Debug, Deserialize, Clone)]
pub struct EventsConfig {
    pub capacity: usize,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides are optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // e.g. `SEATWISE__SERVER__PORT=8081`
            .add_source(config::Environment::with_prefix("SEATWISE").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig { port: 8080 },
            seat_maps: SeatMapsConfig { default_seat_map_id: None },
            recommendation: RecommendationConfig {
                limit: default_limit(),
                weights: ScoringWeights::default(),
            },
            confirmation: ConfirmationConfig { latency_ms: 300, fail: false },
            events: EventsConfig { capacity: 100 },
        }
    }
}
