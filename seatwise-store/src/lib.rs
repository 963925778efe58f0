pub mod app_config;
pub mod fixtures;
pub mod seat_map_repo;
pub mod events;

pub use seat_map_repo::InMemorySeatMapRepository;
pub use events::EventPublisher;
