pub mod seat;
pub mod seat_map;
pub mod repository;

pub use seat::{Amenities, Amenity, CabinClass, Seat, SeatStatus, SeatType};
pub use seat_map::{LegendEntry, SeatMap, SeatMapSummary, Section};
pub use repository::{RepositoryError, SeatMapRepository};
