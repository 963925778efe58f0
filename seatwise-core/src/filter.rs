use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use seatwise_catalog::{Amenity, CabinClass, Seat, SeatMap, SeatType};

/// Declarative predicate narrowing the seats offered to a passenger
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SeatFilter {
    pub classes: BTreeSet<CabinClass>,
    pub types: BTreeSet<SeatType>,
    /// Inches
    pub min_legroom: Option<f64>,
    pub max_price_nuc: Option<i32>,
    pub exit_row_only: bool,
    pub amenities: BTreeSet<Amenity>,
}

impl Default for SeatFilter {
    fn default() -> Self {
        Self {
            classes: CabinClass::ALL.into_iter().collect(),
            types: SeatType::ALL.into_iter().collect(),
            min_legroom: None,
            max_price_nuc: None,
            exit_row_only: false,
            amenities: BTreeSet::new(),
        }
    }
}

impl SeatFilter {
    pub fn with_classes(mut self, classes: &[CabinClass]) -> Self {
        self.classes = classes.iter().copied().collect();
        self
    }

    pub fn with_types(mut self, types: &[SeatType]) -> Self {
        self.types = types.iter().copied().collect();
        self
    }

    pub fn with_min_legroom(mut self, inches: f64) -> Self {
        self.min_legroom = Some(inches);
        self
    }

    pub fn with_max_price(mut self, price_nuc: i32) -> Self {
        self.max_price_nuc = Some(price_nuc);
        self
    }

    pub fn exit_row_only(mut self) -> Self {
        self.exit_row_only = true;
        self
    }

    pub fn with_amenities(mut self, amenities: &[Amenity]) -> Self {
        self.amenities = amenities.iter().copied().collect();
        self
    }

    pub fn matches(&self, seat: &Seat) -> bool {
        if !self.classes.contains(&seat.class) || !self.types.contains(&seat.seat_type) {
            return false;
        }

        if let Some(min) = self.min_legroom {
            if seat.legroom < min {
                return false;
            }
        }

        // Complimentary seats always pass the price bound
        if let (Some(max), Some(price)) = (self.max_price_nuc, seat.price_nuc) {
            if price > max {
                return false;
            }
        }

        if self.exit_row_only && !seat.is_exit_row {
            return false;
        }

        if !self.amenities.iter().all(|a| seat.amenities.get(*a)) {
            return false;
        }

        seat.is_selectable()
    }
}

/// Seats of `seat_map` satisfying `filter`, in seat map order
pub fn filter_seats<'a>(seat_map: &'a SeatMap, filter: &SeatFilter) -> Vec<&'a Seat> {
    seat_map.seats.iter().filter(|s| filter.matches(s)).collect()
}
