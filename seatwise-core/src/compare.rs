use serde::Serialize;
use seatwise_catalog::{Amenity, Seat};
use crate::{CoreError, CoreResult};

pub const MAX_COMPARISON_SEATS: usize = 3;

/// Seat ids picked for the side-by-side view, in insertion order
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct ComparisonSet {
    seat_ids: Vec<String>,
}

impl ComparisonSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adding a seat already in the set is a no-op
    pub fn add(&mut self, seat_id: &str) -> CoreResult<()> {
        if self.contains(seat_id) {
            return Ok(());
        }
        if self.seat_ids.len() >= MAX_COMPARISON_SEATS {
            return Err(CoreError::ComparisonFull { max: MAX_COMPARISON_SEATS });
        }
        self.seat_ids.push(seat_id.to_string());
        Ok(())
    }

    pub fn remove(&mut self, seat_id: &str) -> bool {
        let before = self.seat_ids.len();
        self.seat_ids.retain(|id| id != seat_id);
        before != self.seat_ids.len()
    }

    pub fn clear(&mut self) {
        self.seat_ids.clear();
    }

    pub fn contains(&self, seat_id: &str) -> bool {
        self.seat_ids.iter().any(|id| id == seat_id)
    }

    pub fn seat_ids(&self) -> &[String] {
        &self.seat_ids
    }

    pub fn len(&self) -> usize {
        self.seat_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.seat_ids.is_empty()
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SeatComparison {
    pub seats: Vec<Seat>,
    /// Amenity keys on which at least one pair of seats disagrees
    pub differences: Vec<Amenity>,
    /// Most expensive minus cheapest, complimentary seats counted as 0
    pub price_spread_nuc: i32,
    pub legroom_spread: f64,
}

fn pairwise_differences(a: &Seat, b: &Seat) -> impl Iterator<Item = Amenity> {
    let (a, b) = (a.amenities, b.amenities);
    Amenity::ALL.into_iter().filter(move |k| a.get(*k) != b.get(*k))
}

/// Compares seats amenity by amenity. Fewer than two seats yields no
/// differences.
pub fn compare(seats: &[&Seat]) -> SeatComparison {
    let mut differing = [false; Amenity::ALL.len()];

    for (i, a) in seats.iter().enumerate() {
        for b in &seats[i + 1..] {
            for amenity in pairwise_differences(a, b) {
                if let Some(pos) = Amenity::ALL.iter().position(|k| *k == amenity) {
                    differing[pos] = true;
                }
            }
        }
    }

    let differences = Amenity::ALL
        .into_iter()
        .zip(differing)
        .filter_map(|(k, d)| d.then_some(k))
        .collect();

    let prices = seats.iter().map(|s| s.price_nuc.unwrap_or(0));
    let price_spread_nuc = match (prices.clone().max(), prices.min()) {
        (Some(max), Some(min)) => max - min,
        _ => 0,
    };

    let legroom_spread = if seats.is_empty() {
        0.0
    } else {
        let max = seats.iter().map(|s| s.legroom).fold(f64::MIN, f64::max);
        let min = seats.iter().map(|s| s.legroom).fold(f64::MAX, f64::min);
        max - min
    };

    SeatComparison {
        seats: seats.iter().map(|s| (*s).clone()).collect(),
        differences,
        price_spread_nuc,
        legroom_spread,
    }
}
