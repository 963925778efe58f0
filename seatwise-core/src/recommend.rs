use serde::{Deserialize, Serialize};
use seatwise_catalog::{Seat, SeatType};

pub const DEFAULT_RECOMMENDATION_LIMIT: usize = 5;

/// Legroom below this many inches earns no bonus
const BASELINE_LEGROOM: f64 = 28.0;

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SeatPreferences {
    pub prefer_window: bool,
    pub prefer_aisle: bool,
    pub want_extra_legroom: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringWeights {
    pub window: f64,
    pub aisle: f64,
    pub extra_legroom: f64,
    pub legroom_per_inch: f64,
    pub amenity: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            window: 10.0,
            aisle: 10.0,
            extra_legroom: 8.0,
            legroom_per_inch: 0.5,
            amenity: 0.25,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScoredSeat<'a> {
    pub seat: &'a Seat,
    pub score: f64,
}

fn has_extra_legroom(seat: &Seat) -> bool {
    seat.is_exit_row || seat.amenities.extra_legroom
}

/// Score of one seat. Each matched preference adds its fixed weight; legroom
/// and amenities add smaller continuous bonuses.
pub fn score_seat(seat: &Seat, prefs: &SeatPreferences, weights: &ScoringWeights) -> f64 {
    let mut score = 0.0;

    if prefs.prefer_window && seat.seat_type == SeatType::Window {
        score += weights.window;
    }
    if prefs.prefer_aisle && seat.seat_type == SeatType::Aisle {
        score += weights.aisle;
    }
    if prefs.want_extra_legroom && has_extra_legroom(seat) {
        score += weights.extra_legroom;
    }

    score += (seat.legroom - BASELINE_LEGROOM).max(0.0) * weights.legroom_per_inch;
    score += seat.amenities.count() as f64 * weights.amenity;

    score
}

/// Top `limit` seats by descending score. Ties keep their input order.
pub fn recommend<'a>(
    seats: &[&'a Seat],
    prefs: &SeatPreferences,
    weights: &ScoringWeights,
    limit: usize,
) -> Vec<ScoredSeat<'a>> {
    let mut scored: Vec<ScoredSeat<'a>> = seats
        .iter()
        .map(|&seat| ScoredSeat { seat, score: score_seat(seat, prefs, weights) })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(limit);
    scored
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::{filter_seats, SeatFilter};
    use crate::testing::{cabin_map, seat};
    use seatwise_catalog::SeatStatus;

    #[test]
    fn test_window_preference_ranks_windows_first() {
        let map = cabin_map();
        let seats = filter_seats(&map, &SeatFilter::default());
        let prefs = SeatPreferences { prefer_window: true, ..Default::default() };

        let top = recommend(&seats, &prefs, &ScoringWeights::default(), DEFAULT_RECOMMENDATION_LIMIT);

        assert_eq!(top.len(), 5);
        assert_eq!(top[0].seat.id, "1A");
        assert_eq!(top[1].seat.id, "10A");
        assert!(top.windows(2).all(|w| w[0].score >= w[1].score));
    }

    #[test]
    fn test_ties_keep_input_order() {
        let a = seat("X1", 5, 'A', SeatType::Window, SeatStatus::Available);
        let b = seat("X2", 6, 'A', SeatType::Window, SeatStatus::Available);
        let c = seat("X3", 7, 'A', SeatType::Window, SeatStatus::Available);
        let seats = vec![&a, &b, &c];

        let top = recommend(&seats, &SeatPreferences::default(), &ScoringWeights::default(), 2);
        let ids: Vec<&str> = top.iter().map(|s| s.seat.id.as_str()).collect();
        assert_eq!(ids, vec!["X1", "X2"]);
    }

    #[test]
    fn test_nan_weight_still_ranks_in_input_order() {
        let map = cabin_map();
        let seats = filter_seats(&map, &SeatFilter::default());
        let weights = ScoringWeights { amenity: f64::NAN, ..Default::default() };

        let top = recommend(&seats, &SeatPreferences::default(), &weights, seats.len());
        let ids: Vec<&str> = top.iter().map(|s| s.seat.id.as_str()).collect();
        let expected: Vec<&str> = seats.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_more_preferences_never_lower_the_score() {
        let map = cabin_map();
        let weights = ScoringWeights::default();
        let none = SeatPreferences::default();
        let legroom = SeatPreferences { want_extra_legroom: true, ..none };
        let both = SeatPreferences { prefer_aisle: true, ..legroom };

        for seat in &map.seats {
            let s0 = score_seat(seat, &none, &weights);
            let s1 = score_seat(seat, &legroom, &weights);
            let s2 = score_seat(seat, &both, &weights);
            assert!(s0 <= s1 && s1 <= s2, "seat {}", seat.id);
        }

        let exit_aisle = map.seat("10C").unwrap();
        let expected = 10.0 + 8.0 + (36.0 - 28.0) * 0.5 + 3.0 * 0.25;
        assert!((score_seat(exit_aisle, &both, &weights) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_leaves_seats_untouched() {
        let map = cabin_map();
        let before = map.clone();
        let seats = filter_seats(&map, &SeatFilter::default());
        let first = recommend(&seats, &SeatPreferences::default(), &ScoringWeights::default(), 5);
        let second = recommend(&seats, &SeatPreferences::default(), &ScoringWeights::default(), 5);

        assert_eq!(first, second);
        assert_eq!(map, before);
    }
}
