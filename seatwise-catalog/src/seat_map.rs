use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use crate::seat::{CabinClass, Seat, SeatStatus};

/// A named block of rows sharing one cabin class
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Section {
    pub name: String,
    pub class: CabinClass,
    pub first_row: u32,
    pub last_row: u32,
    pub columns: Vec<char>,
}

impl Section {
    pub fn contains_row(&self, row: u32) -> bool {
        (self.first_row..=self.last_row).contains(&row)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LegendEntry {
    pub label: String,
    pub color: String,
}

/// Full seat layout of one flight
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatMap {
    pub id: String,
    pub flight_id: String,
    pub flight_number: String,
    pub aircraft: String,
    pub currency: String,
    pub seats: Vec<Seat>,
    pub sections: Vec<Section>,
    pub exit_rows: Vec<u32>,
    pub legend: BTreeMap<SeatStatus, LegendEntry>,
}

/// Listing entry returned by the repository
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SeatMapSummary {
    pub id: String,
    pub flight_id: String,
    pub flight_number: String,
    pub aircraft: String,
    pub seat_count: usize,
    pub selectable_count: usize,
}

impl SeatMap {
    pub fn seat(&self, seat_id: &str) -> Option<&Seat> {
        self.seats.iter().find(|s| s.id == seat_id)
    }

    /// Column lookup ignores case, so `12a` and `12A` are the same seat
    pub fn seat_at(&self, row: u32, column: char) -> Option<&Seat> {
        let column = column.to_ascii_uppercase();
        self.seats
            .iter()
            .find(|s| s.row == row && s.column.to_ascii_uppercase() == column)
    }

    pub fn section_for_row(&self, row: u32) -> Option<&Section> {
        self.sections.iter().find(|s| s.contains_row(row))
    }

    pub fn is_exit_row(&self, row: u32) -> bool {
        self.exit_rows.contains(&row)
    }

    /// Number of seats per status, for the overview legend
    pub fn status_counts(&self) -> BTreeMap<SeatStatus, usize> {
        let mut counts: BTreeMap<SeatStatus, usize> =
            SeatStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for seat in &self.seats {
            *counts.entry(seat.status).or_insert(0) += 1;
        }
        counts
    }

    /// Overwrites a seat's status and returns the previous one.
    ///
    /// Only the selection session calls this; everything else treats the
    /// seat map as read-only.
    pub fn set_status(&mut self, seat_id: &str, status: SeatStatus) -> Option<SeatStatus> {
        let seat = self.seats.iter_mut().find(|s| s.id == seat_id)?;
        let previous = seat.status;
        seat.status = status;
        Some(previous)
    }

    pub fn summary(&self) -> SeatMapSummary {
        SeatMapSummary {
            id: self.id.clone(),
            flight_id: self.flight_id.clone(),
            flight_number: self.flight_number.clone(),
            aircraft: self.aircraft.clone(),
            seat_count: self.seats.len(),
            selectable_count: self.seats.iter().filter(|s| s.is_selectable()).count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seat::{Amenities, SeatType};

    fn map() -> SeatMap {
        let seat = |row: u32, column: char, status: SeatStatus| Seat {
            id: format!("M-{}{}", row, column),
            row,
            column,
            class: CabinClass::Economy,
            seat_type: if column == 'A' { SeatType::Window } else { SeatType::Aisle },
            status,
            legroom: 31.0,
            width: 17.0,
            pitch: 31.0,
            is_exit_row: row == 12,
            restrictions: Vec::new(),
            price_nuc: None,
            amenities: Amenities::default(),
        };

        SeatMap {
            id: "M".to_string(),
            flight_id: "FL-M".to_string(),
            flight_number: "SW1".to_string(),
            aircraft: "A320".to_string(),
            currency: "USD".to_string(),
            seats: vec![
                seat(11, 'A', SeatStatus::Available),
                seat(11, 'C', SeatStatus::Occupied),
                seat(12, 'A', SeatStatus::ExtraLegroom),
            ],
            sections: vec![Section {
                name: "Economy".to_string(),
                class: CabinClass::Economy,
                first_row: 10,
                last_row: 30,
                columns: vec!['A', 'C'],
            }],
            exit_rows: vec![12],
            legend: BTreeMap::new(),
        }
    }

    #[test]
    fn test_lookup_and_counts() {
        let mut m = map();
        assert_eq!(m.seat_at(11, 'a').map(|s| s.id.as_str()), Some("M-11A"));
        assert!(m.seat_at(40, 'A').is_none());
        assert!(m.is_exit_row(12));
        assert_eq!(m.section_for_row(12).map(|s| s.name.as_str()), Some("Economy"));

        let counts = m.status_counts();
        assert_eq!(counts[&SeatStatus::Available], 1);
        assert_eq!(counts[&SeatStatus::Selected], 0);

        assert_eq!(m.set_status("M-11A", SeatStatus::Selected), Some(SeatStatus::Available));
        assert_eq!(m.set_status("nope", SeatStatus::Selected), None);

        let summary = m.summary();
        assert_eq!(summary.seat_count, 3);
        assert_eq!(summary.selectable_count, 1);
    }
}
