//! Seat map fixtures shared by the unit tests.

use std::collections::BTreeMap;
use seatwise_catalog::{Amenities, Amenity, CabinClass, Seat, SeatMap, SeatStatus, SeatType, Section};

pub fn seat(id: &str, row: u32, column: char, seat_type: SeatType, status: SeatStatus) -> Seat {
    Seat {
        id: id.to_string(),
        row,
        column,
        class: CabinClass::Economy,
        seat_type,
        status,
        legroom: 31.0,
        width: 17.0,
        pitch: 31.0,
        is_exit_row: false,
        restrictions: Vec::new(),
        price_nuc: None,
        amenities: Amenities::with(&[Amenity::Usb]),
    }
}

fn map_of(id: &str, seats: Vec<Seat>) -> SeatMap {
    SeatMap {
        id: id.to_string(),
        flight_id: format!("FL-{}", id),
        flight_number: "SW100".to_string(),
        aircraft: "A320neo".to_string(),
        currency: "USD".to_string(),
        exit_rows: seats.iter().filter(|s| s.is_exit_row).map(|s| s.row).collect(),
        seats,
        sections: vec![Section {
            name: "Main Cabin".to_string(),
            class: CabinClass::Economy,
            first_row: 1,
            last_row: 30,
            columns: vec!['A', 'B', 'C'],
        }],
        legend: BTreeMap::new(),
    }
}

/// A1 window available, A2 middle available, A3 aisle occupied
pub fn scenario_map() -> SeatMap {
    map_of(
        "SCENARIO",
        vec![
            seat("A1", 1, 'A', SeatType::Window, SeatStatus::Available),
            seat("A2", 1, 'B', SeatType::Middle, SeatStatus::Available),
            seat("A3", 1, 'C', SeatType::Aisle, SeatStatus::Occupied),
        ],
    )
}

/// A richer cabin: a priced exit row, a blocked seat and a business row
pub fn cabin_map() -> SeatMap {
    let mut seats = vec![
        seat("1A", 1, 'A', SeatType::Window, SeatStatus::Available),
        seat("1B", 1, 'B', SeatType::Middle, SeatStatus::Available),
        seat("1C", 1, 'C', SeatType::Aisle, SeatStatus::Available),
        seat("2A", 2, 'A', SeatType::Window, SeatStatus::Occupied),
        seat("2B", 2, 'B', SeatType::Middle, SeatStatus::Blocked),
        seat("2C", 2, 'C', SeatType::Aisle, SeatStatus::Available),
        seat("10A", 10, 'A', SeatType::Window, SeatStatus::ExtraLegroom),
        seat("10C", 10, 'C', SeatType::Aisle, SeatStatus::ExtraLegroom),
    ];

    for s in seats.iter_mut().filter(|s| s.row == 10) {
        s.is_exit_row = true;
        s.legroom = 36.0;
        s.price_nuc = Some(4500);
        s.amenities = Amenities::with(&[Amenity::Usb, Amenity::Power, Amenity::ExtraLegroom]);
    }
    for s in seats.iter_mut().filter(|s| s.row == 1) {
        s.class = CabinClass::Business;
        s.legroom = 40.0;
        s.price_nuc = Some(12000);
        s.amenities = Amenities::with(&[
            Amenity::Power,
            Amenity::Usb,
            Amenity::Wifi,
            Amenity::Entertainment,
            Amenity::Recline,
        ]);
    }
    seats[5].price_nuc = Some(1500);

    map_of("CABIN", seats)
}
