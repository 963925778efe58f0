//! Mock seat map dataset served by the in-memory repository.

use std::collections::BTreeMap;
use seatwise_catalog::{
    Amenities, Amenity, CabinClass, LegendEntry, Seat, SeatMap, SeatStatus, SeatType, Section,
};

struct Cabin {
    name: &'static str,
    class: CabinClass,
    rows: std::ops::RangeInclusive<u32>,
    columns: &'static [(char, SeatType)],
    legroom: f64,
    width: f64,
    pitch: f64,
    price_nuc: Option<i32>,
    amenities: &'static [Amenity],
}

struct Aircraft {
    seat_map_id: &'static str,
    flight_number: &'static str,
    aircraft: &'static str,
    cabins: Vec<Cabin>,
    exit_rows: Vec<u32>,
    /// Price of exit-row seats, which replaces the cabin price
    exit_row_price_nuc: i32,
    occupied: Vec<&'static str>,
    blocked: Vec<&'static str>,
}

const NARROWBODY_ECONOMY: &[(char, SeatType)] = &[
    ('A', SeatType::Window),
    ('B', SeatType::Middle),
    ('C', SeatType::Aisle),
    ('D', SeatType::Aisle),
    ('E', SeatType::Middle),
    ('F', SeatType::Window),
];

const NARROWBODY_BUSINESS: &[(char, SeatType)] = &[
    ('A', SeatType::Window),
    ('C', SeatType::Aisle),
    ('D', SeatType::Aisle),
    ('F', SeatType::Window),
];

const WIDEBODY_FIRST: &[(char, SeatType)] = &[('A', SeatType::Window), ('K', SeatType::Window)];

const WIDEBODY_BUSINESS: &[(char, SeatType)] = &[
    ('A', SeatType::Window),
    ('D', SeatType::Aisle),
    ('G', SeatType::Aisle),
    ('K', SeatType::Window),
];

const WIDEBODY_PREMIUM: &[(char, SeatType)] = &[
    ('A', SeatType::Window),
    ('C', SeatType::Aisle),
    ('D', SeatType::Aisle),
    ('E', SeatType::Middle),
    ('G', SeatType::Aisle),
    ('H', SeatType::Aisle),
    ('K', SeatType::Window),
];

const WIDEBODY_ECONOMY: &[(char, SeatType)] = &[
    ('A', SeatType::Window),
    ('B', SeatType::Middle),
    ('C', SeatType::Aisle),
    ('D', SeatType::Aisle),
    ('E', SeatType::Middle),
    ('G', SeatType::Aisle),
    ('H', SeatType::Aisle),
    ('J', SeatType::Middle),
    ('K', SeatType::Window),
];

pub fn default_legend() -> BTreeMap<SeatStatus, LegendEntry> {
    [
        (SeatStatus::Available, "Available", "#4caf50"),
        (SeatStatus::Occupied, "Occupied", "#9e9e9e"),
        (SeatStatus::Selected, "Selected", "#1976d2"),
        (SeatStatus::Blocked, "Blocked", "#e53935"),
        (SeatStatus::ExtraLegroom, "Extra legroom", "#ffb300"),
    ]
    .into_iter()
    .map(|(status, label, color)| {
        (status, LegendEntry { label: label.to_string(), color: color.to_string() })
    })
    .collect()
}

fn build(aircraft: Aircraft) -> SeatMap {
    let mut seats = Vec::new();
    let mut sections = Vec::new();

    for cabin in &aircraft.cabins {
        sections.push(Section {
            name: cabin.name.to_string(),
            class: cabin.class,
            first_row: *cabin.rows.start(),
            last_row: *cabin.rows.end(),
            columns: cabin.columns.iter().map(|(c, _)| *c).collect(),
        });

        for row in cabin.rows.clone() {
            let is_exit_row = aircraft.exit_rows.contains(&row);

            for (column, seat_type) in cabin.columns {
                let number = format!("{}{}", row, column);
                let status = if aircraft.occupied.iter().any(|n| *n == number) {
                    SeatStatus::Occupied
                } else if aircraft.blocked.iter().any(|n| *n == number) {
                    SeatStatus::Blocked
                } else if is_exit_row {
                    SeatStatus::ExtraLegroom
                } else {
                    SeatStatus::Available
                };

                let mut amenities = Amenities::with(cabin.amenities);
                let mut restrictions = Vec::new();
                let (legroom, price_nuc) = if is_exit_row {
                    amenities.extra_legroom = true;
                    restrictions.push("Must be 15 or older".to_string());
                    restrictions.push("Must be able to assist in an evacuation".to_string());
                    (cabin.legroom + 5.0, Some(aircraft.exit_row_price_nuc))
                } else {
                    (cabin.legroom, cabin.price_nuc)
                };

                // Bulkhead seats take the bassinet mounts
                if row == *cabin.rows.start() && cabin.class != CabinClass::First {
                    amenities.bassinet = true;
                    amenities.storage = false;
                }

                seats.push(Seat {
                    id: format!("{}-{}", aircraft.seat_map_id, number),
                    row,
                    column: *column,
                    class: cabin.class,
                    seat_type: *seat_type,
                    status,
                    legroom,
                    width: cabin.width,
                    pitch: cabin.pitch,
                    is_exit_row,
                    restrictions,
                    price_nuc,
                    amenities,
                });
            }
        }
    }

    SeatMap {
        id: aircraft.seat_map_id.to_string(),
        flight_id: format!("FL-{}", aircraft.flight_number),
        flight_number: aircraft.flight_number.to_string(),
        aircraft: aircraft.aircraft.to_string(),
        currency: "USD".to_string(),
        seats,
        sections,
        exit_rows: aircraft.exit_rows,
        legend: default_legend(),
    }
}

/// Narrow-body with business and economy cabins, two exit rows
pub fn sw101() -> SeatMap {
    build(Aircraft {
        seat_map_id: "SW101",
        flight_number: "SW101",
        aircraft: "Airbus A320neo",
        cabins: vec![
            Cabin {
                name: "Business",
                class: CabinClass::Business,
                rows: 1..=3,
                columns: NARROWBODY_BUSINESS,
                legroom: 38.0,
                width: 21.0,
                pitch: 38.0,
                price_nuc: None,
                amenities: &[Amenity::Power, Amenity::Usb, Amenity::Wifi, Amenity::Recline, Amenity::Storage],
            },
            Cabin {
                name: "Economy Plus",
                class: CabinClass::Economy,
                rows: 10..=11,
                columns: NARROWBODY_ECONOMY,
                legroom: 33.0,
                width: 17.8,
                pitch: 34.0,
                price_nuc: Some(2500),
                amenities: &[Amenity::Usb, Amenity::Wifi, Amenity::Recline, Amenity::Storage],
            },
            Cabin {
                name: "Economy",
                class: CabinClass::Economy,
                rows: 12..=28,
                columns: NARROWBODY_ECONOMY,
                legroom: 30.0,
                width: 17.8,
                pitch: 30.0,
                price_nuc: None,
                amenities: &[Amenity::Usb, Amenity::Wifi, Amenity::Storage],
            },
        ],
        exit_rows: vec![14, 15],
        exit_row_price_nuc: 4500,
        occupied: vec!["1A", "2D", "10C", "11A", "11F", "12B", "14A", "16C", "16D", "20F", "21A", "24E"],
        blocked: vec!["28B", "28E"],
    })
}

/// Wide-body with all four cabin classes
pub fn sw202() -> SeatMap {
    build(Aircraft {
        seat_map_id: "SW202",
        flight_number: "SW202",
        aircraft: "Boeing 787-9",
        cabins: vec![
            Cabin {
                name: "First",
                class: CabinClass::First,
                rows: 1..=2,
                columns: WIDEBODY_FIRST,
                legroom: 78.0,
                width: 24.0,
                pitch: 80.0,
                price_nuc: None,
                amenities: &[
                    Amenity::Power,
                    Amenity::Usb,
                    Amenity::Wifi,
                    Amenity::Entertainment,
                    Amenity::Recline,
                    Amenity::Storage,
                ],
            },
            Cabin {
                name: "Business",
                class: CabinClass::Business,
                rows: 5..=10,
                columns: WIDEBODY_BUSINESS,
                legroom: 44.0,
                width: 21.5,
                pitch: 44.0,
                price_nuc: None,
                amenities: &[
                    Amenity::Power,
                    Amenity::Usb,
                    Amenity::Wifi,
                    Amenity::Entertainment,
                    Amenity::Recline,
                    Amenity::Storage,
                ],
            },
            Cabin {
                name: "Premium Economy",
                class: CabinClass::PremiumEconomy,
                rows: 20..=23,
                columns: WIDEBODY_PREMIUM,
                legroom: 38.0,
                width: 18.5,
                pitch: 38.0,
                price_nuc: Some(6000),
                amenities: &[Amenity::Power, Amenity::Usb, Amenity::Entertainment, Amenity::Recline, Amenity::Storage],
            },
            Cabin {
                name: "Economy",
                class: CabinClass::Economy,
                rows: 30..=45,
                columns: WIDEBODY_ECONOMY,
                legroom: 31.0,
                width: 17.2,
                pitch: 31.0,
                price_nuc: Some(1800),
                amenities: &[Amenity::Usb, Amenity::Entertainment, Amenity::Recline],
            },
        ],
        exit_rows: vec![30],
        exit_row_price_nuc: 7500,
        occupied: vec!["1A", "5D", "6K", "20A", "21E", "30A", "30K", "33B", "33C", "40J", "44H"],
        blocked: vec!["45A", "45K"],
    })
}

pub fn all() -> Vec<SeatMap> {
    vec![sw101(), sw202()]
}
