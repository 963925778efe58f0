use serde::{Deserialize, Serialize};
use std::fmt;

/// Cabin classes, ordered from the front of the aircraft backwards
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum CabinClass {
    First,
    Business,
    PremiumEconomy,
    Economy,
}

impl CabinClass {
    pub const ALL: [CabinClass; 4] = [
        CabinClass::First,
        CabinClass::Business,
        CabinClass::PremiumEconomy,
        CabinClass::Economy,
    ];
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SeatType {
    Window,
    Middle,
    Aisle,
}

impl SeatType {
    pub const ALL: [SeatType; 3] = [SeatType::Window, SeatType::Middle, SeatType::Aisle];
}

/// Seat status. `Occupied` and `Blocked` come from the seat map data and are
/// never entered or left through selection.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "kebab-case")]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
    Blocked,
    ExtraLegroom,
}

impl SeatStatus {
    pub const ALL: [SeatStatus; 5] = [
        SeatStatus::Available,
        SeatStatus::Occupied,
        SeatStatus::Selected,
        SeatStatus::Blocked,
        SeatStatus::ExtraLegroom,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SeatStatus::Available => "available",
            SeatStatus::Occupied => "occupied",
            SeatStatus::Selected => "selected",
            SeatStatus::Blocked => "blocked",
            SeatStatus::ExtraLegroom => "extra-legroom",
        }
    }
}

impl fmt::Display for SeatStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Keys of the fixed amenity set
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum Amenity {
    Power,
    Usb,
    Wifi,
    Entertainment,
    Recline,
    ExtraLegroom,
    Bassinet,
    Storage,
}

impl Amenity {
    pub const ALL: [Amenity; 8] = [
        Amenity::Power,
        Amenity::Usb,
        Amenity::Wifi,
        Amenity::Entertainment,
        Amenity::Recline,
        Amenity::ExtraLegroom,
        Amenity::Bassinet,
        Amenity::Storage,
    ];
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Amenities {
    pub power: bool,
    pub usb: bool,
    pub wifi: bool,
    pub entertainment: bool,
    pub recline: bool,
    pub extra_legroom: bool,
    pub bassinet: bool,
    pub storage: bool,
}

impl Amenities {
    pub fn get(&self, amenity: Amenity) -> bool {
        match amenity {
            Amenity::Power => self.power,
            Amenity::Usb => self.usb,
            Amenity::Wifi => self.wifi,
            Amenity::Entertainment => self.entertainment,
            Amenity::Recline => self.recline,
            Amenity::ExtraLegroom => self.extra_legroom,
            Amenity::Bassinet => self.bassinet,
            Amenity::Storage => self.storage,
        }
    }

    /// Builds an amenity set with exactly the listed keys enabled
    pub fn with(amenities: &[Amenity]) -> Self {
        let mut set = Self::default();
        for amenity in amenities {
            match amenity {
                Amenity::Power => set.power = true,
                Amenity::Usb => set.usb = true,
                Amenity::Wifi => set.wifi = true,
                Amenity::Entertainment => set.entertainment = true,
                Amenity::Recline => set.recline = true,
                Amenity::ExtraLegroom => set.extra_legroom = true,
                Amenity::Bassinet => set.bassinet = true,
                Amenity::Storage => set.storage = true,
            }
        }
        set
    }

    pub fn count(&self) -> usize {
        Amenity::ALL.iter().filter(|a| self.get(**a)).count()
    }
}

/// A single physical seat
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Seat {
    pub id: String,
    pub row: u32,
    pub column: char,
    pub class: CabinClass,
    pub seat_type: SeatType,
    pub status: SeatStatus,
    /// Inches
    pub legroom: f64,
    pub width: f64,
    pub pitch: f64,
    pub is_exit_row: bool,
    pub restrictions: Vec<String>,
    /// Absent means the seat is included in the fare
    pub price_nuc: Option<i32>,
    pub amenities: Amenities,
}

impl Seat {
    /// Seats that may be offered to and taken by a passenger
    pub fn is_selectable(&self) -> bool {
        matches!(self.status, SeatStatus::Available | SeatStatus::ExtraLegroom)
    }

    /// Status a selected seat returns to once released. Exit-row seats keep
    /// their extra-legroom designation.
    pub fn release_status(&self) -> SeatStatus {
        if self.is_exit_row {
            SeatStatus::ExtraLegroom
        } else {
            SeatStatus::Available
        }
    }

    pub fn seat_number(&self) -> String {
        format!("{}{}", self.row, self.column)
    }

    pub fn is_complimentary(&self) -> bool {
        self.price_nuc.is_none()
    }
}
