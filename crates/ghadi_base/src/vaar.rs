//! Vaar (weekday) enumeration.
//!
//! Weekdays are named from the sunrise-to-sunrise Vedic tradition; the
//! English names are what schedule rows display.

use chrono::Weekday;

/// The seven vaars (weekdays), Sunday first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Vaar {
    Ravivaar,
    Somvaar,
    Mangalvaar,
    Budhvaar,
    Guruvaar,
    Shukravaar,
    Shanivaar,
}

/// All 7 vaars in order (index 0 = Ravivaar / Sunday).
pub const ALL_VAARS: [Vaar; 7] = [
    Vaar::Ravivaar,
    Vaar::Somvaar,
    Vaar::Mangalvaar,
    Vaar::Budhvaar,
    Vaar::Guruvaar,
    Vaar::Shukravaar,
    Vaar::Shanivaar,
];

const VAAR_NAMES: [&str; 7] = [
    "Ravivaar",
    "Somvaar",
    "Mangalvaar",
    "Budhvaar",
    "Guruvaar",
    "Shukravaar",
    "Shanivaar",
];

const ENGLISH_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

impl Vaar {
    /// 0-based index (Ravivaar=0 .. Shanivaar=6).
    pub const fn index(self) -> u8 {
        match self {
            Self::Ravivaar => 0,
            Self::Somvaar => 1,
            Self::Mangalvaar => 2,
            Self::Budhvaar => 3,
            Self::Guruvaar => 4,
            Self::Shukravaar => 5,
            Self::Shanivaar => 6,
        }
    }

    /// Sanskrit name.
    pub fn name(self) -> &'static str {
        VAAR_NAMES[self.index() as usize]
    }

    /// English weekday name, e.g. "Monday".
    pub fn english_name(self) -> &'static str {
        ENGLISH_NAMES[self.index() as usize]
    }

    pub fn from_weekday(weekday: Weekday) -> Self {
        ALL_VAARS[weekday.num_days_from_sunday() as usize]
    }
}

impl From<Weekday> for Vaar {
    fn from(weekday: Weekday) -> Self {
        Self::from_weekday(weekday)
    }
}

impl std::fmt::Display for Vaar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}
