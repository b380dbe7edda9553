//! Real Wroclaw locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap.

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }

    pub fn coords(&self) -> (f64, f64) {
        (self.lat, self.lng)
    }
}

// ============================================================================
// Old Town
// ============================================================================

pub const OLD_TOWN: &[Location] = &[
    Location::new("Market Square", 51.1100, 17.0320),
    Location::new("Old Town Hall", 51.1097, 17.0310),
    Location::new("St. Elizabeth's Church", 51.1114, 17.0294),
    Location::new("University of Wroclaw", 51.1139, 17.0343),
    Location::new("Market Hall", 51.1127, 17.0397),
];

// ============================================================================
// Ostrow Tumski and east bank
// ============================================================================

pub const EAST_BANK: &[Location] = &[
    Location::new("Cathedral of St. John the Baptist", 51.1143, 17.0466),
    Location::new("Botanical Garden", 51.1165, 17.0453),
    Location::new("Panorama of the Battle of Raclawice", 51.1101, 17.0444),
    Location::new("National Museum", 51.1109, 17.0470),
    Location::new("Centennial Hall", 51.1069, 17.0772),
    Location::new("Wroclaw Zoo", 51.1043, 17.0746),
];

// ============================================================================
// Hotels (accommodation anchors)
// ============================================================================

pub const HOTELS: &[Location] = &[
    Location::new("Hotel near Main Station", 51.0986, 17.0364),
    Location::new("Hotel by the Zoo", 51.1035, 17.0790),
];
