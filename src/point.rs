//! Geographic points and coordinate extraction.

use crate::error::{Error, Result};
use crate::traits::Attraction;

/// A (latitude, longitude) pair with finite components.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    lat: f64,
    lng: f64,
}

impl Point {
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        if !lat.is_finite() || !lng.is_finite() {
            return Err(Error::invalid_input(format!(
                "coordinates must be finite, got ({lat}, {lng})"
            )));
        }
        Ok(Self { lat, lng })
    }

    pub fn lat(&self) -> f64 {
        self.lat
    }

    pub fn lng(&self) -> f64 {
        self.lng
    }
}

/// Accommodation location of a trip group. Either coordinate may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Accommodation {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Accommodation {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude: Some(latitude),
            longitude: Some(longitude),
        }
    }

    /// The accommodation as a point, if both coordinates are populated and finite.
    pub fn point(&self) -> Option<Point> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lng)) => Point::new(lat, lng).ok(),
            _ => None,
        }
    }
}

/// Maps attractions to their points, preserving order.
pub fn extract_coordinates<A: Attraction>(attractions: &[A]) -> Vec<Point> {
    attractions.iter().map(|attraction| attraction.location()).collect()
}
