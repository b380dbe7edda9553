//! Haversine distance matrix provider (fallback when no routing service is reachable).
//!
//! Uses great-circle distance between points. Less accurate than a road
//! network (ignores streets and footpaths) but always available.

use crate::error::DistanceError;
use crate::matrix::DistanceMatrix;
use crate::point::Point;
use crate::traits::DistanceMatrixProvider;

/// Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Haversine-based distance matrix provider.
#[derive(Debug, Clone)]
pub struct HaversineMatrix {
    /// Multiplier applied to straight-line distance to approximate real paths.
    pub detour_factor: f64,
}

impl Default for HaversineMatrix {
    fn default() -> Self {
        Self { detour_factor: 1.0 }
    }
}

impl HaversineMatrix {
    pub fn new(detour_factor: f64) -> Self {
        Self { detour_factor }
    }

    /// Great-circle distance between two points in meters.
    pub fn haversine_m(from: Point, to: Point) -> f64 {
        let lat1_rad = from.lat().to_radians();
        let lat2_rad = to.lat().to_radians();
        let delta_lat = (to.lat() - from.lat()).to_radians();
        let delta_lng = (to.lng() - from.lng()).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().asin();

        EARTH_RADIUS_M * c
    }

    fn travel_meters(&self, from: Point, to: Point) -> u64 {
        (Self::haversine_m(from, to) * self.detour_factor).round() as u64
    }
}

impl DistanceMatrixProvider for HaversineMatrix {
    fn matrix_for(&self, points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        let rows = points
            .iter()
            .enumerate()
            .map(|(i, from)| {
                points
                    .iter()
                    .enumerate()
                    .map(|(j, to)| if i == j { 0 } else { self.travel_meters(*from, *to) })
                    .collect()
            })
            .collect();

        DistanceMatrix::from_distances(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn point(lat: f64, lng: f64) -> Point {
        Point::new(lat, lng).unwrap()
    }

    #[test]
    fn test_haversine_same_point() {
        let dist = HaversineMatrix::haversine_m(point(51.11, 17.03), point(51.11, 17.03));
        assert!(dist < 1.0, "Same point should have ~0 distance");
    }

    #[test]
    fn test_haversine_known_distance() {
        // Wroclaw (51.11, 17.03) to Krakow (50.06, 19.94)
        // Actual distance ~235 km
        let dist = HaversineMatrix::haversine_m(point(51.11, 17.03), point(50.06, 19.94));
        assert!(
            dist > 225_000.0 && dist < 245_000.0,
            "Wroclaw to Krakow should be ~235km, got {}",
            dist
        );
    }

    #[test]
    fn test_matrix_diagonal_is_zero() {
        let provider = HaversineMatrix::default();
        let points = vec![point(51.10, 17.03), point(51.11, 17.04), point(51.12, 17.05)];
        let matrix = provider.matrix_for(&points).unwrap();

        assert_eq!(matrix.size(), points.len());
        for i in 0..points.len() {
            assert_eq!(matrix.get(i, i), Some(0), "Diagonal should be zero");
        }
    }

    #[test]
    fn test_matrix_symmetric() {
        let provider = HaversineMatrix::default();
        let points = vec![point(51.10, 17.03), point(51.12, 17.06)];
        let matrix = provider.matrix_for(&points).unwrap();

        assert_eq!(matrix.get(0, 1), matrix.get(1, 0), "Matrix should be symmetric");
    }

    #[test]
    fn test_detour_factor_scales_distance() {
        let a = point(51.10, 17.03);
        let b = point(51.12, 17.06);
        let straight = HaversineMatrix::default().matrix_for(&[a, b]).unwrap();
        let detoured = HaversineMatrix::new(1.5).matrix_for(&[a, b]).unwrap();

        let straight = straight.get(0, 1).unwrap() as f64;
        let detoured = detoured.get(0, 1).unwrap() as f64;
        assert!((detoured - straight * 1.5).abs() <= 1.0);
    }

    #[test]
    fn test_empty_input_gives_empty_matrix() {
        let matrix = HaversineMatrix::default().matrix_for(&[]).unwrap();
        assert!(matrix.is_empty());
    }
}
