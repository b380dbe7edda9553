//! Test fixtures for day-route-planner.
//!
//! Provides realistic test data including:
//! - Real Wroclaw attraction locations (from OpenStreetMap)
//! - Mock attractions and distance matrix providers

#![allow(dead_code)]

pub mod wroclaw_locations;

pub use wroclaw_locations::*;

use std::cell::Cell;

use day_route_planner::error::DistanceError;
use day_route_planner::matrix::DistanceMatrix;
use day_route_planner::point::Point;
use day_route_planner::traits::{Attraction, DistanceMatrixProvider};

#[derive(Clone, Debug, Hash, Eq, PartialEq)]
pub struct TestId(pub String);

impl TestId {
    pub fn new(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Attraction with a name-based id and fixed coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct TestAttraction {
    pub id: Option<TestId>,
    pub lat: f64,
    pub lng: f64,
}

impl TestAttraction {
    pub fn new(id: &str, lat: f64, lng: f64) -> Self {
        Self {
            id: Some(TestId::new(id)),
            lat,
            lng,
        }
    }

    pub fn at(id: &str, location: &Location) -> Self {
        Self::new(id, location.lat, location.lng)
    }

    pub fn name(&self) -> &str {
        self.id.as_ref().map(|id| id.0.as_str()).unwrap_or("<anchor>")
    }
}

impl Attraction for TestAttraction {
    type Id = TestId;

    fn id(&self) -> Option<&Self::Id> {
        self.id.as_ref()
    }

    fn location(&self) -> Point {
        Point::new(self.lat, self.lng).unwrap()
    }
}

pub fn names<'a, I>(attractions: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a TestAttraction>,
{
    attractions.into_iter().map(|a| a.name().to_string()).collect()
}

/// Manhattan distance on raw coordinates, scaled to whole meters.
///
/// Keeps expected orders easy to reason about in tests.
pub struct GridMatrix;

impl DistanceMatrixProvider for GridMatrix {
    fn matrix_for(&self, points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        let rows = points
            .iter()
            .map(|from| {
                points
                    .iter()
                    .map(|to| {
                        let dist = (from.lat() - to.lat()).abs() + (from.lng() - to.lng()).abs();
                        (dist * 1000.0).round() as u64
                    })
                    .collect()
            })
            .collect();
        DistanceMatrix::from_distances(rows)
    }
}

/// Returns a prepared matrix regardless of the points requested.
pub struct FixedMatrix(pub DistanceMatrix);

impl FixedMatrix {
    pub fn new(rows: Vec<Vec<Option<u64>>>) -> Self {
        Self(DistanceMatrix::from_rows(rows).unwrap())
    }
}

impl DistanceMatrixProvider for FixedMatrix {
    fn matrix_for(&self, _points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        Ok(self.0.clone())
    }
}

/// Always fails like an unreachable routing service.
pub struct FailingMatrix;

impl DistanceMatrixProvider for FailingMatrix {
    fn matrix_for(&self, _points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        Err(DistanceError::Api {
            status: "OVER_QUERY_LIMIT".to_string(),
            message: "quota exceeded".to_string(),
        })
    }
}

/// Wraps a provider and counts how often it is queried.
pub struct CountingMatrix<P> {
    pub inner: P,
    pub calls: Cell<usize>,
    pub last_len: Cell<usize>,
}

impl<P> CountingMatrix<P> {
    pub fn new(inner: P) -> Self {
        Self {
            inner,
            calls: Cell::new(0),
            last_len: Cell::new(0),
        }
    }
}

impl<P: DistanceMatrixProvider> DistanceMatrixProvider for CountingMatrix<P> {
    fn matrix_for(&self, points: &[Point]) -> Result<DistanceMatrix, DistanceError> {
        self.calls.set(self.calls.get() + 1);
        self.last_len.set(points.len());
        self.inner.matrix_for(points)
    }
}
