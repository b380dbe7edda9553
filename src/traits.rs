//! Core domain traits for the day-route planner.
//!
//! These are intentionally minimal. Services that own attractions, day plans
//! and trip groups implement them for their own data models.

use std::hash::Hash;

use crate::error::{DistanceError, Result};
use crate::matrix::DistanceMatrix;
use crate::point::{Accommodation, Point};

/// Unique identifier for planner entities.
pub trait Id: Clone + Eq + Hash {}

impl<T> Id for T where T: Clone + Eq + Hash {}

/// A schedulable point of interest.
pub trait Attraction {
    type Id: Id;

    /// Persistent identifier. `None` for points that were never stored.
    fn id(&self) -> Option<&Self::Id>;

    fn location(&self) -> Point;
}

/// The attractions scheduled for one day of a trip.
pub trait DayPlan {
    type GroupId: Id;
    type Attraction: Attraction;

    fn group_id(&self) -> &Self::GroupId;

    fn attractions(&self) -> &[Self::Attraction];

    /// Attraction the route must begin with, if the group chose one.
    fn starting_point_id(&self) -> Option<&<Self::Attraction as Attraction>::Id>;
}

/// Resolves day plans by identifier.
pub trait DayPlanRepository {
    type DayPlanId: Id + std::fmt::Debug;
    type DayPlan: DayPlan;

    /// Returns `Ok(None)` when no day plan has the given id.
    fn day_plan(&self, id: &Self::DayPlanId) -> Result<Option<Self::DayPlan>>;
}

/// Provides the accommodation of a trip group.
pub trait AccommodationProvider {
    type GroupId: Id;

    fn accommodation_for(&self, group_id: &Self::GroupId) -> Result<Option<Accommodation>>;
}

/// Provides a travel distance matrix for a set of points.
///
/// The matrix is indexed by the provided point order and must cover every
/// ordered pair, self-pairs included.
pub trait DistanceMatrixProvider {
    fn matrix_for(&self, points: &[Point]) -> std::result::Result<DistanceMatrix, DistanceError>;
}

impl<P: DistanceMatrixProvider + ?Sized> DistanceMatrixProvider for &P {
    fn matrix_for(&self, points: &[Point]) -> std::result::Result<DistanceMatrix, DistanceError> {
        (**self).matrix_for(points)
    }
}
