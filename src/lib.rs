//! day-route-planner
//!
//! Orders the attractions of a single day plan so that the total travel
//! distance stays small, using a nearest-neighbor heuristic over a pairwise
//! distance matrix supplied by an external routing service.

pub mod error;
pub mod traits;
pub mod point;
pub mod matrix;
pub mod route;
pub mod sequencer;
pub mod optimizer;
pub mod planner;
pub mod osrm;
pub mod google;
pub mod haversine;

pub use error::{DistanceError, Error, Result};
pub use matrix::DistanceMatrix;
pub use point::{Accommodation, Point};
pub use route::{LegDistance, Route, RouteStep};
