//! Multi-start search over every possible first point.

use rayon::prelude::*;
use tracing::debug;

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::route::Route;
use crate::sequencer::{sequence_unchecked, validate};

#[derive(Debug, Clone)]
pub struct OptimizeOptions {
    /// Run the per-start sequences on the rayon thread pool.
    pub parallel: bool,
}

impl Default for OptimizeOptions {
    fn default() -> Self {
        Self { parallel: true }
    }
}

/// Runs the sequencer from every start and keeps the shortest route.
///
/// On equal totals the lowest start index wins, in parallel mode as well.
pub fn optimize<T>(points: &[T], matrix: &DistanceMatrix) -> Result<Route<T>>
where
    T: Clone + Send + Sync,
{
    optimize_with(points, matrix, &OptimizeOptions::default())
}

pub fn optimize_with<T>(points: &[T], matrix: &DistanceMatrix, options: &OptimizeOptions) -> Result<Route<T>>
where
    T: Clone + Send + Sync,
{
    validate(points.len(), matrix)?;

    let best = if options.parallel {
        (0..points.len())
            .into_par_iter()
            .map(|start| (start, sequence_unchecked(points, matrix, start)))
            .reduce_with(pick_shorter)
    } else {
        (0..points.len())
            .map(|start| (start, sequence_unchecked(points, matrix, start)))
            .reduce(pick_shorter)
    };
    let Some((start, route)) = best else {
        return Err(Error::invalid_input("at least one point is required"));
    };

    debug!(start, total_distance = route.total_distance, "multi-start picked best route");
    Ok(route)
}

fn pick_shorter<T>(a: (usize, Route<T>), b: (usize, Route<T>)) -> (usize, Route<T>) {
    if (b.1.total_distance, b.0) < (a.1.total_distance, a.0) {
        b
    } else {
        a
    }
}
