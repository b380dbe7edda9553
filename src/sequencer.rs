//! Nearest-neighbor sequencing from a fixed start.

use tracing::warn;

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::route::{LegDistance, Route, RouteStep};

/// Builds a visiting order starting at `start` by always stepping to the
/// closest unvisited point.
///
/// Ties go to the lowest index. When every remaining point is unreachable
/// from the current one, the lowest unvisited index is taken and the leg is
/// recorded as [`LegDistance::Unreachable`], so the route always covers every
/// point exactly once.
pub fn sequence<T: Clone>(points: &[T], matrix: &DistanceMatrix, start: usize) -> Result<Route<T>> {
    validate(points.len(), matrix)?;
    if start >= points.len() {
        return Err(Error::invalid_input(format!(
            "start index {} out of range for {} points",
            start,
            points.len()
        )));
    }

    Ok(sequence_unchecked(points, matrix, start))
}

pub(crate) fn validate(len: usize, matrix: &DistanceMatrix) -> Result<()> {
    if len == 0 {
        return Err(Error::invalid_input("at least one point is required"));
    }
    if matrix.size() != len {
        return Err(Error::invalid_input(format!(
            "matrix covers {} points, expected {}",
            matrix.size(),
            len
        )));
    }
    Ok(())
}

/// Caller guarantees `points` is non-empty, matches the matrix and `start` is in range.
pub(crate) fn sequence_unchecked<T: Clone>(points: &[T], matrix: &DistanceMatrix, start: usize) -> Route<T> {
    let n = points.len();
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);
    let mut legs: Vec<LegDistance> = Vec::with_capacity(n.saturating_sub(1));
    let mut total = 0u64;

    visited[start] = true;
    order.push(start);
    let mut current = start;

    while order.len() < n {
        let (next, leg) = nearest_unvisited(matrix.row(current), &visited);

        match leg {
            LegDistance::Meters(meters) => total += meters,
            LegDistance::Unreachable => {
                warn!(from = current, to = next, "no route between points, leg counted as zero");
            }
        }

        legs.push(leg);
        visited[next] = true;
        order.push(next);
        current = next;
    }

    let steps = order
        .iter()
        .enumerate()
        .map(|(position, &index)| RouteStep {
            attraction: points[index].clone(),
            distance_to_next: legs.get(position).copied(),
        })
        .collect();

    Route {
        steps,
        total_distance: total,
    }
}

/// Picks the next index from `row`. At least one entry of `visited` must be false.
fn nearest_unvisited(row: &[Option<u64>], visited: &[bool]) -> (usize, LegDistance) {
    let mut best: Option<(usize, u64)> = None;
    let mut first_unvisited: Option<usize> = None;

    for (index, distance) in row.iter().enumerate() {
        if visited[index] {
            continue;
        }
        first_unvisited.get_or_insert(index);

        if let Some(distance) = *distance {
            // Strict comparison keeps the lowest index on ties.
            if best.is_none_or(|(_, best_distance)| distance < best_distance) {
                best = Some((index, distance));
            }
        }
    }

    match (best, first_unvisited) {
        (Some((index, distance)), _) => (index, LegDistance::Meters(distance)),
        (None, Some(index)) => (index, LegDistance::Unreachable),
        (None, None) => unreachable!("nearest_unvisited called with every point visited"),
    }
}
