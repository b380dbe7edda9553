//! Day-plan route planning.
//!
//! Decides which optimization strategy runs for a day plan:
//!
//! - a pinned starting attraction is sequenced from that attraction,
//! - otherwise the group's accommodation is used as a routing anchor,
//! - otherwise every attraction is tried as the first stop.

use tracing::{debug, info, instrument, warn};

use crate::error::{Error, Result};
use crate::matrix::DistanceMatrix;
use crate::optimizer::{optimize_with, OptimizeOptions};
use crate::point::{extract_coordinates, Point};
use crate::route::{Route, RouteStep};
use crate::sequencer::sequence;
use crate::traits::{AccommodationProvider, Attraction, DayPlan, DayPlanRepository, DistanceMatrixProvider};

#[derive(Debug, Clone)]
pub struct PlannerOptions {
    /// Spread the multi-start search over the rayon thread pool.
    pub parallel_multi_start: bool,
}

impl Default for PlannerOptions {
    fn default() -> Self {
        Self {
            parallel_multi_start: true,
        }
    }
}

impl PlannerOptions {
    fn optimize_options(&self) -> OptimizeOptions {
        OptimizeOptions {
            parallel: self.parallel_multi_start,
        }
    }
}

/// A stop in the sequencing input: a real attraction or the accommodation anchor.
#[derive(Debug)]
enum Stop<'a, A> {
    Attraction(&'a A),
    Anchor,
}

impl<A> Clone for Stop<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A> Copy for Stop<'_, A> {}

/// Orders `attractions` trying every attraction as the first stop.
pub fn find_best_attractions_order<'a, A, M>(
    attractions: &'a [A],
    provider: &M,
    options: &PlannerOptions,
) -> Result<Route<&'a A>>
where
    A: Attraction + Sync,
    M: DistanceMatrixProvider,
{
    if attractions.is_empty() {
        return Err(Error::invalid_input("at least one attraction is required"));
    }

    let points = extract_coordinates(attractions);
    let matrix = fetch_matrix(&points, provider)?;
    let stops: Vec<&A> = attractions.iter().collect();
    optimize_with(&stops, &matrix, &options.optimize_options())
}

/// Orders `attractions` starting from the attraction at `start_index`.
pub fn find_best_attractions_order_from<'a, A, M>(
    attractions: &'a [A],
    start_index: usize,
    provider: &M,
) -> Result<Route<&'a A>>
where
    A: Attraction,
    M: DistanceMatrixProvider,
{
    if start_index >= attractions.len() {
        return Err(Error::invalid_input(format!(
            "start index {} out of range for {} attractions",
            start_index,
            attractions.len()
        )));
    }

    let points = extract_coordinates(attractions);
    let matrix = fetch_matrix(&points, provider)?;
    let stops: Vec<&A> = attractions.iter().collect();
    sequence(&stops, &matrix, start_index)
}

/// Plans the visiting order for one day.
///
/// When an accommodation anchor is used, it is removed from the returned
/// route and the leg from the accommodation to the first attraction is not
/// part of `total_distance`. An empty attraction set yields an empty route
/// without querying the provider.
pub fn plan_route<'a, A, M>(
    attractions: &'a [A],
    pinned_start: Option<&A::Id>,
    accommodation: Option<Point>,
    provider: &M,
    options: &PlannerOptions,
) -> Result<Route<&'a A>>
where
    A: Attraction + Sync,
    M: DistanceMatrixProvider,
{
    if attractions.is_empty() {
        debug!("no attractions scheduled, returning empty route");
        return Ok(Route::empty());
    }

    if let Some(pinned) = pinned_start {
        let start = match attractions.iter().position(|a| a.id() == Some(pinned)) {
            Some(index) => index,
            None => {
                warn!("pinned starting point is not among the day's attractions, starting from the first one");
                0
            }
        };
        info!(start, count = attractions.len(), "planning route from pinned start");
        return find_best_attractions_order_from(attractions, start, provider);
    }

    if let Some(anchor) = accommodation {
        info!(count = attractions.len(), "planning route from accommodation");
        return plan_from_anchor(attractions, anchor, provider);
    }

    info!(count = attractions.len(), "planning route with multi-start search");
    find_best_attractions_order(attractions, provider, options)
}

/// Resolves a day plan and its group's accommodation, then plans its route.
#[instrument(skip(day_plans, accommodations, provider, options))]
pub fn find_optimal_day_plan<R, P, M>(
    day_plan_id: &R::DayPlanId,
    day_plans: &R,
    accommodations: &P,
    provider: &M,
    options: &PlannerOptions,
) -> Result<Route<<R::DayPlan as DayPlan>::Attraction>>
where
    R: DayPlanRepository,
    P: AccommodationProvider<GroupId = <R::DayPlan as DayPlan>::GroupId>,
    M: DistanceMatrixProvider,
    <R::DayPlan as DayPlan>::Attraction: Clone + Sync,
{
    let day_plan = day_plans
        .day_plan(day_plan_id)?
        .ok_or_else(|| Error::DayPlanNotFound(format!("{:?}", day_plan_id)))?;

    let pinned_start = day_plan.starting_point_id();
    let accommodation = if pinned_start.is_none() {
        accommodations
            .accommodation_for(day_plan.group_id())?
            .and_then(|accommodation| accommodation.point())
    } else {
        None
    };

    let route = plan_route(
        day_plan.attractions(),
        pinned_start,
        accommodation,
        provider,
        options,
    )?;

    Ok(route.map(|attraction| attraction.clone()))
}

fn plan_from_anchor<'a, A, M>(attractions: &'a [A], anchor: Point, provider: &M) -> Result<Route<&'a A>>
where
    A: Attraction,
    M: DistanceMatrixProvider,
{
    let mut points = extract_coordinates(attractions);
    points.push(anchor);
    let matrix = fetch_matrix(&points, provider)?;

    let mut stops: Vec<Stop<'a, A>> = attractions.iter().map(Stop::Attraction).collect();
    stops.push(Stop::Anchor);
    let anchor_index = stops.len() - 1;

    let route = sequence(&stops, &matrix, anchor_index)?.without_first_step();

    let steps = route
        .steps
        .into_iter()
        .filter_map(|step| match step.attraction {
            Stop::Attraction(attraction) => Some(RouteStep {
                attraction,
                distance_to_next: step.distance_to_next,
            }),
            Stop::Anchor => None,
        })
        .collect();

    Ok(Route {
        steps,
        total_distance: route.total_distance,
    })
}

fn fetch_matrix<M: DistanceMatrixProvider>(points: &[Point], provider: &M) -> Result<DistanceMatrix> {
    debug!(points = points.len(), "requesting distance matrix");
    let matrix = provider.matrix_for(points)?;
    matrix.ensure_size(points.len())?;
    Ok(matrix)
}
