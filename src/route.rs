//! Ordered routes produced by the sequencer.

/// Distance of one leg between consecutive steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LegDistance {
    Meters(u64),
    /// The provider had no route for this leg. Counts as zero in the total.
    Unreachable,
}

impl LegDistance {
    pub fn meters(&self) -> Option<u64> {
        match self {
            LegDistance::Meters(meters) => Some(*meters),
            LegDistance::Unreachable => None,
        }
    }
}

/// One stop of a route and the leg leaving it.
#[derive(Debug, Clone, PartialEq)]
pub struct RouteStep<T> {
    pub attraction: T,
    /// `None` on the last step.
    pub distance_to_next: Option<LegDistance>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Route<T> {
    pub steps: Vec<RouteStep<T>>,
    pub total_distance: u64,
}

impl<T> Route<T> {
    pub fn empty() -> Self {
        Self {
            steps: Vec::new(),
            total_distance: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn attractions(&self) -> impl Iterator<Item = &T> {
        self.steps.iter().map(|step| &step.attraction)
    }

    pub fn into_attractions(self) -> Vec<T> {
        self.steps.into_iter().map(|step| step.attraction).collect()
    }

    /// Number of legs the provider could not route.
    pub fn unreachable_legs(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| step.distance_to_next == Some(LegDistance::Unreachable))
            .count()
    }

    /// Drops the first step together with the leg leaving it.
    pub(crate) fn without_first_step(mut self) -> Self {
        if self.steps.is_empty() {
            return self;
        }

        let first = self.steps.remove(0);
        let dropped = first
            .distance_to_next
            .and_then(|leg| leg.meters())
            .unwrap_or(0);
        self.total_distance -= dropped;
        self
    }

    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Route<U> {
        Route {
            steps: self
                .steps
                .into_iter()
                .map(|step| RouteStep {
                    attraction: f(step.attraction),
                    distance_to_next: step.distance_to_next,
                })
                .collect(),
            total_distance: self.total_distance,
        }
    }
}
