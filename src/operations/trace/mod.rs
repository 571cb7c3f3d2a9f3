//! Reach tracing over a segment network.
//!
//! A trace starts from one segment and repeatedly connects neighbours by
//! endpoint proximity, travelling either upstream or downstream. There is
//! no prebuilt topology: adjacency is re-derived from geometry at every
//! step, so networks digitized without shared nodes still chain together
//! as long as endpoints meet within the connection tolerance.

mod barrier;

use std::collections::{HashSet, VecDeque};

use barrier::BarrierVerdict;

use crate::error::{Result, TraceError};
use crate::geometry::Polyline;
use crate::math::Point2;
use crate::network::{NetworkStore, SegmentId, SegmentIndex};

/// Default connection tolerance, in network units.
pub const DEFAULT_TOLERANCE: f64 = 0.1;

/// Default barrier buffer radius, in network units.
///
/// Suits networks in metre-scale projected coordinates. The radius is a
/// fixed distance, deliberately independent of the connection tolerance,
/// and the default is provisional: callers with differently scaled data
/// should set their own via
/// [`TraceReachWithBarriers::with_barrier_radius`].
pub const DEFAULT_BARRIER_RADIUS: f64 = 1.0;

/// Travel direction of a trace through the network.
///
/// Segment vertices are assumed digitized in downstream order, so the
/// first vertex of a course is its upstream end and the last its
/// downstream end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowDirection {
    /// Walk against the digitized vertex order.
    Upstream,
    /// Walk along the digitized vertex order.
    Downstream,
}

impl FlowDirection {
    /// The endpoint of the segment under exploration where neighbours are
    /// sought: first vertex travelling upstream, last vertex travelling
    /// downstream. `None` when the course has no endpoints.
    #[must_use]
    pub fn leading_point(self, course: &Polyline) -> Option<Point2> {
        match self {
            Self::Upstream => course.start_point(),
            Self::Downstream => course.end_point(),
        }
    }

    /// The endpoint of a candidate segment that must meet the leading
    /// point of the segment under exploration. The opposite convention to
    /// [`Self::leading_point`], so that courses chain head to tail.
    #[must_use]
    pub fn trailing_point(self, course: &Polyline) -> Option<Point2> {
        match self {
            Self::Upstream => course.end_point(),
            Self::Downstream => course.start_point(),
        }
    }
}

/// The result of a trace: every segment reached, and their summed length.
#[derive(Debug, Clone)]
pub struct Reach {
    /// Ids of the reached segments, in acceptance order starting with the
    /// start segment. Treat as a set; the order is an artefact of the
    /// breadth-first exploration.
    pub segments: Vec<SegmentId>,
    /// Total course length of the reached segments, in network units.
    /// Reflects clipped geometry where a barrier cut applied.
    pub total_length: f64,
}

impl Reach {
    fn empty() -> Self {
        Self {
            segments: Vec::new(),
            total_length: 0.0,
        }
    }

    /// Returns whether the trace reached no segments at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns whether `id` was reached.
    #[must_use]
    pub fn contains(&self, id: SegmentId) -> bool {
        self.segments.contains(&id)
    }

    /// Resolves the reached ids against a store, yielding each segment's
    /// current (possibly clipped) course.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::NetworkError::SegmentNotFound`] if a
    /// reached id is no longer present in `store`.
    pub fn courses<'a>(
        &self,
        store: &'a NetworkStore,
    ) -> Result<Vec<(SegmentId, &'a Polyline)>> {
        self.segments
            .iter()
            .map(|&id| Ok((id, &store.segment(id)?.geometry)))
            .collect()
    }
}

/// Computes the connected reach of a network from a starting segment.
///
/// Worklist search over implicit adjacency: a candidate joins the reach
/// when its trailing endpoint lies within the tolerance of the leading
/// endpoint of a segment already reached. The tolerance check is
/// inclusive, and candidates are gathered through a square window of the
/// spatial index before the exact endpoint distance is measured.
///
/// The traversal never mutates the store; see [`TraceReachWithBarriers`]
/// for the variant that clips courses at barrier points.
#[derive(Debug)]
pub struct TraceReach {
    start: SegmentId,
    direction: FlowDirection,
    tolerance: f64,
}

impl TraceReach {
    /// Creates a trace from `start` travelling in `direction`, with the
    /// default connection tolerance.
    #[must_use]
    pub fn new(start: SegmentId, direction: FlowDirection) -> Self {
        Self {
            start,
            direction,
            tolerance: DEFAULT_TOLERANCE,
        }
    }

    /// Sets the connection tolerance (inclusive), in network units.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Executes the trace.
    ///
    /// A `start` id that is not in the store yields an empty reach, not an
    /// error: the reachable set of an unknown segment is empty.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidTolerance`] if the tolerance is
    /// negative or not finite.
    pub fn execute(&self, store: &NetworkStore) -> Result<Reach> {
        check_tolerance(self.tolerance)?;

        if !store.contains(self.start) {
            tracing::debug!("start segment {:?} not in store; empty reach", self.start);
            return Ok(Reach::empty());
        }

        let index = SegmentIndex::build(store);

        let mut selected = Vec::new();
        let mut visited = HashSet::new();
        let mut frontier = VecDeque::new();

        // Every id in the frontier is already marked visited, the start
        // included.
        visited.insert(self.start);
        selected.push(self.start);
        frontier.push_back(self.start);

        while let Some(current) = frontier.pop_front() {
            let Some(lead) = self
                .direction
                .leading_point(&store.segment(current)?.geometry)
            else {
                // Degenerate course: nothing to explore from.
                continue;
            };

            for candidate in index.segments_in_box(store, lead, self.tolerance) {
                if visited.contains(&candidate) {
                    continue;
                }
                let course = &store.segment(candidate)?.geometry;
                let Some(far) = self.direction.trailing_point(course) else {
                    continue;
                };
                if (far - lead).norm() <= self.tolerance {
                    visited.insert(candidate);
                    selected.push(candidate);
                    frontier.push_back(candidate);
                }
            }
        }

        let total_length = reach_length(store, &selected)?;
        Ok(Reach {
            segments: selected,
            total_length,
        })
    }
}

/// Computes the connected reach of a network, with barrier points that
/// block propagation.
///
/// Runs the same worklist search as [`TraceReach`], but every newly
/// connected segment is assessed against the barrier set before it is
/// explored further. A segment with a barrier within the buffer radius of
/// its course is clipped in place to the vertices before the one nearest
/// the barrier, contributes only the clipped length, and ends its branch
/// of the exploration. Barriers are only assessed for segments reached as
/// neighbours; a barrier sitting on the start segment does not clip it.
///
/// The clip writes through to the store, hence the `&mut` receiver. Clone
/// the store first to keep an unclipped copy. Re-running over an
/// already-clipped store reproduces the first result only because the
/// geometry is already cut: the operation is idempotent through its side
/// effect, not pure.
#[derive(Debug)]
pub struct TraceReachWithBarriers {
    start: SegmentId,
    direction: FlowDirection,
    barriers: Vec<Point2>,
    tolerance: f64,
    barrier_radius: f64,
}

impl TraceReachWithBarriers {
    /// Creates a trace from `start` travelling in `direction`, blocked by
    /// `barriers`, with the default tolerance and barrier radius.
    #[must_use]
    pub fn new(start: SegmentId, direction: FlowDirection, barriers: Vec<Point2>) -> Self {
        Self {
            start,
            direction,
            barriers,
            tolerance: DEFAULT_TOLERANCE,
            barrier_radius: DEFAULT_BARRIER_RADIUS,
        }
    }

    /// Sets the connection tolerance (inclusive), in network units.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the barrier buffer radius (inclusive), in network units.
    #[must_use]
    pub fn with_barrier_radius(mut self, radius: f64) -> Self {
        self.barrier_radius = radius;
        self
    }

    /// Executes the trace, clipping barred courses in `store`.
    ///
    /// With an empty barrier set this selects exactly what [`TraceReach`]
    /// selects and leaves the store untouched. A `start` id that is not in
    /// the store yields an empty reach, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::InvalidTolerance`] or
    /// [`TraceError::InvalidBarrierRadius`] if the corresponding knob is
    /// negative or not finite. Both are checked before any traversal work.
    pub fn execute(&self, store: &mut NetworkStore) -> Result<Reach> {
        check_tolerance(self.tolerance)?;
        if !(self.barrier_radius.is_finite() && self.barrier_radius >= 0.0) {
            return Err(TraceError::InvalidBarrierRadius(self.barrier_radius).into());
        }

        if !store.contains(self.start) {
            tracing::debug!("start segment {:?} not in store; empty reach", self.start);
            return Ok(Reach::empty());
        }

        let index = SegmentIndex::build(store);

        let mut selected = Vec::new();
        let mut visited = HashSet::new();
        let mut frontier = VecDeque::new();

        visited.insert(self.start);
        selected.push(self.start);
        frontier.push_back(self.start);

        while let Some(current) = frontier.pop_front() {
            let Some(lead) = self
                .direction
                .leading_point(&store.segment(current)?.geometry)
            else {
                continue;
            };

            for candidate in index.segments_in_box(store, lead, self.tolerance) {
                if visited.contains(&candidate) {
                    continue;
                }
                let course = &store.segment(candidate)?.geometry;
                let Some(far) = self.direction.trailing_point(course) else {
                    continue;
                };
                if (far - lead).norm() > self.tolerance {
                    continue;
                }

                match barrier::assess(course, &self.barriers, self.barrier_radius) {
                    BarrierVerdict::Clear => {
                        visited.insert(candidate);
                        selected.push(candidate);
                        frontier.push_back(candidate);
                    }
                    BarrierVerdict::Cut { vertex } => {
                        tracing::debug!(
                            "barrier clips segment {:?} before vertex {}",
                            candidate,
                            vertex
                        );
                        store.segment_mut(candidate)?.geometry.truncate_before(vertex);
                        // Selected but not enqueued: the reach ends here.
                        visited.insert(candidate);
                        selected.push(candidate);
                    }
                }
            }
        }

        let total_length = reach_length(store, &selected)?;
        Ok(Reach {
            segments: selected,
            total_length,
        })
    }
}

fn check_tolerance(tolerance: f64) -> Result<()> {
    if tolerance.is_finite() && tolerance >= 0.0 {
        Ok(())
    } else {
        Err(TraceError::InvalidTolerance(tolerance).into())
    }
}

/// Sums the current course length of every selected segment.
fn reach_length(store: &NetworkStore, segments: &[SegmentId]) -> Result<f64> {
    let mut total = 0.0;
    for &id in segments {
        total += store.segment(id)?.geometry.length();
    }
    Ok(total)
}

// ──────────────────────────────── tests ────────────────────────────────
