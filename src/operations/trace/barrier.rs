//! Barrier assessment for reach traces.
//!
//! A barrier is a point obstacle (weir, culvert, dam) that blocks travel
//! along a course. A candidate segment is assessed once, when it first
//! connects to the reach: the first barrier lying within the buffer radius
//! of its course decides where the course is clipped.

use crate::geometry::Polyline;
use crate::math::Point2;

/// Decision for a newly connected segment against the barrier set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrierVerdict {
    /// No barrier in reach of the course; accept it and explore past it.
    Clear,
    /// A barrier sits on the course: clip to the vertices strictly before
    /// `vertex` and stop exploring this branch.
    Cut { vertex: usize },
}

/// Assesses a candidate course against the barrier set.
///
/// The first barrier (in input order) within `radius` of the course decides
/// the verdict; its cut index is the course vertex nearest that barrier,
/// lowest index on ties. Any further barriers on the same course are
/// ignored.
#[must_use]
pub fn assess(course: &Polyline, barriers: &[Point2], radius: f64) -> BarrierVerdict {
    let Some(hit) = barriers
        .iter()
        .find(|barrier| course.distance_to_point(barrier) <= radius)
    else {
        return BarrierVerdict::Clear;
    };

    match course.nearest_vertex(hit) {
        Some(vertex) => BarrierVerdict::Cut { vertex },
        None => BarrierVerdict::Clear,
    }
}

// ──────────────────────────────── tests ────────────────────────────────
