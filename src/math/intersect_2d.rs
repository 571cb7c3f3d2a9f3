use super::{Point2, TOLERANCE};

/// Bounded segment-segment crossing test in 2D.
///
/// Returns `true` if segments `a0`–`a1` and `b0`–`b1` intersect. Parallel
/// segments (including collinear overlaps) report no intersection.
#[must_use]
pub fn segments_intersect_2d(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    let da = a1 - a0;
    let db = b1 - b0;

    let cross = da.x * db.y - da.y * db.x;
    if cross.abs() < TOLERANCE {
        return false;
    }

    let dx = b0.x - a0.x;
    let dy = b0.y - a0.y;
    let t = (dx * db.y - dy * db.x) / cross;
    let u = (dx * da.y - dy * da.x) / cross;

    // Use a small epsilon to include endpoint touches.
    let eps = TOLERANCE;
    t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps
}

/// Inclusive point-in-box test against corners `min`/`max`.
#[must_use]
pub fn point_in_aabb(p: &Point2, min: &Point2, max: &Point2) -> bool {
    p.x >= min.x - TOLERANCE
        && p.x <= max.x + TOLERANCE
        && p.y >= min.y - TOLERANCE
        && p.y <= max.y + TOLERANCE
}

/// Tests whether segment `a`–`b` intersects the axis-aligned box with
/// corners `min`/`max`.
///
/// True when either endpoint lies inside the box or the segment crosses one
/// of the four box edges. A segment collinear with a box edge whose
/// endpoints both lie outside the box is reported as a miss.
#[must_use]
pub fn segment_intersects_aabb(a: &Point2, b: &Point2, min: &Point2, max: &Point2) -> bool {
    if point_in_aabb(a, min, max) || point_in_aabb(b, min, max) {
        return true;
    }

    let corners = [
        Point2::new(min.x, min.y),
        Point2::new(max.x, min.y),
        Point2::new(max.x, max.y),
        Point2::new(min.x, max.y),
    ];
    (0..4).any(|i| segments_intersect_2d(a, b, &corners[i], &corners[(i + 1) % 4]))
}
