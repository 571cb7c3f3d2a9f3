use super::{Point2, TOLERANCE};

/// Returns the minimum distance from point `p` to the line segment `a`–`b`.
#[must_use]
pub fn point_segment_distance(p: &Point2, a: &Point2, b: &Point2) -> f64 {
    let d = b - a;
    let len_sq = d.norm_squared();

    // A zero-length segment collapses to the point `a`.
    if len_sq < TOLERANCE * TOLERANCE {
        return (p - a).norm();
    }

    // Parameter of the projection along a→b, clamped to the segment.
    let t = ((p - a).dot(&d) / len_sq).clamp(0.0, 1.0);
    let closest = a + d * t;
    (p - closest).norm()
}
