use crate::math::distance_2d::point_segment_distance;
use crate::math::Point2;

/// An open 2D polyline: the course geometry of one network segment.
///
/// A well-formed course has at least two vertices. Zero- and one-vertex
/// polylines are legal degenerate states (a barrier cut can shrink a course
/// that far): they have zero length and no endpoints, and never take part
/// in proximity matching.
#[derive(Debug, Clone, PartialEq)]
pub struct Polyline {
    pub vertices: Vec<Point2>,
}

impl Polyline {
    /// Creates a polyline from a vertex list.
    #[must_use]
    pub fn new(vertices: Vec<Point2>) -> Self {
        Self { vertices }
    }

    /// Creates a polyline from `(x, y)` coordinate pairs.
    #[must_use]
    pub fn from_coords<I>(coords: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let vertices = coords.into_iter().map(|(x, y)| Point2::new(x, y)).collect();
        Self { vertices }
    }

    /// Returns the first vertex, or `None` for a degenerate polyline.
    ///
    /// Degenerate courses (fewer than two vertices) have no endpoints at
    /// all, so they can never be matched by endpoint proximity.
    #[must_use]
    pub fn start_point(&self) -> Option<Point2> {
        if self.vertices.len() < 2 {
            return None;
        }
        self.vertices.first().copied()
    }

    /// Returns the last vertex, or `None` for a degenerate polyline.
    #[must_use]
    pub fn end_point(&self) -> Option<Point2> {
        if self.vertices.len() < 2 {
            return None;
        }
        self.vertices.last().copied()
    }

    /// Returns the total length: the sum of consecutive-vertex distances.
    ///
    /// Degenerate polylines contribute zero.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.vertices.windows(2).map(|w| (w[1] - w[0]).norm()).sum()
    }

    /// Returns the index of the vertex nearest to `p`.
    ///
    /// Ties resolve to the lowest index. `None` for an empty polyline.
    #[must_use]
    pub fn nearest_vertex(&self, p: &Point2) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (i, v) in self.vertices.iter().enumerate() {
            let dist_sq = (v - p).norm_squared();
            if best.is_none() || dist_sq < best.map_or(f64::MAX, |(_, d)| d) {
                best = Some((i, dist_sq));
            }
        }
        best.map(|(i, _)| i)
    }

    /// Drops every vertex at or after `index`, keeping the strict prefix.
    ///
    /// `truncate_before(0)` empties the polyline; both empty and
    /// single-vertex outcomes are legal zero-length courses.
    pub fn truncate_before(&mut self, index: usize) {
        self.vertices.truncate(index);
    }

    /// Returns the minimum distance from `p` to the polyline.
    ///
    /// Measured against the segments, not the vertex set. A single-vertex
    /// polyline measures to that vertex; an empty one is infinitely far.
    #[must_use]
    pub fn distance_to_point(&self, p: &Point2) -> f64 {
        match self.vertices.len() {
            0 => f64::INFINITY,
            1 => (self.vertices[0] - p).norm(),
            _ => self
                .vertices
                .windows(2)
                .map(|w| point_segment_distance(p, &w[0], &w[1]))
                .fold(f64::INFINITY, f64::min),
        }
    }

    /// Returns the axis-aligned bounds as `(min, max)` corners, or `None`
    /// for an empty polyline.
    #[must_use]
    pub fn bounds(&self) -> Option<(Point2, Point2)> {
        let first = *self.vertices.first()?;
        let mut min = first;
        let mut max = first;
        for v in &self.vertices[1..] {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
        }
        Some((min, max))
    }
}
