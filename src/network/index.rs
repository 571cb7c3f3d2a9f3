use rstar::{RTree, RTreeObject, AABB};

use super::{NetworkStore, SegmentId};
use crate::math::intersect_2d::segment_intersects_aabb;
use crate::math::Point2;

/// An indexed segment envelope for R-tree storage.
#[derive(Debug, Clone)]
struct IndexedSegment {
    id: SegmentId,
    min: [f64; 2],
    max: [f64; 2],
}

impl RTreeObject for IndexedSegment {
    type Envelope = AABB<[f64; 2]>;

    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.min, self.max)
    }
}

/// Spatial index over segment course envelopes.
///
/// Backs the traversal's neighbour lookup: given a square query box around
/// an endpoint, returns every segment whose course intersects the box. The
/// R-tree narrows candidates by envelope; an exact segment-box test against
/// the store's current geometry filters out envelope-only overlaps.
///
/// Degenerate courses (fewer than two vertices) are never indexed and never
/// match.
#[derive(Debug)]
pub struct SegmentIndex {
    tree: RTree<IndexedSegment>,
}

impl SegmentIndex {
    /// Builds an index over the current course geometry of every segment in
    /// `store`.
    #[must_use]
    pub fn build(store: &NetworkStore) -> Self {
        let entries: Vec<IndexedSegment> = store
            .iter()
            .filter_map(|(id, data)| {
                if data.geometry.vertices.len() < 2 {
                    return None;
                }
                let (min, max) = data.geometry.bounds()?;
                Some(IndexedSegment {
                    id,
                    min: [min.x, min.y],
                    max: [max.x, max.y],
                })
            })
            .collect();
        Self {
            tree: RTree::bulk_load(entries),
        }
    }

    /// Returns the ids of all segments whose course intersects the square
    /// box centred on `center` with half-width `half_width` on each axis.
    ///
    /// The result is a candidate set in no particular order, and may
    /// include the segment the caller is exploring from.
    #[must_use]
    pub fn segments_in_box(
        &self,
        store: &NetworkStore,
        center: Point2,
        half_width: f64,
    ) -> Vec<SegmentId> {
        let min = Point2::new(center.x - half_width, center.y - half_width);
        let max = Point2::new(center.x + half_width, center.y + half_width);
        let query = AABB::from_corners([min.x, min.y], [max.x, max.y]);

        self.tree
            .locate_in_envelope_intersecting(&query)
            .filter(|entry| {
                store.segment(entry.id).is_ok_and(|data| {
                    data.geometry
                        .vertices
                        .windows(2)
                        .any(|w| segment_intersects_aabb(&w[0], &w[1], &min, &max))
                })
            })
            .map(|entry| entry.id)
            .collect()
    }
}
