pub mod index;
pub mod segment;

pub use index::SegmentIndex;
pub use segment::{SegmentData, SegmentId};

use crate::error::NetworkError;
use slotmap::SlotMap;

/// Central arena that owns every segment of a network.
///
/// Segments reference each other only through geometric proximity, never
/// through stored topology, so the arena is a flat id → data mapping.
/// Generational [`SegmentId`] keys keep cross-references copyable and let
/// geometry be rewritten in place.
///
/// Coordinates are taken to be planar and in a single shared reference
/// system; the store never reprojects.
///
/// Barrier-aware traces truncate segment geometry inside this store. A
/// caller that still needs the untruncated network afterwards must take an
/// explicit copy first: `store.clone()`.
#[derive(Debug, Default, Clone)]
pub struct NetworkStore {
    segments: SlotMap<SegmentId, SegmentData>,
}

impl NetworkStore {
    /// Creates a new, empty network store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a segment and returns its ID.
    pub fn add_segment(&mut self, data: SegmentData) -> SegmentId {
        self.segments.insert(data)
    }

    /// Returns a reference to the segment data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not present in the store.
    pub fn segment(&self, id: SegmentId) -> Result<&SegmentData, NetworkError> {
        self.segments.get(id).ok_or(NetworkError::SegmentNotFound)
    }

    /// Returns a mutable reference to the segment data, or an error if not found.
    ///
    /// # Errors
    ///
    /// Returns an error if the segment is not present in the store.
    pub fn segment_mut(&mut self, id: SegmentId) -> Result<&mut SegmentData, NetworkError> {
        self.segments
            .get_mut(id)
            .ok_or(NetworkError::SegmentNotFound)
    }

    /// Returns whether the store contains a segment with this id.
    #[must_use]
    pub fn contains(&self, id: SegmentId) -> bool {
        self.segments.contains_key(id)
    }

    /// Returns the number of segments in the store.
    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns whether the store holds no segments.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterates over `(id, data)` pairs in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = (SegmentId, &SegmentData)> {
        self.segments.iter()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::geometry::Polyline;

    #[test]
    fn add_and_fetch_segment() {
        let mut store = NetworkStore::new();
        let id = store.add_segment(SegmentData::new(Polyline::from_coords([
            (0.0, 0.0),
            (1.0, 0.0),
        ])));

        assert!(store.contains(id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.segment(id).unwrap().geometry.vertices.len(), 2);
    }

    #[test]
    fn fetch_missing_segment_errors() {
        let mut scratch = NetworkStore::new();
        let foreign = scratch.add_segment(SegmentData::new(Polyline::from_coords([
            (0.0, 0.0),
            (1.0, 0.0),
        ])));

        let store = NetworkStore::new();
        assert!(store.segment(foreign).is_err());
        assert!(!store.contains(foreign));
    }

    #[test]
    fn mutate_geometry_in_place() {
        let mut store = NetworkStore::new();
        let id = store.add_segment(SegmentData::new(Polyline::from_coords([
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
        ])));

        store.segment_mut(id).unwrap().geometry.truncate_before(1);
        assert_eq!(store.segment(id).unwrap().geometry.vertices.len(), 1);
    }

    #[test]
    fn clone_is_independent_of_original() {
        let mut store = NetworkStore::new();
        let id = store.add_segment(SegmentData::new(Polyline::from_coords([
            (0.0, 0.0),
            (1.0, 0.0),
            (2.0, 0.0),
        ])));

        let mut copy = store.clone();
        copy.segment_mut(id).unwrap().geometry.truncate_before(0);

        assert!(copy.segment(id).unwrap().geometry.vertices.is_empty());
        assert_eq!(store.segment(id).unwrap().geometry.vertices.len(), 3);
    }
}
