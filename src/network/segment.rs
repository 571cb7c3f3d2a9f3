use crate::geometry::Polyline;

slotmap::new_key_type! {
    /// Unique identifier for a segment in the network store.
    pub struct SegmentId;
}

/// Data associated with a network segment.
///
/// A segment is one linear network element — a reach of river, a ditch, a
/// road link. Its course geometry is the only payload the analysis reads;
/// source attributes (feature ids, names) stay with whatever loaded the
/// network.
#[derive(Debug, Clone)]
pub struct SegmentData {
    /// The course geometry of the segment.
    pub geometry: Polyline,
}

impl SegmentData {
    /// Creates a new segment with the given course geometry.
    #[must_use]
    pub fn new(geometry: Polyline) -> Self {
        Self { geometry }
    }
}
