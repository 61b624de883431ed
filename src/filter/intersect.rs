use crate::geom::{Footprint, SelectionRect};

/// Corner/vertex sampling intersection test.
///
/// True iff the footprint contains one of the selection's corners (top-left,
/// top-right, bottom-right, bottom-left, in that order) or the selection
/// contains one of the footprint's vertices. This is not a clipping test: an
/// edge that slices through the selection without a vertex or corner landing
/// inside the other shape is reported as disjoint, and callers rely on that.
pub fn intersects(footprint: &Footprint, selection: &SelectionRect) -> bool {
    selection.corners().into_iter().any(|corner| footprint.contains(corner))
        || footprint.vertices().any(|vertex| selection.contains(vertex))
}
