use geo::{Contains, Coord, LineString, MultiPolygon, Polygon, Rect};

use crate::filter::FilterError;

/// Geographic outline of a product: one or more closed paths.
///
/// A footprint always carries at least one vertex, so its bounds are always
/// defined. Each path is a `geo::Polygon` (exterior ring plus optional holes);
/// rings are closed implicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct Footprint {
    shape: MultiPolygon<f64>,
    bounds: Rect<f64>,
}

impl Footprint {
    /// Construct a footprint from a MultiPolygon, rejecting one with no vertices.
    ///
    /// Bounds cover every ring, holes included, even where a hole strays
    /// outside its exterior.
    pub fn new(shape: MultiPolygon<f64>) -> Result<Self, FilterError> {
        let bounds = ring_bounds(shape.0.iter().flat_map(rings))
            .ok_or(FilterError::EmptyFootprint)?;
        Ok(Self { shape, bounds })
    }

    /// Single-path footprint.
    pub fn from_polygon(polygon: Polygon<f64>) -> Result<Self, FilterError> {
        Self::new(MultiPolygon(vec![polygon]))
    }

    /// Single-path footprint from a ring of `(x, y)` vertices, without holes.
    pub fn from_coords(coords: impl IntoIterator<Item = (f64, f64)>) -> Result<Self, FilterError> {
        let ring: LineString<f64> = coords.into_iter().map(|(x, y)| Coord { x, y }).collect();
        Self::from_polygon(Polygon::new(ring, vec![]))
    }

    /// Get the paths making up this footprint.
    #[inline] pub fn paths(&self) -> &[Polygon<f64>] { &self.shape.0 }

    /// Get the number of paths.
    #[inline] pub fn path_count(&self) -> usize { self.shape.0.len() }

    /// Get the underlying MultiPolygon.
    #[inline] pub fn shape(&self) -> &MultiPolygon<f64> { &self.shape }

    /// Bounding rectangle of every path.
    #[inline] pub fn bounds(&self) -> Rect<f64> { self.bounds }

    /// Bounding rectangle of every ring of path `index`.
    pub fn path_bounds(&self, index: usize) -> Option<Rect<f64>> {
        ring_bounds(rings(self.shape.0.get(index)?))
    }

    /// Every vertex along every ring (exterior and holes) of every path.
    pub fn vertices(&self) -> impl Iterator<Item = Coord<f64>> + '_ {
        self.shape.0.iter()
            .flat_map(rings)
            .flat_map(|ring| ring.coords().copied())
    }

    /// Returns true iff the interior of any path contains `p`.
    pub fn contains(&self, p: Coord<f64>) -> bool {
        self.shape.0.iter().any(|polygon| polygon.contains(&p))
    }
}

/// Exterior ring followed by the holes.
fn rings(polygon: &Polygon<f64>) -> impl Iterator<Item = &LineString<f64>> {
    std::iter::once(polygon.exterior()).chain(polygon.interiors())
}

/// Smallest rectangle holding every vertex of `rings`, `None` when there are none.
fn ring_bounds<'a>(rings: impl Iterator<Item = &'a LineString<f64>>) -> Option<Rect<f64>> {
    rings.flat_map(|ring| ring.coords())
        .fold(None, |bounds: Option<(Coord<f64>, Coord<f64>)>, c| match bounds {
            None => Some((*c, *c)),
            Some((min, max)) => Some((
                Coord { x: min.x.min(c.x), y: min.y.min(c.y) },
                Coord { x: max.x.max(c.x), y: max.y.max(c.y) },
            )),
        })
        .map(|(min, max)| Rect::new(min, max))
}

impl TryFrom<MultiPolygon<f64>> for Footprint {
    type Error = FilterError;

    fn try_from(shape: MultiPolygon<f64>) -> Result<Self, Self::Error> { Self::new(shape) }
}

impl TryFrom<Polygon<f64>> for Footprint {
    type Error = FilterError;

    fn try_from(polygon: Polygon<f64>) -> Result<Self, Self::Error> { Self::from_polygon(polygon) }
}

#[cfg(test)]
mod tests {
    use geo::{Coord, LineString, MultiPolygon, Polygon, polygon};

    use super::Footprint;
    use crate::filter::FilterError;

    #[test]
    fn empty_footprint_is_rejected() {
        assert!(matches!(Footprint::new(MultiPolygon(vec![])), Err(FilterError::EmptyFootprint)));
        assert!(matches!(
            Footprint::from_polygon(Polygon::new(LineString::new(vec![]), vec![])),
            Err(FilterError::EmptyFootprint)
        ));
    }

    #[test]
    fn single_vertex_footprint_is_accepted() {
        let fp = Footprint::from_coords([(1.0, 1.0)]).unwrap();
        assert_eq!(fp.path_count(), 1);
        assert!(fp.vertices().all(|v| v == Coord { x: 1.0, y: 1.0 }));
        assert!(!fp.contains(Coord { x: 1.0, y: 1.0 }));
    }

    #[test]
    fn vertices_include_holes() {
        let poly = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 4.0, y: 4.0), (x: 6.0, y: 4.0), (x: 6.0, y: 6.0), (x: 4.0, y: 6.0)]],
        );
        let fp = Footprint::from_polygon(poly).unwrap();
        assert!(fp.vertices().any(|v| v == Coord { x: 6.0, y: 6.0 }));
        assert!(fp.contains(Coord { x: 2.0, y: 2.0 }));
        assert!(!fp.contains(Coord { x: 5.0, y: 5.0 })); // inside the hole
    }

    #[test]
    fn bounds_cover_all_paths() {
        let a = polygon![(x: 0.0, y: 0.0), (x: 1.0, y: 0.0), (x: 1.0, y: 1.0)];
        let b = polygon![(x: 5.0, y: 5.0), (x: 7.0, y: 5.0), (x: 7.0, y: 8.0)];
        let fp = Footprint::new(MultiPolygon(vec![a, b])).unwrap();

        let bounds = fp.bounds();
        assert_eq!((bounds.min().x, bounds.min().y), (0.0, 0.0));
        assert_eq!((bounds.max().x, bounds.max().y), (7.0, 8.0));

        let second = fp.path_bounds(1).unwrap();
        assert_eq!((second.min().x, second.max().y), (5.0, 8.0));
        assert!(fp.path_bounds(2).is_none());
    }

    #[test]
    fn bounds_include_stray_hole_rings() {
        let poly = polygon!(
            exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
            interiors: [[(x: 50.0, y: 50.0), (x: 52.0, y: 50.0), (x: 52.0, y: 52.0)]],
        );
        let fp = Footprint::from_polygon(poly).unwrap();
        assert_eq!((fp.bounds().max().x, fp.bounds().max().y), (52.0, 52.0));
        assert_eq!(fp.path_bounds(0).unwrap(), fp.bounds());
    }

    #[test]
    fn hole_only_polygon_is_accepted() {
        let hole = LineString::from(vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
        let fp = Footprint::from_polygon(Polygon::new(LineString::new(vec![]), vec![hole])).unwrap();
        assert_eq!(fp.vertices().count(), 4);
        assert_eq!((fp.bounds().min().x, fp.bounds().max().y), (0.0, 1.0));
    }
}
