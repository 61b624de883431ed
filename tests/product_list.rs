// Integration tests for ProductList filtering and GeoJSON files.

use geo::{LineString, Polygon, polygon};

use footprint::{
    FilterError, Footprint, Product, ProductFilter, ProductList, SelectionRect,
    intersects, read_products, write_products,
};

/// A 6x6 grid alternating squares and triangles.
fn grid() -> ProductList {
    (0..36).map(|i| {
        let (x, y) = ((i % 6) as f64 * 7.0, (i / 6) as f64 * 7.0);
        let footprint = if i % 2 == 0 {
            Footprint::from_coords([(x, y), (x + 5.0, y), (x + 5.0, y + 5.0), (x, y + 5.0)])
        } else {
            Footprint::from_coords([(x, y), (x + 6.0, y + 1.0), (x + 2.0, y + 6.0)])
        };
        Product::new(format!("p{i:02}"), footprint.unwrap())
    }).collect()
}

#[test]
fn spatial_index_agrees_with_linear_scan() {
    let list = grid();
    for sx in 0..10 {
        for sy in 0..10 {
            for size in [0.0, 0.5, 3.0, 9.0] {
                let selection = SelectionRect::new(sx as f64 * 4.3 - 1.0, sy as f64 * 4.3 - 1.0, size, size * 0.7).unwrap();
                let expected: Vec<usize> = list.iter().enumerate()
                    .filter(|(_, p)| intersects(p.footprint(), &selection))
                    .map(|(i, _)| i)
                    .collect();
                assert_eq!(list.matching(ProductFilter::Intersect, Some(&selection)).unwrap(), expected,
                    "selection {selection}");
            }
        }
    }
}

#[test]
fn stray_hole_ring_is_not_skipped_by_the_index() {
    // The hole lies outside the exterior; its vertices still count.
    let footprint = Footprint::from_polygon(polygon!(
        exterior: [(x: 0.0, y: 0.0), (x: 10.0, y: 0.0), (x: 10.0, y: 10.0), (x: 0.0, y: 10.0)],
        interiors: [[(x: 50.0, y: 50.0), (x: 52.0, y: 50.0), (x: 52.0, y: 52.0)]],
    )).unwrap();
    let selection = SelectionRect::new(49.0, 49.0, 5.0, 5.0).unwrap();
    assert!(intersects(&footprint, &selection));

    let list = ProductList::new(vec![Product::new("holed", footprint)]);
    assert_eq!(list.matching(ProductFilter::Intersect, Some(&selection)).unwrap(), vec![0]);
}

#[test]
fn hole_only_footprint_is_indexed() {
    let hole = LineString::from(vec![(20.0, 20.0), (24.0, 20.0), (24.0, 24.0)]);
    let footprint = Footprint::from_polygon(Polygon::new(LineString::new(vec![]), vec![hole])).unwrap();
    let list = ProductList::new(vec![Product::new("hole-only", footprint)]);

    let selection = SelectionRect::new(23.0, 19.0, 2.0, 2.0).unwrap();
    assert_eq!(list.matching(ProductFilter::Intersect, Some(&selection)).unwrap(), vec![0]);
}

#[test]
fn intersect_without_selection_is_rejected() {
    let list = grid();
    assert!(matches!(
        list.matching(ProductFilter::Intersect, None),
        Err(FilterError::MissingSelection { .. })
    ));
}

#[test]
fn empty_list_matches_nothing() {
    let list = ProductList::new(vec![]);
    let selection = SelectionRect::new(0.0, 0.0, 1.0, 1.0).unwrap();
    assert!(list.is_empty());
    assert!(list.matching(ProductFilter::Intersect, Some(&selection)).unwrap().is_empty());
    assert!(list.matching(ProductFilter::NoFilter, None).unwrap().is_empty());
}

#[test]
fn filtered_products_survive_a_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out").join("filtered.geojson");

    let list = grid();
    let selection = SelectionRect::new(0.0, 0.0, 15.0, 15.0).unwrap();
    let filtered = list.filtered(ProductFilter::Intersect, Some(&selection)).unwrap();
    assert!(!filtered.is_empty());

    write_products(&path, filtered.iter().copied(), false).unwrap();
    let reloaded = ProductList::new(read_products(&path).unwrap());

    assert_eq!(reloaded.len(), filtered.len());
    for product in &filtered {
        let idx = reloaded.index_of(product.name()).unwrap();
        assert_eq!(reloaded.get(idx).unwrap().footprint(), product.footprint());
    }
}

#[test]
fn write_refuses_to_overwrite_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("products.geojson");
    let list = grid();

    write_products(&path, list.iter(), false).unwrap();
    assert!(write_products(&path, list.iter(), false).is_err());
    write_products(&path, list.iter().take(1), true).unwrap();
    assert_eq!(read_products(&path).unwrap().len(), 1);
}

#[test]
fn missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    assert!(read_products(&dir.path().join("nope.geojson")).is_err());
}
