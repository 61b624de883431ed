use std::sync::Arc;

use ahash::AHashMap;
use anyhow::{anyhow, Result};
use geo::Polygon;
use rstar::RTree;

use crate::filter::{FilterError, FilterItems, ProductFilter};
use crate::geom::{BoundingBox, SelectionRect};
use super::Product;

/// An ordered list of products with a spatial index over their footprints.
#[derive(Debug, Clone)]
pub struct ProductList {
    products: Vec<Product>,
    index: AHashMap<Arc<str>, usize>, // First occurrence of each product name
    rtree: RTree<BoundingBox>,
}

impl ProductList {
    /// Construct a ProductList, keeping the given order.
    pub fn new(products: Vec<Product>) -> Self {
        let mut index = AHashMap::with_capacity(products.len());
        for (i, product) in products.iter().enumerate() {
            index.entry(Arc::from(product.name())).or_insert(i);
        }

        Self {
            rtree: RTree::bulk_load(products.iter().enumerate()
                .map(|(i, product)| BoundingBox::new(i, product.footprint().bounds()))
                .collect()),
            index,
            products,
        }
    }

    /// Get the number of products.
    #[inline] pub fn len(&self) -> usize { self.products.len() }

    /// Check if there are no products.
    #[inline] pub fn is_empty(&self) -> bool { self.products.is_empty() }

    #[inline] pub fn get(&self, index: usize) -> Option<&Product> { self.products.get(index) }

    #[inline] pub fn iter(&self) -> impl Iterator<Item = &Product> { self.products.iter() }

    /// Position of the first product called `name`.
    #[inline] pub fn index_of(&self, name: &str) -> Option<usize> { self.index.get(name).copied() }

    /// Indices of the products passing `filter`, in list order.
    ///
    /// Only products whose footprint bounds touch the selection are evaluated;
    /// a footprint whose bounds miss the selection cannot contain one of its
    /// corners, nor have a vertex inside it.
    pub fn matching(&self, filter: ProductFilter, selection: Option<&SelectionRect>) -> Result<Vec<usize>, FilterError> {
        if filter.is_no_op() {
            return Ok((0..self.len()).collect());
        }

        let selection = selection.ok_or(FilterError::MissingSelection { filter: filter.to_str() })?;

        let mut hits = Vec::new();
        let mut candidates = 0;
        for bbox in self.rtree.locate_in_envelope_intersecting(&selection.envelope()) {
            candidates += 1;
            let product = &self.products[bbox.idx()];
            if FilterItems::<Product, SelectionRect>::matches(&filter, product, Some(selection))? {
                hits.push(bbox.idx());
            }
        }
        hits.sort_unstable();

        log::debug!("[filter] {filter} on {selection}: {candidates} candidates, {} of {} matched",
            hits.len(), self.len());

        Ok(hits)
    }

    /// Products passing `filter`, in list order.
    pub fn filtered(&self, filter: ProductFilter, selection: Option<&SelectionRect>) -> Result<Vec<&Product>, FilterError> {
        Ok(self.matching(filter, selection)?.into_iter().map(|i| &self.products[i]).collect())
    }

    /// Every path of every footprint, in list order.
    pub fn footprint_paths(&self) -> impl Iterator<Item = &Polygon<f64>> {
        self.products.iter().flat_map(|product| product.footprint().paths())
    }

    /// For each path picked on a map, the index of the first product owning an equal path.
    pub fn select_by_paths(&self, paths: &[Polygon<f64>]) -> Result<Vec<usize>> {
        paths.iter()
            .map(|path| {
                self.products.iter()
                    .position(|product| product.footprint().paths().contains(path))
                    .ok_or_else(|| anyhow!("Footprint path does not exist in the list"))
            })
            .collect()
    }

    /// Bounding rectangle of the first footprint path of product `index`,
    /// used to seed a new search around that product.
    pub fn area_of_interest(&self, index: usize) -> Option<SelectionRect> {
        let bounds = self.products.get(index)?.footprint().path_bounds(0)?;
        SelectionRect::from_rect(bounds).ok()
    }
}

impl FromIterator<Product> for ProductList {
    fn from_iter<T: IntoIterator<Item = Product>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
