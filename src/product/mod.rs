mod list;

pub use list::ProductList;

use std::sync::Arc;

use serde_json::{Map, Value};

use crate::geom::Footprint;

/// A remote-sensing product as seen by the product list.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    name: Arc<str>,
    footprint: Footprint,
    properties: Map<String, Value>, // Passed through untouched from the source feature
}

impl Product {
    pub fn new(name: impl Into<Arc<str>>, footprint: Footprint) -> Self {
        Self { name: name.into(), footprint, properties: Map::new() }
    }

    /// Attach source properties (acquisition date, mission, ...).
    pub fn with_properties(mut self, properties: Map<String, Value>) -> Self {
        self.properties = properties;
        self
    }

    #[inline] pub fn name(&self) -> &str { &self.name }

    #[inline] pub fn footprint(&self) -> &Footprint { &self.footprint }

    #[inline] pub fn properties(&self) -> &Map<String, Value> { &self.properties }
}
