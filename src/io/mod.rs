//! Reading and writing product footprints.
//!
//! - `geojson` - GeoJSON FeatureCollections of Polygon / MultiPolygon footprints

mod geojson;

pub use geojson::{read_products_geojson, write_products_geojson};

use std::{fs, path::Path};

use anyhow::{bail, Context, Result};

use crate::product::Product;

/// Read products from a GeoJSON file.
pub fn read_products(path: &Path) -> Result<Vec<Product>> {
    let bytes = fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    read_products_geojson(&bytes).with_context(|| format!("Failed to load products from {}", path.display()))
}

/// Write products to a GeoJSON file, refusing to overwrite unless `force` is set.
pub fn write_products<'a>(path: &Path, products: impl IntoIterator<Item = &'a Product>, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!("Output file {} already exists (use --force to overwrite)", path.display());
    }
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let bytes = write_products_geojson(products)?;
    fs::write(path, bytes).with_context(|| format!("Failed to write {}", path.display()))
}
