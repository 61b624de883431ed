use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Map, Value};

use crate::geom::Footprint;
use crate::product::Product;

/// Write products to GeoJSON bytes, one MultiPolygon feature per product.
pub fn write_products_geojson<'a>(products: impl IntoIterator<Item = &'a Product>) -> Result<Vec<u8>> {
    let features: Vec<Value> = products.into_iter().map(|product| {
        let polygons_json: Vec<Value> = product.footprint().paths().iter()
            .map(|polygon| {
                let rings: Vec<Vec<[f64; 2]>> = std::iter::once(polygon.exterior())
                    .chain(polygon.interiors())
                    .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
                    .collect();
                json!(rings)
            })
            .collect();

        let mut properties = product.properties().clone();
        properties.insert("name".to_string(), Value::from(product.name()));

        json!({
            "type": "Feature",
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": polygons_json,
            },
            "properties": properties,
        })
    }).collect();

    let feature_collection = json!({
        "type": "FeatureCollection",
        "features": features,
    });

    serde_json::to_vec(&feature_collection).context("Failed to serialize GeoJSON to bytes")
}

/// Read products from GeoJSON FeatureCollection bytes.
///
/// Features whose geometry is not a Polygon or MultiPolygon are skipped.
pub fn read_products_geojson(bytes: &[u8]) -> Result<Vec<Product>> {
    let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;

    let Some(features) = value["features"].as_array() else {
        bail!("GeoJSON input is not a FeatureCollection");
    };

    let mut products = Vec::with_capacity(features.len());
    for (idx, feature) in features.iter().enumerate() {
        let properties = feature["properties"].as_object().cloned().unwrap_or_default();
        let name = feature_name(feature, &properties, idx);

        let shape = match feature["geometry"]["type"].as_str() {
            Some("Polygon") => {
                let coords = coordinates(feature)?;
                MultiPolygon(vec![parse_polygon_coords(coords)
                    .with_context(|| format!("Invalid Polygon in feature '{name}'"))?])
            }
            Some("MultiPolygon") => {
                let coords = coordinates(feature)?;
                parse_multipolygon_coords(coords)
                    .with_context(|| format!("Invalid MultiPolygon in feature '{name}'"))?
            }
            other => {
                log::warn!("[geojson] skipping feature '{name}' with geometry type {other:?}");
                continue;
            }
        };

        let footprint = Footprint::new(shape)
            .with_context(|| format!("Invalid footprint in feature '{name}'"))?;
        products.push(Product::new(name, footprint).with_properties(properties));
    }

    log::info!("[geojson] read {} products from {} features", products.len(), features.len());
    Ok(products)
}

/// Product name: `properties.name`, then the feature `id`, then its position.
fn feature_name(feature: &Value, properties: &Map<String, Value>, idx: usize) -> String {
    match (properties.get("name"), &feature["id"]) {
        (Some(Value::String(name)), _) => name.clone(),
        (_, Value::String(id)) => id.clone(),
        (_, Value::Number(id)) => id.to_string(),
        _ => format!("product-{idx}"),
    }
}

fn coordinates(feature: &Value) -> Result<&Vec<Value>> {
    feature["geometry"]["coordinates"].as_array()
        .ok_or_else(|| anyhow!("Invalid geometry: missing coordinates array"))
}

/// Parse standard GeoJSON MultiPolygon coordinates: `[polygon, polygon, ...]`.
fn parse_multipolygon_coords(coords: &[Value]) -> Result<MultiPolygon<f64>> {
    coords.iter()
        .map(|polygon_coords| {
            let rings = polygon_coords.as_array()
                .ok_or_else(|| anyhow!("Invalid MultiPolygon: polygon must be an array of rings"))?;
            parse_polygon_coords(rings)
        })
        .collect::<Result<Vec<_>>>()
        .map(MultiPolygon)
}

/// Parse standard GeoJSON Polygon coordinates: `[exterior, hole, hole, ...]`.
fn parse_polygon_coords(coords: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = coords.iter().map(|ring| {
        let ring = ring.as_array()
            .ok_or_else(|| anyhow!("Invalid Polygon: ring must be an array of positions"))?;
        parse_ring_coords(ring)
    });

    let exterior = rings.next()
        .ok_or_else(|| anyhow!("Invalid Polygon: missing exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;

    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring from GeoJSON positions `[[x, y], [x, y], ...]`, closing it if open.
fn parse_ring_coords(coords: &[Value]) -> Result<LineString<f64>> {
    let mut points = Vec::with_capacity(coords.len() + 1);

    for position in coords {
        let position = position.as_array()
            .filter(|p| p.len() >= 2)
            .ok_or_else(|| anyhow!("Invalid position: expected [x, y]"))?;
        let x = position[0].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = position[1].as_f64()
            .ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        points.push(Coord { x, y });
    }

    if !points.is_empty() && points[0] != points[points.len() - 1] {
        points.push(points[0]);
    }

    Ok(LineString(points))
}
