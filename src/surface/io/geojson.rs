use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use geo::{Coord, LineString, MultiPolygon, Polygon};
use serde_json::{json, Value};

use crate::common::diag;
use crate::surface::{FeatureLayer, MapFeature};

impl FeatureLayer {
    /// Read a GeoJSON FeatureCollection file.
    pub fn read_geojson(path: &Path, verbose: u8) -> Result<Self> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("Failed to read GeoJSON file: {}", path.display()))?;
        if verbose > 0 { diag(&format!("[geojson] reading {}", path.display())) }

        Self::from_geojson_bytes(&bytes, verbose)
            .with_context(|| format!("Invalid GeoJSON in {}", path.display()))
    }

    /// Parse a GeoJSON FeatureCollection.
    /// Polygon and MultiPolygon features are kept; other geometry types are skipped.
    pub fn from_geojson_bytes(bytes: &[u8], verbose: u8) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes).context("Failed to parse GeoJSON bytes")?;
        if value["type"].as_str() != Some("FeatureCollection") {
            bail!("Expected a GeoJSON FeatureCollection, found {:?}", value["type"]);
        }
        let features = value["features"].as_array()
            .ok_or_else(|| anyhow!("FeatureCollection has no \"features\" array"))?;

        let mut out = Vec::with_capacity(features.len());
        let mut skipped = 0usize;
        for (idx, feature) in features.iter().enumerate() {
            let geometry = match parse_geometry(&feature["geometry"])
                .with_context(|| format!("Feature {idx} has invalid geometry"))? {
                Some(geometry) => geometry,
                None => { skipped += 1; continue }
            };
            let properties = feature["properties"].as_object().cloned().unwrap_or_default();
            out.push(MapFeature::new(geometry, properties));
        }

        if verbose > 0 {
            diag(&format!("[geojson] {} polygons loaded, {} features skipped", out.len(), skipped));
        }
        Ok(FeatureLayer::new(out))
    }

    /// Export the layer as a FeatureCollection, carrying each feature's current style
    /// in a `_style` property.
    pub fn to_geojson(&self) -> Result<Value> {
        let features = self.features().iter().map(|feature| -> Result<Value> {
            let mut properties = feature.properties.clone();
            properties.insert("_style".to_string(), serde_json::to_value(feature.style)?);
            Ok(json!({
                "type": "Feature",
                "geometry": multipolygon_to_geojson(feature.geometry()),
                "properties": properties,
            }))
        }).collect::<Result<Vec<Value>>>()?;

        Ok(json!({
            "type": "FeatureCollection",
            "features": features,
        }))
    }

    /// Serialize the layer to GeoJSON bytes.
    pub fn to_geojson_bytes(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(&self.to_geojson()?).context("Failed to serialize GeoJSON to bytes")
    }
}

/// Parse a GeoJSON geometry object. `None` for null or non-areal geometries.
fn parse_geometry(geometry: &Value) -> Result<Option<MultiPolygon<f64>>> {
    let Some(object) = geometry.as_object() else { return Ok(None) };
    let coords = || object.get("coordinates").and_then(Value::as_array)
        .ok_or_else(|| anyhow!("missing \"coordinates\" array"));

    match object.get("type").and_then(Value::as_str) {
        Some("Polygon") => Ok(Some(MultiPolygon(vec![parse_polygon(coords()?)?]))),
        Some("MultiPolygon") => {
            let polygons = coords()?.iter()
                .map(|p| parse_polygon(p.as_array().ok_or_else(|| anyhow!("polygon must be an array"))?))
                .collect::<Result<Vec<_>>>()?;
            Ok(Some(MultiPolygon(polygons)))
        }
        _ => Ok(None),
    }
}

/// Parse polygon rings: the first ring is the exterior, the rest are holes.
fn parse_polygon(rings: &[Value]) -> Result<Polygon<f64>> {
    let mut rings = rings.iter().map(|ring| {
        parse_ring(ring.as_array().ok_or_else(|| anyhow!("ring must be an array"))?)
    });
    let exterior = rings.next().ok_or_else(|| anyhow!("polygon has no exterior ring"))??;
    let interiors = rings.collect::<Result<Vec<_>>>()?;
    Ok(Polygon::new(exterior, interiors))
}

/// Parse a ring of [x, y] positions.
fn parse_ring(coords: &[Value]) -> Result<LineString<f64>> {
    let points = coords.iter().map(|position| -> Result<Coord<f64>> {
        let pair = position.as_array()
            .filter(|p| p.len() >= 2)
            .ok_or_else(|| anyhow!("position must be an [x, y] array"))?;
        let x = pair[0].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: x must be a number"))?;
        let y = pair[1].as_f64().ok_or_else(|| anyhow!("Invalid coordinate: y must be a number"))?;
        Ok(Coord { x, y })
    }).collect::<Result<Vec<_>>>()?;

    // Polygon::new closes open rings
    Ok(LineString(points))
}

fn multipolygon_to_geojson(mp: &MultiPolygon<f64>) -> Value {
    let polygons: Vec<Vec<Vec<[f64; 2]>>> = mp.0.iter().map(|polygon| {
        std::iter::once(polygon.exterior())
            .chain(polygon.interiors())
            .map(|ring| ring.coords().map(|c| [c.x, c.y]).collect())
            .collect()
    }).collect();

    json!({ "type": "MultiPolygon", "coordinates": polygons })
}
