use ahash::AHashMap;

use crate::surface::MapSurface;
use super::ZoneId;

/// Observed hectares per zone.
#[derive(Debug, Clone, Default)]
pub struct ZoneTally {
    hectares: AHashMap<ZoneId, f64>,
}

impl ZoneTally {
    pub fn new() -> Self { Self::default() }

    /// Sum the hectares of every feature per zone.
    /// Zones are read as trimmed text; hectares that are missing or not numeric count as 0.
    pub fn from_surface<S: MapSurface + ?Sized>(surface: &S, zone_field: &str, hectares_field: &str) -> Self {
        let mut tally = Self::new();
        for idx in 0..surface.len() {
            let Some(zone) = surface.attribute(idx, zone_field) else { continue };
            let hectares = surface.attribute(idx, hectares_field)
                .and_then(|value| value.as_number())
                .unwrap_or(0.0);
            tally.add(ZoneId::new(&zone.to_string()), hectares);
        }
        tally
    }

    /// Add hectares to a zone.
    pub fn add(&mut self, zone: ZoneId, hectares: f64) {
        *self.hectares.entry(zone).or_insert(0.0) += hectares;
    }

    /// Get the observed hectares of a zone, if any were recorded.
    #[inline] pub fn get(&self, zone: &ZoneId) -> Option<f64> { self.hectares.get(zone).copied() }

    /// Get the number of zones with recorded hectares.
    #[inline] pub fn len(&self) -> usize { self.hectares.len() }

    /// Check if no zone has recorded hectares.
    #[inline] pub fn is_empty(&self) -> bool { self.hectares.is_empty() }

    /// Get the recorded zones in ascending order.
    pub fn zones(&self) -> Vec<ZoneId> {
        let mut zones: Vec<ZoneId> = self.hectares.keys().cloned().collect();
        zones.sort();
        zones
    }
}

impl<'a> FromIterator<(&'a str, f64)> for ZoneTally {
    fn from_iter<I: IntoIterator<Item = (&'a str, f64)>>(iter: I) -> Self {
        let mut tally = Self::new();
        for (zone, hectares) in iter { tally.add(ZoneId::new(zone), hectares) }
        tally
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::MultiPolygon;
    use serde_json::json;

    use crate::surface::{FeatureLayer, MapFeature};

    fn feature(properties: serde_json::Value) -> MapFeature {
        MapFeature::new(MultiPolygon(vec![]), properties.as_object().cloned().unwrap_or_default())
    }

    #[test]
    fn sums_hectares_per_trimmed_zone() {
        let layer = FeatureLayer::new(vec![
            feature(json!({ "ZONA_CZ4": "1", "HECTAREAS": 100.0 })),
            feature(json!({ "ZONA_CZ4": " 1 ", "HECTAREAS": "50.5" })),
            feature(json!({ "ZONA_CZ4": 2, "HECTAREAS": 30 })),
            feature(json!({ "ZONA_CZ4": "2", "HECTAREAS": "n/a" })),
            feature(json!({ "ZONA_CZ4": null, "HECTAREAS": 999 })),
            feature(json!({ "ZONA_CZ4": "3" })),
        ]);
        let tally = ZoneTally::from_surface(&layer, "ZONA_CZ4", "HECTAREAS");

        assert_eq!(tally.get(&"1".into()), Some(150.5));
        assert_eq!(tally.get(&"2".into()), Some(30.0));
        assert_eq!(tally.get(&"3".into()), Some(0.0));
        assert_eq!(tally.zones().iter().map(ZoneId::id).collect::<Vec<_>>(), ["1", "2", "3"]);
    }

    #[test]
    fn collects_from_pairs() {
        let tally: ZoneTally = [("1", 10.0), ("1", 5.0), ("4", 2.0)].into_iter().collect();
        assert_eq!(tally.get(&"1".into()), Some(15.0));
        assert_eq!(tally.len(), 2);
    }
}
