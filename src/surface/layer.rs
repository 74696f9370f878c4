use geo::{BoundingRect, MultiPolygon, Rect};
use serde_json::{Map, Value};

use crate::fields::AttrValue;
use crate::style::{CropCategory, Style, StylePatch};
use super::{MapSurface, Padding};

/// One lot polygon with its attributes and current style.
#[derive(Debug, Clone)]
pub struct MapFeature {
    geometry: MultiPolygon<f64>,
    bounds: Option<Rect<f64>>, // Cached bounding rectangle of geometry
    pub properties: Map<String, Value>,
    pub style: Style,
}

impl MapFeature {
    pub fn new(geometry: MultiPolygon<f64>, properties: Map<String, Value>) -> Self {
        Self {
            bounds: geometry.bounding_rect(),
            geometry,
            properties,
            style: Style::default(),
        }
    }

    /// Get a reference to the geometry.
    #[inline] pub fn geometry(&self) -> &MultiPolygon<f64> { &self.geometry }

    /// Get the bounding rectangle, if the geometry is not empty.
    #[inline] pub fn bounds(&self) -> Option<Rect<f64>> { self.bounds }

    /// Read a property as a typed value.
    #[inline]
    pub fn attribute(&self, field: &str) -> Option<AttrValue> {
        self.properties.get(field).and_then(AttrValue::from_json)
    }
}

/// The last view change requested on a layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewFit {
    pub region: Rect<f64>,
    pub padding: Option<Padding>,
}

/// An in-memory map surface over a list of features.
#[derive(Debug, Clone, Default)]
pub struct FeatureLayer {
    features: Vec<MapFeature>,
    view: Option<ViewFit>,
}

impl FeatureLayer {
    pub fn new(features: Vec<MapFeature>) -> Self {
        Self { features, view: None }
    }

    /// Get a reference to the list of features.
    #[inline] pub fn features(&self) -> &[MapFeature] { &self.features }

    /// Get a reference to a single feature.
    #[inline] pub fn feature(&self, idx: usize) -> Option<&MapFeature> { self.features.get(idx) }

    /// Get the region the view was last fitted to.
    #[inline] pub fn view(&self) -> Option<&ViewFit> { self.view.as_ref() }

    /// Give every feature the base style of its crop category.
    pub fn style_by_crop(&mut self, crop_field: Option<&str>) {
        for feature in self.features.iter_mut() {
            let crop = crop_field
                .and_then(|field| feature.attribute(field))
                .map(|value| value.to_string());
            feature.style = CropCategory::classify(crop.as_deref()).base_style();
        }
    }
}

impl MapSurface for FeatureLayer {
    #[inline] fn len(&self) -> usize { self.features.len() }

    #[inline] fn style(&self, idx: usize) -> Style { self.features[idx].style }

    #[inline]
    fn set_style(&mut self, idx: usize, patch: &StylePatch) {
        self.features[idx].style.apply(patch);
    }

    #[inline]
    fn attribute(&self, idx: usize, field: &str) -> Option<AttrValue> {
        self.features[idx].attribute(field)
    }

    #[inline] fn bounds(&self, idx: usize) -> Option<Rect<f64>> { self.features[idx].bounds }

    fn fit_bounds(&mut self, region: Rect<f64>, padding: Option<Padding>) {
        self.view = Some(ViewFit { region, padding });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Coord};
    use serde_json::json;

    fn square(x: f64, y: f64) -> MultiPolygon<f64> {
        MultiPolygon(vec![polygon![
            (x: x, y: y), (x: x + 1.0, y: y), (x: x + 1.0, y: y + 1.0), (x: x, y: y + 1.0), (x: x, y: y),
        ]])
    }

    fn props(value: Value) -> Map<String, Value> {
        value.as_object().cloned().unwrap_or_default()
    }

    #[test]
    fn bounds_are_cached_from_geometry() {
        let feature = MapFeature::new(square(2.0, 3.0), Map::new());
        let bounds = feature.bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: 2.0, y: 3.0 });
        assert_eq!(bounds.max(), Coord { x: 3.0, y: 4.0 });
        assert!(MapFeature::new(MultiPolygon(vec![]), Map::new()).bounds().is_none());
    }

    #[test]
    fn full_bounds_cover_all_features() {
        let layer = FeatureLayer::new(vec![
            MapFeature::new(square(0.0, 0.0), Map::new()),
            MapFeature::new(square(5.0, -1.0), Map::new()),
        ]);
        let bounds = layer.full_bounds().unwrap();
        assert_eq!(bounds.min(), Coord { x: 0.0, y: -1.0 });
        assert_eq!(bounds.max(), Coord { x: 6.0, y: 1.0 });
        assert!(FeatureLayer::default().full_bounds().is_none());
    }

    #[test]
    fn crop_styling_uses_category_palette() {
        let mut layer = FeatureLayer::new(vec![
            MapFeature::new(square(0.0, 0.0), props(json!({ "CULTIVO": "Soja" }))),
            MapFeature::new(square(1.0, 0.0), props(json!({ "CULTIVO": null }))),
        ]);
        layer.style_by_crop(Some("CULTIVO"));
        assert_eq!(layer.style(0), CropCategory::Soy.base_style());
        assert_eq!(layer.style(1), CropCategory::Other.base_style());
    }

    #[test]
    fn fit_bounds_records_the_view() {
        let mut layer = FeatureLayer::new(vec![MapFeature::new(square(0.0, 0.0), Map::new())]);
        let region = layer.bounds(0).unwrap();
        layer.fit_bounds(region, Some([50, 50]));
        assert_eq!(layer.view(), Some(&ViewFit { region, padding: Some([50, 50]) }));
    }
}
