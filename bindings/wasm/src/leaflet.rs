use anyhow::{anyhow, Result};
use geo::{Coord, Rect};
use js_sys::Array;
use wasm_bindgen::JsValue;

use agrovisor_core::{AttrValue, MapSurface, Padding, Rgb, Style, StylePatch};

use crate::common::*;

/// The lot polygons of a Leaflet map, one `L.Path` layer per feature.
pub(crate) struct LeafletSurface {
    layers: Vec<JsValue>,
    map: JsValue,
}

impl LeafletSurface {
    pub(crate) fn new(layers: &Array, map: JsValue) -> Self {
        Self { layers: layers.iter().collect(), map }
    }

    #[inline] fn layer(&self, idx: usize) -> &JsValue { &self.layers[idx] }

    fn try_style(&self, idx: usize) -> Result<Style> {
        let options = prop(self.layer(idx), "options")?;
        let mut style = Style::default();

        let color = |key: &str| -> Result<Option<Rgb>> {
            Ok(prop(&options, key)?.as_string().and_then(|s| s.parse().ok()))
        };
        let number = |key: &str| -> Result<Option<f64>> { Ok(prop(&options, key)?.as_f64()) };

        style.apply(&StylePatch {
            fill_color: color("fillColor")?,
            color: color("color")?,
            weight: number("weight")?,
            fill_opacity: number("fillOpacity")?,
            opacity: number("opacity")?,
            interactive: prop(&options, "interactive")?.as_bool(),
        });
        Ok(style)
    }

    fn try_set_style(&self, idx: usize, patch: &StylePatch) -> Result<()> {
        let layer = self.layer(idx);
        call(layer, "setStyle", &[to_js(patch)?])?;

        // setStyle leaves interactivity alone, so flip it on the options and tooltip by hand.
        if let Some(interactive) = patch.interactive {
            let flag = JsValue::from_bool(interactive);
            set_prop(&prop(layer, "options")?, "interactive", &flag)?;

            let tooltip = prop(layer, "_tooltip")?;
            if tooltip.is_object() {
                set_prop(&prop(&tooltip, "options")?, "interactive", &flag)?;
            }
        }
        Ok(())
    }

    fn try_attribute(&self, idx: usize, field: &str) -> Result<Option<AttrValue>> {
        let properties = prop(&prop(self.layer(idx), "feature")?, "properties")?;
        if !properties.is_object() { return Ok(None) }

        let value: serde_json::Value = serde_wasm_bindgen::from_value(prop(&properties, field)?)
            .map_err(|e| anyhow!("property '{}' is not plain data: {}", field, e))?;
        Ok(AttrValue::from_json(&value))
    }

    fn try_bounds(&self, idx: usize) -> Result<Option<Rect<f64>>> {
        let layer = self.layer(idx);
        if !prop(layer, "getBounds")?.is_function() { return Ok(None) }

        let bounds = call(layer, "getBounds", &[])?;
        if !call(&bounds, "isValid", &[])?.is_truthy() { return Ok(None) }

        let corner = |method: &str| -> Result<Coord<f64>> {
            let latlng = call(&bounds, method, &[])?;
            let lat = prop(&latlng, "lat")?.as_f64().ok_or_else(|| anyhow!("{} has no latitude", method))?;
            let lng = prop(&latlng, "lng")?.as_f64().ok_or_else(|| anyhow!("{} has no longitude", method))?;
            Ok(Coord { x: lng, y: lat })
        };
        Ok(Some(Rect::new(corner("getSouthWest")?, corner("getNorthEast")?)))
    }

    fn try_fit_bounds(&self, region: Rect<f64>, padding: Option<Padding>) -> Result<()> {
        // Leaflet takes [[south, west], [north, east]]
        let corners = to_js(&[[region.min().y, region.min().x], [region.max().y, region.max().x]])?;
        let options = js_sys::Object::new();
        if let Some(padding) = padding {
            set_prop(&options, "padding", &to_js(&padding)?)?;
        }
        call(&self.map, "fitBounds", &[corners, options.into()])?;
        Ok(())
    }
}

impl MapSurface for LeafletSurface {
    fn len(&self) -> usize { self.layers.len() }

    fn style(&self, idx: usize) -> Style {
        self.try_style(idx).unwrap_or_else(|e| {
            warn(&format!("[leaflet] layer {idx}: {e}"));
            Style::default()
        })
    }

    fn set_style(&mut self, idx: usize, patch: &StylePatch) {
        if let Err(e) = self.try_set_style(idx, patch) {
            warn(&format!("[leaflet] layer {idx}: {e}"));
        }
    }

    fn attribute(&self, idx: usize, field: &str) -> Option<AttrValue> {
        self.try_attribute(idx, field).unwrap_or_else(|e| {
            warn(&format!("[leaflet] layer {idx}: {e}"));
            None
        })
    }

    fn bounds(&self, idx: usize) -> Option<Rect<f64>> {
        self.try_bounds(idx).unwrap_or_else(|e| {
            warn(&format!("[leaflet] layer {idx}: {e}"));
            None
        })
    }

    fn fit_bounds(&mut self, region: Rect<f64>, padding: Option<Padding>) {
        if let Err(e) = self.try_fit_bounds(region, padding) {
            warn(&format!("[leaflet] fitBounds: {e}"));
        }
    }
}
