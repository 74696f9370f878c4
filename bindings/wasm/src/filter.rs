use js_sys::Array;
use serde::Deserialize;
use wasm_bindgen::{JsValue, prelude::wasm_bindgen};

use agrovisor_core::{
    client_names, compare_zones, CropCategory, CropLegend, CropSurfaces, FieldSet, MapSurface,
    PrecipLegend, ProjectionTable, ViewSession, ZoneId, ZoneTally,
};

use crate::common::*;
use crate::leaflet::LeafletSurface;

/// Field names given by the page instead of the detected ones.
#[derive(Debug, Default, Deserialize)]
struct FieldOverrides {
    crop: Option<String>,
    hectares: Option<String>,
    client: Option<String>,
    zone: Option<String>,
}

/// Client search, zone comparison and legends over the lots drawn on a Leaflet map.
#[wasm_bindgen]
pub struct WasmFilter {
    session: ViewSession<LeafletSurface>,
    fields: FieldSet,
    projections: ProjectionTable,
    precip: PrecipLegend,
}

#[wasm_bindgen]
impl WasmFilter {
    /// layers: the `L.Path` layers of the lot GeoJSON, in drawing order.
    /// map: the `L.Map` they are drawn on.
    /// projections: optional JSON text `{"zones": [...], "hectares": {...}}`.
    /// fields: optional `{ crop, hectares, client, zone }` overriding the detected names.
    #[wasm_bindgen(constructor)]
    pub fn new(layers: Array, map: JsValue, projections: Option<String>, fields: JsValue) -> Result<WasmFilter, JsValue> {
        let overrides: FieldOverrides = if fields.is_undefined() || fields.is_null() {
            FieldOverrides::default()
        } else {
            serde_wasm_bindgen::from_value(fields)?
        };

        let surface = LeafletSurface::new(&layers, map);
        let fields = FieldSet::detect(&surface).with_overrides(
            overrides.crop.as_deref(),
            overrides.hectares.as_deref(),
            overrides.client.as_deref(),
            overrides.zone.as_deref(),
        );

        let projections = match projections {
            Some(json) => ProjectionTable::from_json_bytes(json.as_bytes()).map_err(js_err)?,
            None => ProjectionTable::default(),
        };

        let client_field = fields.client.clone().unwrap_or_default();
        Ok(WasmFilter {
            session: ViewSession::new(surface, client_field),
            fields,
            projections,
            precip: PrecipLegend::default(),
        })
    }

    /// Detected field names as `{ crop, hectares, client, zone }`.
    pub fn fields(&self) -> Result<JsValue, JsValue> {
        to_js(&self.fields)
    }

    /// Sorted distinct client names, for the search suggestions.
    pub fn clients(&self) -> Result<JsValue, JsValue> {
        let names = match &self.fields.client {
            Some(field) => client_names(self.session.surface(), field),
            None => Vec::new(),
        };
        to_js(&names)
    }

    /// Filter lots by client and zoom to the matches.
    /// Throws the user-facing message if the query is empty.
    pub fn filter(&mut self, query: &str) -> Result<JsValue, JsValue> {
        let result = self.session.search(query).map_err(js_err)?;
        to_js(&result)
    }

    /// Clear the filter and zoom back out. Returns the new status line.
    pub fn reset(&mut self) -> String {
        self.session.reset().to_string()
    }

    /// Current status line, e.g. "Showing 3 polygons".
    pub fn status(&self) -> String {
        self.session.status().to_string()
    }

    /// Number of lots matched by the active filter.
    pub fn match_count(&self) -> usize {
        self.session.engine().match_count()
    }

    /// Zone comparison of projected against observed hectares.
    /// zones: display order; defaults to the projection table's own order.
    pub fn compare_zones(&self, zones: Option<Vec<String>>) -> Result<JsValue, JsValue> {
        let surface = self.session.surface();
        let observed = match (self.fields.zone.as_deref(), self.fields.hectares.as_deref()) {
            (Some(zone), Some(hectares)) => ZoneTally::from_surface(surface, zone, hectares),
            _ => ZoneTally::new(),
        };

        let order: Vec<ZoneId> = match zones {
            Some(zones) => zones.iter().map(|z| ZoneId::new(z)).collect(),
            None => self.projections.order().to_vec(),
        };
        to_js(&compare_zones(&observed, &self.projections, &order))
    }

    /// Crop legend of the `top` largest crops by insured hectares, or `null` if there are none.
    pub fn crop_legend(&self, top: Option<usize>) -> Result<JsValue, JsValue> {
        let surfaces = match (self.fields.crop.as_deref(), self.fields.hectares.as_deref()) {
            (Some(crop), Some(hectares)) => CropSurfaces::from_surface(self.session.surface(), crop, hectares),
            _ => CropSurfaces::default(),
        };
        let top = top.unwrap_or(agrovisor_core::DEFAULT_LEGEND_SIZE);
        to_js(&CropLegend::build(&surfaces, top))
    }

    /// Rainfall bands and whether the legend is shown.
    pub fn precip_legend(&self) -> Result<JsValue, JsValue> {
        to_js(&self.precip)
    }

    pub fn hide_precip_legend(&mut self) { self.precip.hide() }

    pub fn show_precip_legend(&mut self) { self.precip.show() }

    /// Fold or unfold the search box; returns true if now collapsed.
    pub fn toggle_search_box(&mut self) -> bool {
        self.session.toggle_search_box()
    }

    /// Open or close the zone panel; returns true if now open.
    pub fn toggle_panel(&mut self) -> bool {
        self.session.toggle_panel()
    }

    /// Number of lots on the map.
    pub fn lot_count(&self) -> usize {
        self.session.surface().len()
    }

    /// Fill color for a crop name, as `#RRGGBB`.
    pub fn crop_color(crop: Option<String>) -> String {
        agrovisor_core::crop_color(crop.as_deref()).to_string()
    }

    /// Base Leaflet style for a crop name, for the GeoJSON layer's `style` callback.
    pub fn crop_style(crop: Option<String>) -> Result<JsValue, JsValue> {
        to_js(&CropCategory::classify(crop.as_deref()).base_style())
    }

    /// Fill color for a rainfall amount in mm, or `undefined` below the first band.
    pub fn precip_color(mm: f64) -> Option<String> {
        agrovisor_core::precip_color(mm).map(|c| c.to_string())
    }
}
