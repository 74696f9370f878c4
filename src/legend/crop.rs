use ahash::AHashMap;
use serde::Serialize;

use crate::style::{CropCategory, Rgb};
use crate::surface::MapSurface;

/// Default number of crops listed in the legend.
pub const DEFAULT_LEGEND_SIZE: usize = 8;

/// Names longer than this are shortened in the legend.
const SHORT_NAME_LEN: usize = 15;

/// Hectares per crop, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CropSurfaces {
    pub crops: Vec<(String, f64)>,
    pub total: f64,
}

impl CropSurfaces {
    /// Sum hectares per crop over all features with a crop name.
    /// Hectares that are missing or not numeric count as 0.
    pub fn from_surface<S: MapSurface + ?Sized>(surface: &S, crop_field: &str, hectares_field: &str) -> Self {
        let mut index: AHashMap<String, usize> = AHashMap::new();
        let mut crops: Vec<(String, f64)> = Vec::new();

        for idx in 0..surface.len() {
            let Some(crop) = surface.attribute(idx, crop_field) else { continue };
            let hectares = surface.attribute(idx, hectares_field)
                .and_then(|value| value.as_number())
                .unwrap_or(0.0);

            let name = crop.to_string();
            let slot = *index.entry(name.clone()).or_insert_with(|| {
                crops.push((name, 0.0));
                crops.len() - 1
            });
            crops[slot].1 += hectares;
        }

        let total = crops.iter().map(|(_, ha)| ha).sum();
        Self { crops, total }
    }

    /// Check if no crop was found.
    #[inline] pub fn is_empty(&self) -> bool { self.crops.is_empty() }
}

/// One line of the crop legend.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropLegendEntry {
    pub name: String,
    pub short_name: String,
    pub category: CropCategory,
    pub color: Rgb,
    pub hectares: f64,
    pub percent: f64, // Share of the total surface
}

/// The crop legend: the largest crops by surface, plus the overall total.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CropLegend {
    pub crop_count: usize, // Number of distinct crops, including those not listed
    pub entries: Vec<CropLegendEntry>,
    pub total: f64,
}

impl CropLegend {
    /// Build a legend of at most `top` crops, largest first. `None` when there are no crops.
    pub fn build(surfaces: &CropSurfaces, top: usize) -> Option<Self> {
        if surfaces.is_empty() { return None }

        let mut sorted: Vec<&(String, f64)> = surfaces.crops.iter().collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

        let entries = sorted.into_iter().take(top).map(|(name, hectares)| {
            let category = CropCategory::classify(Some(name.as_str()));
            CropLegendEntry {
                name: name.clone(),
                short_name: short_name(name),
                category,
                color: category.fill_color(),
                hectares: *hectares,
                percent: if surfaces.total > 0.0 { hectares / surfaces.total * 100.0 } else { 0.0 },
            }
        }).collect();

        Some(Self { crop_count: surfaces.crops.len(), entries, total: surfaces.total })
    }
}

fn short_name(name: &str) -> String {
    if name.chars().count() > SHORT_NAME_LEN {
        format!("{}...", name.chars().take(SHORT_NAME_LEN).collect::<String>())
    } else {
        name.to_string()
    }
}
