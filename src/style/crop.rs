//! Crop-name classification into color categories.

use serde::{Deserialize, Serialize};

use super::{Rgb, Style};

/// Crop color category. Declaration order is the classification priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CropCategory {
    Soy,
    Corn,
    Wheat,
    Sunflower,
    Cotton,
    Sorghum,
    Other,
}

/// (category, keywords) in priority order; the first keyword hit wins.
const KEYWORDS: &[(CropCategory, &[&str])] = &[
    (CropCategory::Soy,       &["soja", "soya", "soy"]),
    (CropCategory::Corn,      &["maíz", "maiz", "corn"]),
    (CropCategory::Wheat,     &["trigo", "wheat"]),
    (CropCategory::Sunflower, &["girasol", "sunflower"]),
    (CropCategory::Cotton,    &["algodón", "algodon", "cotton"]),
    (CropCategory::Sorghum,   &["sorgo", "sorghum"]),
];

impl CropCategory {
    /// Classify a crop name. Absent or unrecognized names are `Other`.
    pub fn classify(name: Option<&str>) -> Self {
        let Some(name) = name else { return CropCategory::Other };
        let lower = name.to_lowercase();

        KEYWORDS.iter()
            .find(|(_, words)| words.iter().any(|w| lower.contains(w)))
            .map(|&(category, _)| category)
            .unwrap_or(CropCategory::Other)
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            CropCategory::Soy => "soy",
            CropCategory::Corn => "corn",
            CropCategory::Wheat => "wheat",
            CropCategory::Sunflower => "sunflower",
            CropCategory::Cotton => "cotton",
            CropCategory::Sorghum => "sorghum",
            CropCategory::Other => "other",
        }
    }

    /// Fill color used for polygons and legend swatches.
    pub fn fill_color(&self) -> Rgb {
        match self {
            CropCategory::Soy => Rgb::from_hex(0x4CAF50),
            CropCategory::Corn => Rgb::from_hex(0xFFC107),
            CropCategory::Wheat => Rgb::from_hex(0x795548),
            CropCategory::Sunflower => Rgb::from_hex(0xFF9800),
            CropCategory::Cotton => Rgb::from_hex(0x2196F3),
            CropCategory::Sorghum => Rgb::from_hex(0xE91E63),
            CropCategory::Other => Rgb::from_hex(0x9C27B0),
        }
    }

    /// Darker shade of the fill color, used for polygon borders.
    pub fn border_color(&self) -> Rgb {
        match self {
            CropCategory::Soy => Rgb::from_hex(0x2E7D32),
            CropCategory::Corn => Rgb::from_hex(0xFF8F00),
            CropCategory::Wheat => Rgb::from_hex(0x5D4037),
            CropCategory::Sunflower => Rgb::from_hex(0xEF6C00),
            CropCategory::Cotton => Rgb::from_hex(0x1976D2),
            CropCategory::Sorghum => Rgb::from_hex(0xC2185B),
            CropCategory::Other => Rgb::from_hex(0x7B1FA2),
        }
    }

    /// Initial map style for a lot growing this crop.
    pub fn base_style(&self) -> Style {
        Style {
            fill_color: self.fill_color(),
            color: self.border_color(),
            weight: 2.0,
            fill_opacity: 0.6,
            opacity: 1.0,
            interactive: true,
        }
    }
}

/// Fill color for a crop name.
#[inline]
pub fn crop_color(name: Option<&str>) -> Rgb {
    CropCategory::classify(name).fill_color()
}
