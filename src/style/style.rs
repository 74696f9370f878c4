use serde::{Deserialize, Serialize};

use super::Rgb;

/// Visual rendering parameters of one map feature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Style {
    pub fill_color: Rgb,
    pub color: Rgb,   // Border color
    pub weight: f64,  // Stroke width in pixels
    pub fill_opacity: f64,
    pub opacity: f64, // Stroke opacity
    pub interactive: bool,
}

impl Default for Style {
    /// Path defaults of the usual web map libraries.
    fn default() -> Self {
        Self {
            fill_color: Rgb::from_hex(0x3388FF),
            color: Rgb::from_hex(0x3388FF),
            weight: 3.0,
            fill_opacity: 0.2,
            opacity: 1.0,
            interactive: true,
        }
    }
}

impl Style {
    /// Update this style in place with every field set in `patch`.
    pub fn apply(&mut self, patch: &StylePatch) {
        if let Some(v) = patch.fill_color { self.fill_color = v }
        if let Some(v) = patch.color { self.color = v }
        if let Some(v) = patch.weight { self.weight = v }
        if let Some(v) = patch.fill_opacity { self.fill_opacity = v }
        if let Some(v) = patch.opacity { self.opacity = v }
        if let Some(v) = patch.interactive { self.interactive = v }
    }

    /// True if nothing of the feature is drawn and it ignores pointer events.
    pub fn is_suppressed(&self) -> bool {
        self.fill_opacity == 0.0 && self.weight == 0.0 && self.opacity == 0.0 && !self.interactive
    }
}

/// A partial style update; unset fields keep their current value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<Rgb>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interactive: Option<bool>,
}

impl StylePatch {
    /// Highlight a matched feature, keeping the palette of its original style.
    pub fn highlight(original: &Style) -> Self {
        Self {
            fill_color: Some(original.fill_color),
            color: Some(original.color),
            weight: Some(2.0),
            fill_opacity: Some(0.6),
            opacity: Some(1.0),
            interactive: Some(true),
        }
    }

    /// Hide a feature completely. Colors are left as they are.
    pub fn suppressed() -> Self {
        Self {
            weight: Some(0.0),
            fill_opacity: Some(0.0),
            opacity: Some(0.0),
            interactive: Some(false),
            ..Self::default()
        }
    }

    /// Put back a captured style, always re-enabling interaction.
    pub fn restore(original: &Style) -> Self {
        Self { interactive: Some(true), ..Self::from(*original) }
    }
}

impl From<Style> for StylePatch {
    fn from(style: Style) -> Self {
        Self {
            fill_color: Some(style.fill_color),
            color: Some(style.color),
            weight: Some(style.weight),
            fill_opacity: Some(style.fill_opacity),
            opacity: Some(style.opacity),
            interactive: Some(style.interactive),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Style {
        Style {
            fill_color: Rgb::from_hex(0x4CAF50),
            color: Rgb::from_hex(0x2E7D32),
            weight: 2.0,
            fill_opacity: 0.6,
            opacity: 1.0,
            interactive: true,
        }
    }

    #[test]
    fn suppressed_patch_keeps_colors() {
        let mut style = sample();
        style.apply(&StylePatch::suppressed());
        assert!(style.is_suppressed());
        assert_eq!(style.fill_color, Rgb::from_hex(0x4CAF50));
        assert_eq!(style.color, Rgb::from_hex(0x2E7D32));
    }

    #[test]
    fn highlight_takes_colors_from_original() {
        let original = sample();
        let mut current = Style { fill_color: Rgb::from_hex(0xFF5722), ..original };
        current.apply(&StylePatch::highlight(&original));
        assert_eq!(current.fill_color, original.fill_color);
        assert_eq!(current.fill_opacity, 0.6);
        assert_eq!(current.weight, 2.0);
        assert!(current.interactive);
    }

    #[test]
    fn restore_reenables_interaction() {
        let original = Style { interactive: false, ..sample() };
        let mut current = sample();
        current.apply(&StylePatch::suppressed());
        current.apply(&StylePatch::restore(&original));
        assert_eq!(current, Style { interactive: true, ..original });
    }

    #[test]
    fn patch_serializes_only_set_fields() {
        let json = serde_json::to_value(StylePatch::suppressed()).unwrap();
        assert_eq!(json, serde_json::json!({ "weight": 0.0, "fillOpacity": 0.0, "opacity": 0.0, "interactive": false }));
    }
}
