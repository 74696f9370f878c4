use serde::Serialize;

use crate::style::Rgb;

/// One rainfall band: `[min, max)` millimeters, open-ended when `max` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PrecipBand {
    pub min: f64,
    pub max: Option<f64>,
    pub color: Rgb,
}

impl PrecipBand {
    const fn new(min: f64, max: Option<f64>, hex: u32) -> Self {
        Self { min, max, color: Rgb::from_hex(hex) }
    }

    /// Check if `mm` falls in this band.
    pub fn contains(&self, mm: f64) -> bool {
        mm >= self.min && self.max.is_none_or(|max| mm < max)
    }
}

/// Rainfall color ramp, lowest band first.
pub const PRECIP_BANDS: [PrecipBand; 9] = [
    PrecipBand::new(0.0, Some(2.0), 0x9E9EFF),
    PrecipBand::new(2.0, Some(5.0), 0x0000FF),
    PrecipBand::new(5.0, Some(10.0), 0x00FFFF),
    PrecipBand::new(10.0, Some(15.0), 0x00FF80),
    PrecipBand::new(15.0, Some(20.0), 0x00FF00),
    PrecipBand::new(20.0, Some(30.0), 0xFFFF00),
    PrecipBand::new(30.0, Some(50.0), 0xFFA500),
    PrecipBand::new(50.0, Some(100.0), 0xFF4500),
    PrecipBand::new(100.0, None, 0xFF0000),
];

/// Color of a rainfall amount in millimeters. `None` for negative or non-finite values.
pub fn precip_color(mm: f64) -> Option<Rgb> {
    if !mm.is_finite() { return None }
    PRECIP_BANDS.iter().find(|band| band.contains(mm)).map(|band| band.color)
}

/// The rainfall legend panel.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrecipLegend {
    pub bands: Vec<PrecipBand>,
    pub visible: bool,
}

impl Default for PrecipLegend {
    fn default() -> Self {
        Self { bands: PRECIP_BANDS.to_vec(), visible: true }
    }
}

impl PrecipLegend {
    /// Close the legend panel.
    pub fn hide(&mut self) { self.visible = false }

    /// Reopen the legend panel.
    pub fn show(&mut self) { self.visible = true }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn band_edges_belong_to_the_upper_band() {
        assert_eq!(precip_color(0.0), Some(Rgb::from_hex(0x9E9EFF)));
        assert_eq!(precip_color(1.99), Some(Rgb::from_hex(0x9E9EFF)));
        assert_eq!(precip_color(2.0), Some(Rgb::from_hex(0x0000FF)));
        assert_eq!(precip_color(99.9), Some(Rgb::from_hex(0xFF4500)));
        assert_eq!(precip_color(100.0), Some(Rgb::from_hex(0xFF0000)));
        assert_eq!(precip_color(450.0), Some(Rgb::from_hex(0xFF0000)));
    }

    #[test]
    fn invalid_amounts_have_no_color() {
        assert_eq!(precip_color(-1.0), None);
        assert_eq!(precip_color(f64::NAN), None);
    }

    #[test]
    fn bands_are_contiguous() {
        for pair in PRECIP_BANDS.windows(2) {
            assert_eq!(pair[0].max, Some(pair[1].min));
        }
    }

    #[test]
    fn legend_can_be_closed() {
        let mut legend = PrecipLegend::default();
        assert!(legend.visible);
        legend.hide();
        assert!(!legend.visible);
    }
}
