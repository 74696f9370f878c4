use serde::Serialize;

use super::{ProjectionTable, ZoneId, ZoneTally};

/// Scale used for bar widths when every value is zero.
pub const DEFAULT_BAR_SCALE: f64 = 100_000.0;

/// Widest bar, as a percentage of the available width.
const MAX_BAR_WIDTH: f64 = 95.0;

/// Whether a zone met its projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Above, // difference >= 0
    Below,
}

impl Trend {
    fn of(difference: f64) -> Self {
        if difference >= 0.0 { Trend::Above } else { Trend::Below }
    }
}

/// Projected against observed hectares for one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonRow {
    pub zone: ZoneId,
    pub projected: f64,
    pub actual: f64,
    pub difference: f64, // actual - projected
    pub percent: f64,    // difference / projected * 100, 0 if projected is 0
    pub trend: Trend,
}

/// Per-zone comparison rows and their column totals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComparisonSummary {
    pub rows: Vec<ComparisonRow>,
    pub total_projected: f64,
    pub total_actual: f64,
    pub total_difference: f64,
    pub total_percent: f64,
    pub fulfillment: f64, // total_actual / total_projected * 100, 0 if nothing projected
    pub max_value: f64,   // Largest projected or observed row value
    pub total_trend: Trend,
}

/// Percentage of `part` over `whole`, or 0 when `whole` is 0.
#[inline]
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole != 0.0 { part / whole * 100.0 } else { 0.0 }
}

/// Compare observed against projected hectares for each zone of `zone_order`, in that order.
/// Zones missing from either side count as 0.
pub fn compare_zones(observed: &ZoneTally, projected: &ProjectionTable, zone_order: &[ZoneId]) -> ComparisonSummary {
    let rows: Vec<ComparisonRow> = zone_order.iter().map(|zone| {
        let projected = projected.get(zone).unwrap_or(0.0);
        let actual = observed.get(zone).unwrap_or(0.0);
        let difference = actual - projected;
        ComparisonRow {
            zone: zone.clone(),
            projected,
            actual,
            difference,
            percent: percent_of(difference, projected),
            trend: Trend::of(difference),
        }
    }).collect();

    let total_projected: f64 = rows.iter().map(|r| r.projected).sum();
    let total_actual: f64 = rows.iter().map(|r| r.actual).sum();
    let total_difference = total_actual - total_projected;
    let max_value = rows.iter()
        .flat_map(|r| [r.projected, r.actual])
        .fold(0.0, f64::max);

    ComparisonSummary {
        total_percent: percent_of(total_difference, total_projected),
        fulfillment: percent_of(total_actual, total_projected),
        total_trend: Trend::of(total_difference),
        rows,
        total_projected,
        total_actual,
        total_difference,
        max_value,
    }
}

impl ComparisonSummary {
    /// Value that maps to a full-width bar; falls back to a fixed floor when all values are 0.
    pub fn bar_scale(&self) -> f64 {
        if self.max_value > 0.0 { self.max_value } else { DEFAULT_BAR_SCALE }
    }

    /// Bar width for `value`, as a percentage capped at 95.
    pub fn bar_width(&self, value: f64) -> f64 {
        (value / self.bar_scale() * MAX_BAR_WIDTH).min(MAX_BAR_WIDTH)
    }
}
