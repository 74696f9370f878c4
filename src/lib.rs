#![doc = "agrovisor public API"]
mod common;
mod fields;
mod filter;
mod legend;
mod session;
mod style;
mod surface;
mod zones;

#[cfg(feature = "cli")]
pub mod cli;
#[cfg(feature = "cli")]
pub mod commands;

#[doc(inline)]
pub use fields::{client_names, AttrValue, FieldSet};

#[doc(inline)]
pub use filter::{FilterEngine, FilterError, FilterResult, FilterStatus};

#[doc(inline)]
pub use legend::{precip_color, CropLegend, CropLegendEntry, CropSurfaces, PrecipBand, PrecipLegend, DEFAULT_LEGEND_SIZE, PRECIP_BANDS};

#[doc(inline)]
pub use session::{ViewSession, MATCH_PADDING};

#[doc(inline)]
pub use style::{crop_color, CropCategory, Rgb, Style, StylePatch};

#[doc(inline)]
pub use surface::{bounds_to_array, union_bounds, FeatureLayer, MapFeature, MapSurface, Padding, ViewFit};

#[doc(inline)]
pub use zones::{compare_zones, ComparisonRow, ComparisonSummary, ProjectionTable, Trend, ZoneId, ZoneTally, DEFAULT_BAR_SCALE};
