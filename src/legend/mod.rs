mod crop;
mod precip;

pub use crop::{CropLegend, CropLegendEntry, CropSurfaces, DEFAULT_LEGEND_SIZE};
pub use precip::{precip_color, PrecipBand, PrecipLegend, PRECIP_BANDS};
