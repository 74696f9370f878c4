mod compare;
mod projection;
mod tally;
mod zone_id;

pub use compare::{compare_zones, ComparisonRow, ComparisonSummary, Trend, DEFAULT_BAR_SCALE};
pub use projection::ProjectionTable;
pub use tally::ZoneTally;
pub use zone_id::ZoneId;
