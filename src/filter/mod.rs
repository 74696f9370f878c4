mod engine;
mod status;

pub use engine::{FilterEngine, FilterError, FilterResult};
pub use status::FilterStatus;
