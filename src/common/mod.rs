mod log;
#[cfg(feature = "cli")]
mod output;

pub(crate) use log::*;
#[cfg(feature = "cli")]
pub(crate) use output::*;
