mod color;
mod crop;
mod style;

pub use color::Rgb;
pub use crop::{crop_color, CropCategory};
pub use style::{Style, StylePatch};
