//! The map surface: the features drawn on the map and the view over them.

mod io;
mod layer;

use geo::{Coord, Rect};

use crate::fields::AttrValue;
use crate::style::{Style, StylePatch};

pub use layer::{FeatureLayer, MapFeature, ViewFit};

/// Padding, in pixels, around a region the view is fitted to.
pub type Padding = [u32; 2];

/// Access to the features of an interactive map, addressed by position `0..len()`.
pub trait MapSurface {
    /// Number of features on the surface.
    fn len(&self) -> usize;

    /// Check if the surface has no features.
    fn is_empty(&self) -> bool { self.len() == 0 }

    /// Current style of a feature.
    fn style(&self, idx: usize) -> Style;

    /// Update some of the style fields of a feature.
    fn set_style(&mut self, idx: usize, patch: &StylePatch);

    /// Read an attribute of a feature; `None` if missing or null.
    fn attribute(&self, idx: usize, field: &str) -> Option<AttrValue>;

    /// Bounding rectangle of a feature, if it has any geometry.
    fn bounds(&self, idx: usize) -> Option<Rect<f64>>;

    /// Move the view so that `region` is visible.
    fn fit_bounds(&mut self, region: Rect<f64>, padding: Option<Padding>);

    /// Smallest rectangle enclosing every feature.
    fn full_bounds(&self) -> Option<Rect<f64>> {
        union_bounds((0..self.len()).filter_map(|i| self.bounds(i)))
    }
}

/// Smallest rectangle enclosing all the given rectangles.
pub fn union_bounds(rects: impl IntoIterator<Item = Rect<f64>>) -> Option<Rect<f64>> {
    rects.into_iter()
        .reduce(|a, b| Rect::new(
            Coord {
                x: a.min().x.min(b.min().x),
                y: a.min().y.min(b.min().y),
            },
            Coord {
                x: a.max().x.max(b.max().x),
                y: a.max().y.max(b.max().y),
            }
        ))
}

/// Rectangle as `[min_x, min_y, max_x, max_y]`.
#[inline]
pub fn bounds_to_array(rect: &Rect<f64>) -> [f64; 4] {
    [rect.min().x, rect.min().y, rect.max().x, rect.max().y]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_of_nothing_is_none() {
        assert_eq!(union_bounds(std::iter::empty()), None);
    }

    #[test]
    fn union_encloses_every_rect() {
        let a = Rect::new(Coord { x: 0.0, y: 0.0 }, Coord { x: 1.0, y: 1.0 });
        let b = Rect::new(Coord { x: -2.0, y: 0.5 }, Coord { x: 0.5, y: 3.0 });
        let u = union_bounds([a, b]).unwrap();
        assert_eq!(bounds_to_array(&u), [-2.0, 0.0, 1.0, 3.0]);
    }
}
