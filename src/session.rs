use geo::Rect;

use crate::filter::{FilterEngine, FilterError, FilterResult, FilterStatus};
use crate::surface::{MapSurface, Padding};

/// Padding around matched features when zooming to them.
pub const MATCH_PADDING: Padding = [50, 50];

/// One viewing session over a map surface: the client filter, the view, and
/// the open/closed state of the side panels.
#[derive(Debug)]
pub struct ViewSession<S: MapSurface> {
    surface: S,
    engine: FilterEngine,
    full_bounds: Option<Rect<f64>>, // Region of all features at load time
    status: FilterStatus,
    search_collapsed: bool,
    panel_open: bool,
}

impl<S: MapSurface> ViewSession<S> {
    /// Start a session; the full extent of the surface is captured now.
    pub fn new(surface: S, client_field: impl Into<String>) -> Self {
        Self {
            full_bounds: surface.full_bounds(),
            status: FilterStatus::ShowingAll { total: surface.len() },
            engine: FilterEngine::new(client_field),
            surface,
            search_collapsed: false,
            panel_open: false,
        }
    }

    /// Get a reference to the map surface.
    #[inline] pub fn surface(&self) -> &S { &self.surface }

    /// Give back the map surface, ending the session.
    #[inline] pub fn into_surface(self) -> S { self.surface }

    /// Get a reference to the filter engine.
    #[inline] pub fn engine(&self) -> &FilterEngine { &self.engine }

    /// Get the current status line.
    #[inline] pub fn status(&self) -> FilterStatus { self.status }

    /// Get the extent of all features captured when the session started.
    #[inline] pub fn full_bounds(&self) -> Option<Rect<f64>> { self.full_bounds }

    /// Check if the search box is folded down to its title.
    #[inline] pub fn is_search_collapsed(&self) -> bool { self.search_collapsed }

    /// Check if the zone comparison panel is open.
    #[inline] pub fn is_panel_open(&self) -> bool { self.panel_open }

    /// Filter by client and zoom to the matches, if any.
    /// An empty query is refused and leaves the session as it was.
    pub fn search(&mut self, query: &str) -> Result<FilterResult, FilterError> {
        let result = self.engine.apply_filter(query, &mut self.surface)?;
        if let Some(region) = result.matched_bounds {
            self.surface.fit_bounds(region, Some(MATCH_PADDING));
        }
        self.status = FilterStatus::from_result(&result);
        Ok(result)
    }

    /// Clear the filter and zoom back out to every feature.
    pub fn reset(&mut self) -> FilterStatus {
        self.engine.reset_filter(&mut self.surface);
        if let Some(region) = self.full_bounds {
            self.surface.fit_bounds(region, None);
        }
        self.status = FilterStatus::ShowingAll { total: self.surface.len() };
        self.status
    }

    /// Fold or unfold the search box; returns the new collapsed state.
    pub fn toggle_search_box(&mut self) -> bool {
        self.search_collapsed = !self.search_collapsed;
        self.search_collapsed
    }

    /// Open or close the zone comparison panel; returns the new open state.
    pub fn toggle_panel(&mut self) -> bool {
        self.panel_open = !self.panel_open;
        self.panel_open
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{polygon, Coord, MultiPolygon};
    use serde_json::json;

    use crate::surface::{FeatureLayer, MapFeature, ViewFit};

    fn session() -> ViewSession<FeatureLayer> {
        let lots = [(0.0, "Acme Corp"), (10.0, "Beta LLC"), (20.0, "Acme Corp")];
        let features = lots.iter().map(|&(x, client)| {
            let geometry = MultiPolygon(vec![polygon![
                (x: x, y: 0.0), (x: x + 1.0, y: 0.0), (x: x + 1.0, y: 1.0), (x: x, y: 1.0),
            ]]);
            MapFeature::new(geometry, json!({ "CLIENTE": client }).as_object().cloned().unwrap())
        }).collect();
        ViewSession::new(FeatureLayer::new(features), "CLIENTE")
    }

    #[test]
    fn search_zooms_to_matches_with_padding() {
        let mut session = session();
        let result = session.search("beta").unwrap();

        assert_eq!(session.status(), FilterStatus::Showing { count: 1 });
        let view = session.surface().view().unwrap();
        assert_eq!(Some(view.region), result.matched_bounds);
        assert_eq!(view.padding, Some(MATCH_PADDING));
    }

    #[test]
    fn no_match_keeps_the_view() {
        let mut session = session();
        session.search("gamma").unwrap();
        assert_eq!(session.status(), FilterStatus::NoneFound);
        assert!(session.surface().view().is_none());
    }

    #[test]
    fn empty_query_keeps_status() {
        let mut session = session();
        assert_eq!(session.search(" "), Err(FilterError::EmptyQuery));
        assert_eq!(session.status(), FilterStatus::ShowingAll { total: 3 });
    }

    #[test]
    fn reset_zooms_back_to_full_extent() {
        let mut session = session();
        session.search("acme").unwrap();
        assert_eq!(session.reset(), FilterStatus::ShowingAll { total: 3 });

        let full = session.full_bounds().unwrap();
        assert_eq!(full.min(), Coord { x: 0.0, y: 0.0 });
        assert_eq!(full.max(), Coord { x: 21.0, y: 1.0 });
        assert_eq!(session.surface().view(), Some(&ViewFit { region: full, padding: None }));
        assert!(!session.engine().is_active());
    }

    #[test]
    fn reset_on_empty_surface_does_not_move_the_view() {
        let mut session = ViewSession::new(FeatureLayer::default(), "CLIENTE");
        assert_eq!(session.reset(), FilterStatus::ShowingAll { total: 0 });
        assert!(session.surface().view().is_none());
    }

    #[test]
    fn panel_toggles() {
        let mut session = session();
        assert!(session.toggle_search_box());
        assert!(!session.toggle_search_box());
        assert!(session.toggle_panel());
        assert!(session.is_panel_open());
        assert!(!session.toggle_panel());
    }
}
