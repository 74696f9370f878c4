use std::fmt;

use geo::Rect;
use serde::{Serialize, Serializer};

use crate::style::{Style, StylePatch};
use crate::surface::{bounds_to_array, union_bounds, MapSurface};

/// Reasons a filter request is refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterError {
    /// The query was empty or only whitespace.
    EmptyQuery,
}

impl fmt::Display for FilterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterError::EmptyQuery => f.write_str("Please type or select a client"),
        }
    }
}

impl std::error::Error for FilterError {}

/// Outcome of a client filter.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterResult {
    pub match_count: usize,
    #[serde(serialize_with = "serialize_bounds")]
    pub matched_bounds: Option<Rect<f64>>,
    pub matched: Vec<usize>, // Positions of the matching features
}

fn serialize_bounds<S: Serializer>(bounds: &Option<Rect<f64>>, serializer: S) -> Result<S::Ok, S::Error> {
    bounds.as_ref().map(bounds_to_array).serialize(serializer)
}

/// Filters map features by client name and restores their styles afterwards.
#[derive(Debug, Clone)]
pub struct FilterEngine {
    client_field: String,
    query: String,
    match_count: usize,
    originals: Vec<Option<Style>>, // Style of each feature before its first filter
}

impl FilterEngine {
    pub fn new(client_field: impl Into<String>) -> Self {
        Self {
            client_field: client_field.into(),
            query: String::new(),
            match_count: 0,
            originals: Vec::new(),
        }
    }

    /// Get the attribute name holding client names.
    #[inline] pub fn client_field(&self) -> &str { &self.client_field }

    /// Get the active (lowercased, trimmed) query, empty when no filter is applied.
    #[inline] pub fn query(&self) -> &str { &self.query }

    /// Get the number of matches of the active query.
    #[inline] pub fn match_count(&self) -> usize { self.match_count }

    /// Check if a filter is currently applied.
    #[inline] pub fn is_active(&self) -> bool { !self.query.is_empty() }

    /// Get the captured original style of a feature, if it was ever filtered.
    #[inline]
    pub fn original_style(&self, idx: usize) -> Option<&Style> {
        self.originals.get(idx).and_then(Option::as_ref)
    }

    /// Show only the features whose client contains `query` (case-insensitive).
    /// Matches are highlighted in their original colors; everything else is hidden.
    pub fn apply_filter<S: MapSurface + ?Sized>(&mut self, query: &str, surface: &mut S) -> Result<FilterResult, FilterError> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() { return Err(FilterError::EmptyQuery) }

        self.capture_originals(surface);

        let mut matched = Vec::new();
        for idx in 0..surface.len() {
            let original = self.originals[idx].unwrap_or_else(|| surface.style(idx));
            if self.client_matches(surface, idx, &needle) {
                surface.set_style(idx, &StylePatch::highlight(&original));
                matched.push(idx);
            } else {
                surface.set_style(idx, &StylePatch::suppressed());
            }
        }

        let matched_bounds = union_bounds(matched.iter().filter_map(|&idx| surface.bounds(idx)));
        self.query = needle;
        self.match_count = matched.len();

        Ok(FilterResult { match_count: matched.len(), matched_bounds, matched })
    }

    /// Restore the original style of every feature that was filtered, and clear the query.
    /// Features that were never filtered are left untouched.
    pub fn reset_filter<S: MapSurface + ?Sized>(&mut self, surface: &mut S) {
        for (idx, original) in self.originals.iter().enumerate().take(surface.len()) {
            if let Some(original) = original {
                surface.set_style(idx, &StylePatch::restore(original));
            }
        }
        self.query.clear();
        self.match_count = 0;
    }

    /// Record the current style of every feature not seen before.
    fn capture_originals<S: MapSurface + ?Sized>(&mut self, surface: &S) {
        if self.originals.len() < surface.len() {
            self.originals.resize(surface.len(), None);
        }
        for (idx, slot) in self.originals.iter_mut().enumerate().take(surface.len()) {
            if slot.is_none() { *slot = Some(surface.style(idx)) }
        }
    }

    fn client_matches<S: MapSurface + ?Sized>(&self, surface: &S, idx: usize, needle: &str) -> bool {
        surface.attribute(idx, &self.client_field)
            .filter(|client| !client.is_blank())
            .is_some_and(|client| client.to_string().to_lowercase().contains(needle))
    }
}
