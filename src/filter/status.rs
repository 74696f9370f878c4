use std::fmt;

use serde::Serialize;

use super::FilterResult;

/// The status line shown under the client search box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum FilterStatus {
    /// No filter applied; `total` features are visible.
    ShowingAll { total: usize },
    /// A filter matched `count` features.
    Showing { count: usize },
    /// A filter matched nothing.
    NoneFound,
}

impl FilterStatus {
    pub fn from_result(result: &FilterResult) -> Self {
        match result.match_count {
            0 => FilterStatus::NoneFound,
            count => FilterStatus::Showing { count },
        }
    }
}

impl fmt::Display for FilterStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FilterStatus::ShowingAll { total } => write!(f, "Showing all ({total})"),
            FilterStatus::Showing { count: 1 } => f.write_str("Showing 1 polygon"),
            FilterStatus::Showing { count } => write!(f, "Showing {count} polygons"),
            FilterStatus::NoneFound => f.write_str("No matches found"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(match_count: usize) -> FilterResult {
        FilterResult { match_count, matched_bounds: None, matched: (0..match_count).collect() }
    }

    #[test]
    fn zero_matches_report_none_found() {
        assert_eq!(FilterStatus::from_result(&result(0)), FilterStatus::NoneFound);
        assert_eq!(FilterStatus::from_result(&result(3)), FilterStatus::Showing { count: 3 });
    }

    #[test]
    fn status_lines() {
        assert_eq!(FilterStatus::ShowingAll { total: 12 }.to_string(), "Showing all (12)");
        assert_eq!(FilterStatus::Showing { count: 3 }.to_string(), "Showing 3 polygons");
        assert_eq!(FilterStatus::Showing { count: 1 }.to_string(), "Showing 1 polygon");
        assert_eq!(
            serde_json::to_value(FilterStatus::Showing { count: 3 }).unwrap(),
            serde_json::json!({ "kind": "showing", "count": 3 })
        );
    }
}
