//! Filtered list model
//!
//! Owns the city list plus the currently visible subset, and exposes
//! the row contract the displays pull from. The visible subset is a
//! pure function of (dataset, query): applying a query recomputes it
//! in full, never incrementally.

use crate::dataset::Dataset;

/// Indices of dataset entries whose name starts with `query`.
///
/// Case-sensitive. The empty query selects everything, so the screen
/// shows the full list until the user narrows it. Dataset order is
/// preserved.
pub fn prefix_match_indices(cities: &Dataset, query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..cities.len()).collect();
    }
    cities
        .iter()
        .enumerate()
        .filter(|(_, name)| name.starts_with(query))
        .map(|(idx, _)| idx)
        .collect()
}

/// The screen's data source: full city list + visible subset.
pub struct ListModel {
    cities: Dataset,
    shown_indices: Vec<usize>,
    query: String,
}

impl ListModel {
    /// New model showing the full list (empty query).
    pub fn new(cities: Dataset) -> Self {
        let shown_indices = (0..cities.len()).collect();
        Self {
            cities,
            shown_indices,
            query: String::new(),
        }
    }

    /// Recompute the visible subset for `query`.
    ///
    /// Full refresh: the previous subset is discarded and displays
    /// re-pull every row afterwards.
    pub fn apply(&mut self, query: &str) {
        self.query.clear();
        self.query.push_str(query);
        self.shown_indices = prefix_match_indices(&self.cities, query);
    }

    /// Number of visible rows.
    pub fn row_count(&self) -> usize {
        self.shown_indices.len()
    }

    /// Visible row content at `row`, in dataset order.
    pub fn row_content(&self, row: usize) -> Option<&str> {
        let idx = *self.shown_indices.get(row)?;
        self.cities.get(idx)
    }

    /// All visible rows, in order.
    pub fn rows(&self) -> impl Iterator<Item = &str> {
        self.shown_indices
            .iter()
            .filter_map(|&idx| self.cities.get(idx))
    }

    /// The query the current subset was computed from.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Total dataset size, independent of the current filter.
    pub fn total_count(&self) -> usize {
        self.cities.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three_cities() -> Dataset {
        Dataset::from_names(vec![
            "New York".to_string(),
            "London".to_string(),
            "Oslo".to_string(),
        ])
    }

    #[test]
    fn prefix_match_is_ordered_subsequence() {
        let cities = Dataset::builtin();
        let hits = prefix_match_indices(&cities, "P");
        // Indices strictly increasing ⇒ subsequence in dataset order.
        assert!(hits.windows(2).all(|w| w[0] < w[1]));
        for idx in hits {
            assert!(cities.get(idx).unwrap().starts_with('P'));
        }
    }

    #[test]
    fn empty_query_selects_entire_dataset() {
        let cities = Dataset::builtin();
        let hits = prefix_match_indices(&cities, "");
        assert_eq!(hits.len(), cities.len());
        assert_eq!(hits, (0..cities.len()).collect::<Vec<_>>());
    }

    #[test]
    fn match_is_case_sensitive() {
        let cities = Dataset::builtin();
        assert!(prefix_match_indices(&cities, "lo").is_empty());
        assert_eq!(prefix_match_indices(&cities, "Lo").len(), 2); // London, Los Angeles
    }

    #[test]
    fn lo_matches_only_london_in_three_city_list() {
        let mut model = ListModel::new(three_cities());
        model.apply("Lo");
        assert_eq!(model.row_count(), 1);
        assert_eq!(model.row_content(0), Some("London"));
    }

    #[test]
    fn empty_query_shows_all_three_cities() {
        let mut model = ListModel::new(three_cities());
        model.apply("Z");
        model.apply("");
        let rows: Vec<&str> = model.rows().collect();
        assert_eq!(rows, vec!["New York", "London", "Oslo"]);
    }

    #[test]
    fn unmatched_query_yields_zero_rows() {
        let mut model = ListModel::new(three_cities());
        model.apply("Z");
        assert_eq!(model.row_count(), 0);
        assert_eq!(model.row_content(0), None);
    }

    #[test]
    fn new_model_starts_with_full_list() {
        let model = ListModel::new(Dataset::builtin());
        assert_eq!(model.row_count(), model.total_count());
        assert_eq!(model.query(), "");
    }

    #[test]
    fn apply_records_query() {
        let mut model = ListModel::new(Dataset::builtin());
        model.apply("War");
        assert_eq!(model.query(), "War");
        assert_eq!(model.row_content(0), Some("Warsaw"));
    }

    #[test]
    fn row_content_out_of_range_is_none() {
        let model = ListModel::new(Dataset::builtin());
        assert_eq!(model.row_content(model.row_count()), None);
    }
}
