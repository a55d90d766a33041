//! Directory view-model: summary counters and live filtering.
//!
//! The filter is a linear scan over the fetched collection: every record
//! whose name OR category contains the query as a contiguous substring is
//! kept. Matching is deliberately case-sensitive, mirroring the site's
//! original behavior; records missing either field never match and never
//! error. An empty query always restores the full base collection, so
//! filtering is relative to the untouched snapshot, not cumulative.

use std::collections::HashSet;

use serde::Serialize;

use super::record::{Collection, Record};

/// Summary counters derived from the full collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Summary {
    /// Total number of records.
    pub count: usize,

    /// Records with a non-empty documentation link.
    pub doc_count: usize,

    /// Distinct category values (case-sensitive, exact match).
    pub category_count: usize,
}

/// Compute the summary counters for a set of records.
pub fn summarize(records: &[Record]) -> Summary {
    let categories: HashSet<&str> = records
        .iter()
        .filter_map(|r| r.category.as_deref())
        .collect();

    Summary {
        count: records.len(),
        doc_count: records.iter().filter(|r| r.has_documentation()).count(),
        category_count: categories.len(),
    }
}

/// Whether a record matches a non-empty query.
fn matches(record: &Record, query: &str) -> bool {
    record.name.as_deref().is_some_and(|n| n.contains(query))
        || record.category.as_deref().is_some_and(|c| c.contains(query))
}

/// Filter records by a free-text query.
///
/// An empty query returns the full base set. Otherwise every record whose
/// name or category contains the query as a contiguous case-sensitive
/// substring is returned.
pub fn filter_records(query: &str, records: &[Record]) -> Vec<Record> {
    if query.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|r| matches(r, query))
        .cloned()
        .collect()
}

/// The state behind the directory page.
///
/// Holds the immutable base collection, the current query, and the last
/// computed filtered view. `on_query_change` always recomputes from the
/// base collection.
#[derive(Debug, Clone)]
pub struct DirectoryView {
    base: Collection,
    query: String,
    filtered: Vec<Record>,
}

impl DirectoryView {
    /// Create a view over a freshly fetched collection, showing everything.
    pub fn new(base: Collection) -> Self {
        let filtered = base.records.clone();
        Self {
            base,
            query: String::new(),
            filtered,
        }
    }

    /// Re-filter against the base collection with a new query.
    pub fn on_query_change(&mut self, query: &str) {
        self.query = query.to_string();
        self.filtered = filter_records(query, &self.base.records);
    }

    /// The currently displayed records.
    pub fn records(&self) -> &[Record] {
        &self.filtered
    }

    /// The current filter query.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Summary counters over the full base collection, not the filtered view.
    pub fn summary(&self) -> Summary {
        summarize(&self.base.records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> Record {
        Record {
            name: Some(name.to_string()),
            category: Some(category.to_string()),
            ..Record::default()
        }
    }

    fn sample() -> Vec<Record> {
        vec![record("Figma", "Design"), record("GitHub", "DevTools")]
    }

    #[test]
    fn test_summarize_empty() {
        let summary = summarize(&[]);
        assert_eq!(summary, Summary::default());
        assert_eq!(summary.count, 0);
        assert_eq!(summary.doc_count, 0);
        assert_eq!(summary.category_count, 0);
    }

    #[test]
    fn test_summarize_counts() {
        let mut records = sample();
        records[0].documentation = Some("help.figma.com".to_string());
        records.push(record("Sketch", "Design"));

        let summary = summarize(&records);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.doc_count, 1);
        // "Design" appears twice but counts once
        assert_eq!(summary.category_count, 2);
        assert!(summary.doc_count <= summary.count);
        assert!(summary.category_count <= summary.count);
    }

    #[test]
    fn test_summarize_empty_documentation_does_not_count() {
        let mut records = sample();
        records[0].documentation = Some(String::new());
        records[1].documentation = Some("https://x".to_string());
        assert_eq!(summarize(&records).doc_count, 1);
    }

    #[test]
    fn test_summarize_categories_case_sensitive() {
        let records = vec![record("A", "design"), record("B", "Design")];
        assert_eq!(summarize(&records).category_count, 2);
    }

    #[test]
    fn test_empty_query_returns_base() {
        let records = sample();
        let filtered = filter_records("", &records);
        assert_eq!(filtered, records);
    }

    #[test]
    fn test_filter_is_case_sensitive() {
        let records = sample();
        // "git" does not match "GitHub" with exact-case matching
        assert!(filter_records("git", &records).is_empty());

        let filtered = filter_records("Git", &records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].name.as_deref(), Some("GitHub"));
    }

    #[test]
    fn test_filter_matches_category_too() {
        let records = sample();
        let filtered = filter_records("Dev", &records);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].category.as_deref(), Some("DevTools"));
    }

    #[test]
    fn test_filter_returns_subset_and_excludes_non_matches() {
        let records = sample();
        let filtered = filter_records("i", &records);
        assert!(filtered.iter().all(|r| records.contains(r)));
        for r in &records {
            let matched = filtered.contains(r);
            let should_match = r.name.as_deref().is_some_and(|n| n.contains('i'))
                || r.category.as_deref().is_some_and(|c| c.contains('i'));
            assert_eq!(matched, should_match);
        }
    }

    #[test]
    fn test_filter_skips_records_without_fields() {
        let records = vec![Record::default(), record("Figma", "Design")];
        let filtered = filter_records("Fig", &records);
        assert_eq!(filtered.len(), 1);

        // The bare record is still part of the unfiltered view
        assert_eq!(filter_records("", &records).len(), 2);
    }

    #[test]
    fn test_filter_idempotent() {
        let records = sample();
        let once = filter_records("i", &records);
        let twice = filter_records("i", &once);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_view_requery_is_not_cumulative() {
        let mut view = DirectoryView::new(Collection::new(sample()));
        assert_eq!(view.records().len(), 2);

        view.on_query_change("GitHub");
        assert_eq!(view.records().len(), 1);

        // A new query filters from the base, not from the previous result
        view.on_query_change("Figma");
        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].name.as_deref(), Some("Figma"));

        view.on_query_change("");
        assert_eq!(view.records().len(), 2);
    }

    #[test]
    fn test_view_summary_ignores_filter() {
        let mut view = DirectoryView::new(Collection::new(sample()));
        view.on_query_change("Figma");
        assert_eq!(view.summary().count, 2);
    }
}
