//! Facet filtering.
//!
//! `FacetFilter` expresses one condition on one facet; [`FilterSet`] is the
//! per-dashboard filter state: any number of facet conditions combined by
//! logical AND, plus an optional free-text search that ORs across the
//! record's searchable text facets.
//!
//! Matching is total: an unknown facet name or a type mismatch fails the
//! predicate, it never panics or errors.

use chrono::{DateTime, Utc};

use super::FacetValue;
use crate::model::Record;

/// Filter operation for comparing facet values.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterOp {
    /// Exact equality match.
    Eq,
    /// Not equal.
    Ne,
    /// Timestamp is at or after the value (a `Timestamp` cutoff).
    Since,
}

/// A filter condition on a facet.
#[derive(Debug, Clone)]
pub struct FacetFilter {
    /// The facet name (e.g., "status", "role", "shared")
    pub facet: String,
    /// The filter operation
    pub op: FilterOp,
    /// The value to compare against
    pub value: FacetValue,
}

impl FacetFilter {
    pub fn new(facet: impl Into<String>, op: FilterOp, value: FacetValue) -> Self {
        Self {
            facet: facet.into(),
            op,
            value,
        }
    }

    /// Convenience: equality on a tag facet.
    pub fn tag_eq(facet: impl Into<String>, value: impl Into<String>) -> Self {
        Self::new(facet, FilterOp::Eq, FacetValue::Tag(value.into()))
    }

    /// Convenience: equality on a flag facet.
    pub fn flag_eq(facet: impl Into<String>, value: bool) -> Self {
        Self::new(facet, FilterOp::Eq, FacetValue::Flag(value))
    }

    /// Convenience: timestamp at or after `cutoff`.
    pub fn since(facet: impl Into<String>, cutoff: DateTime<Utc>) -> Self {
        Self::new(facet, FilterOp::Since, FacetValue::Timestamp(cutoff))
    }

    /// Check if this filter matches the given record.
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        let Some(facet_value) = record.facet(&self.facet) else {
            return false;
        };

        match &self.op {
            FilterOp::Eq => values_equal(&facet_value, &self.value),
            FilterOp::Ne => !values_equal(&facet_value, &self.value),
            FilterOp::Since => match (&facet_value, &self.value) {
                (FacetValue::Timestamp(actual), FacetValue::Timestamp(cutoff)) => {
                    actual >= cutoff
                }
                _ => false,
            },
        }
    }
}

/// Check if two facet values are equal.
fn values_equal(a: &FacetValue, b: &FacetValue) -> bool {
    match (a, b) {
        (FacetValue::Text(a_val), FacetValue::Text(b_val)) => a_val == b_val,
        (FacetValue::Tag(a_val), FacetValue::Tag(b_val)) => a_val == b_val,
        (FacetValue::Flag(a_val), FacetValue::Flag(b_val)) => a_val == b_val,
        (FacetValue::Timestamp(a_val), FacetValue::Timestamp(b_val)) => a_val == b_val,
        (FacetValue::Count(a_val), FacetValue::Count(b_val)) => a_val == b_val,
        // Different kinds are never equal
        _ => false,
    }
}

/// Per-dashboard filter state.
///
/// Absence of a facet condition is the "all" sentinel: that facet does not
/// constrain the view. The search needle, when set, must be contained
/// (case-insensitively) in at least one searchable text facet.
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    filters: Vec<FacetFilter>,
    search: Option<String>,
}

impl FilterSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style: add or replace the condition on a facet.
    pub fn with(mut self, filter: FacetFilter) -> Self {
        self.set(filter);
        self
    }

    /// Builder-style: set the search needle.
    pub fn with_search(mut self, needle: impl Into<String>) -> Self {
        self.search = Some(needle.into());
        self
    }

    /// Add or replace the condition on a facet. One condition per facet;
    /// setting a facet twice keeps only the latest.
    pub fn set(&mut self, filter: FacetFilter) {
        self.filters.retain(|f| f.facet != filter.facet);
        self.filters.push(filter);
    }

    /// Remove the condition on a facet (back to "all").
    pub fn clear_facet(&mut self, facet: &str) {
        self.filters.retain(|f| f.facet != facet);
    }

    pub fn set_search(&mut self, needle: impl Into<String>) {
        self.search = Some(needle.into());
    }

    pub fn clear_search(&mut self) {
        self.search = None;
    }

    /// Reset to the default state: no conditions, no search.
    pub fn reset(&mut self) {
        self.filters.clear();
        self.search = None;
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty() && self.search.is_none()
    }

    pub fn filters(&self) -> &[FacetFilter] {
        &self.filters
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Check a record against every active condition (logical AND).
    pub fn matches<R: Record>(&self, record: &R) -> bool {
        if !self.filters.iter().all(|f| f.matches(record)) {
            return false;
        }
        match &self.search {
            Some(needle) => search_matches(record, needle),
            None => true,
        }
    }
}

/// Case-insensitive substring search across the record's searchable text
/// facets (OR across fields). An empty needle matches every record.
fn search_matches<R: Record>(record: &R, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    let needle = needle.to_lowercase();
    R::facet_specs()
        .iter()
        .filter(|s| s.searchable)
        .filter_map(|s| record.facet(s.name))
        .any(|v| match v {
            FacetValue::Text(text) => text.to_lowercase().contains(&needle),
            _ => false,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::report::{Report, ReportReason, ReportStatus};

    fn report(author: &str, reason: ReportReason, status: ReportStatus) -> Report {
        let mut r = Report::new(author, "flagged comment body", reason);
        r.status = status;
        r
    }

    #[test]
    fn tag_eq_matches_status() {
        let filter = FacetFilter::tag_eq("status", "pending");
        assert!(filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
        assert!(!filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Dismissed
        )));
    }

    #[test]
    fn ne_inverts_eq() {
        let filter = FacetFilter::new(
            "status",
            FilterOp::Ne,
            FacetValue::Tag("removed".into()),
        );
        assert!(filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
        assert!(!filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Removed
        )));
    }

    #[test]
    fn unknown_facet_never_matches() {
        let filter = FacetFilter::tag_eq("nonexistent", "x");
        assert!(!filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
    }

    #[test]
    fn type_mismatch_never_matches() {
        // status is a Tag facet, not a Flag
        let filter = FacetFilter::flag_eq("status", true);
        assert!(!filter.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
    }

    #[test]
    fn since_compares_timestamps() {
        let r = report("ada", ReportReason::Spam, ReportStatus::Pending);
        let before = r.reported_at - chrono::Duration::hours(1);
        let after = r.reported_at + chrono::Duration::hours(1);

        assert!(FacetFilter::since("reported_at", before).matches(&r));
        assert!(FacetFilter::since("reported_at", r.reported_at).matches(&r));
        assert!(!FacetFilter::since("reported_at", after).matches(&r));
    }

    #[test]
    fn filter_set_is_and_conjunctive() {
        // status=pending AND reason=spam: a harassment report is excluded
        // even though its status matches
        let filters = FilterSet::new()
            .with(FacetFilter::tag_eq("status", "pending"))
            .with(FacetFilter::tag_eq("reason", "spam"));

        assert!(filters.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
        assert!(!filters.matches(&report(
            "ada",
            ReportReason::Harassment,
            ReportStatus::Pending
        )));
        assert!(!filters.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Dismissed
        )));
    }

    #[test]
    fn search_is_case_insensitive_and_ors_across_fields() {
        let filters = FilterSet::new().with_search("ADA");
        assert!(filters.matches(&report(
            "ada lovelace",
            ReportReason::Spam,
            ReportStatus::Pending
        )));

        // needle found in the excerpt instead of the author
        let filters = FilterSet::new().with_search("FLAGGED");
        assert!(filters.matches(&report(
            "grace",
            ReportReason::Spam,
            ReportStatus::Pending
        )));

        let filters = FilterSet::new().with_search("zzz");
        assert!(!filters.matches(&report(
            "grace",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
    }

    #[test]
    fn empty_search_matches_everything() {
        let filters = FilterSet::new().with_search("");
        assert!(filters.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
    }

    #[test]
    fn setting_same_facet_twice_keeps_latest() {
        let mut filters = FilterSet::new();
        filters.set(FacetFilter::tag_eq("status", "pending"));
        filters.set(FacetFilter::tag_eq("status", "removed"));
        assert_eq!(filters.filters().len(), 1);
        assert!(filters.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Removed
        )));
    }

    #[test]
    fn reset_returns_to_match_all() {
        let mut filters = FilterSet::new()
            .with(FacetFilter::tag_eq("status", "removed"))
            .with_search("nope");
        filters.reset();
        assert!(filters.is_empty());
        assert!(filters.matches(&report(
            "ada",
            ReportReason::Spam,
            ReportStatus::Pending
        )));
    }
}
