//! Derive the filtered, optionally sorted view of a store.

use crate::commands::CmdResult;
use crate::error::Result;
use crate::facets::FilterSet;
use crate::model::Record;
use crate::store::RecordStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    /// Most recent primary timestamp first.
    NewestFirst,
    OldestFirst,
    /// Case-insensitive by record label.
    Alphabetical,
}

impl SortKey {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "newest" => Some(SortKey::NewestFirst),
            "oldest" => Some(SortKey::OldestFirst),
            "name" | "alpha" => Some(SortKey::Alphabetical),
            _ => None,
        }
    }
}

/// Recompute the derived view: filter, then sort.
///
/// With no sort key the store's insertion order is preserved. An empty
/// store yields an empty view, not an error. Recomputation is pure; the
/// store is untouched.
pub fn run<R: Record, S: RecordStore<R>>(
    store: &S,
    filters: &FilterSet,
    sort: Option<SortKey>,
) -> Result<CmdResult<R>> {
    let mut view: Vec<R> = store
        .list()?
        .into_iter()
        .filter(|r| filters.matches(r))
        .collect();

    if let Some(key) = sort {
        match key {
            SortKey::NewestFirst => view.sort_by(|a, b| b.created_at().cmp(&a.created_at())),
            SortKey::OldestFirst => view.sort_by(|a, b| a.created_at().cmp(&b.created_at())),
            SortKey::Alphabetical => {
                view.sort_by(|a, b| a.label().to_lowercase().cmp(&b.label().to_lowercase()))
            }
        }
    }

    Ok(CmdResult::new().with_listed(view))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::FacetFilter;
    use crate::model::report::{Report, ReportReason, ReportStatus};
    use crate::store::MemoryStore;
    use chrono::Duration;

    fn seeded() -> MemoryStore<Report> {
        let mut older = Report::new("ada", "zebra comment", ReportReason::Spam);
        older.reported_at = older.reported_at - Duration::days(2);
        let mut dismissed = Report::new("grace", "apple comment", ReportReason::Harassment);
        dismissed.status = ReportStatus::Dismissed;
        let newest = Report::new("joan", "mango comment", ReportReason::Spam);
        MemoryStore::seeded(vec![older, dismissed, newest])
    }

    #[test]
    fn no_filters_returns_store_in_order() {
        let store = seeded();
        let result = run(&store, &FilterSet::new(), None).unwrap();
        let authors: Vec<&str> = result.listed.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["ada", "grace", "joan"]);
    }

    #[test]
    fn filters_apply_before_sorting() {
        let store = seeded();
        let filters = FilterSet::new().with(FacetFilter::tag_eq("status", "pending"));
        let result = run(&store, &filters, Some(SortKey::NewestFirst)).unwrap();
        let authors: Vec<&str> = result.listed.iter().map(|r| r.author.as_str()).collect();
        assert_eq!(authors, vec!["joan", "ada"]);
    }

    #[test]
    fn alphabetical_sorts_by_label() {
        let store = seeded();
        let result = run(&store, &FilterSet::new(), Some(SortKey::Alphabetical)).unwrap();
        let excerpts: Vec<&str> = result.listed.iter().map(|r| r.excerpt.as_str()).collect();
        assert_eq!(
            excerpts,
            vec!["apple comment", "mango comment", "zebra comment"]
        );
    }

    #[test]
    fn empty_store_yields_empty_view() {
        let store: MemoryStore<Report> = MemoryStore::new();
        let result = run(&store, &FilterSet::new(), None).unwrap();
        assert!(result.listed.is_empty());
    }

    #[test]
    fn sort_key_parse() {
        assert_eq!(SortKey::parse("newest"), Some(SortKey::NewestFirst));
        assert_eq!(SortKey::parse("NAME"), Some(SortKey::Alphabetical));
        assert_eq!(SortKey::parse("sideways"), None);
    }
}
