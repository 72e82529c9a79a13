//! # Dashboard Facade
//!
//! The per-screen state container: one [`Dashboard`] owns a record store,
//! the active [`FilterSet`], the [`SelectionSet`], the pending-work
//! [`Badge`], and a [`NotificationSink`]. It is the single entry point
//! clients use; commands stay free of UI state, the facade wires them
//! together.
//!
//! The derived view is never stored: [`Dashboard::view`] recomputes it from
//! (store, filters, sort) on every call, so it cannot drift from the store.
//!
//! Generic over the store and the sink, so tests run entirely in memory
//! with a buffering sink.

use std::collections::HashSet;
use std::marker::PhantomData;

use uuid::Uuid;

use crate::badge::Badge;
use crate::commands::list::SortKey;
use crate::commands::{self, CmdResult};
use crate::error::{KeepsakeError, Result};
use crate::facets::{filterable_facets, get_spec, FacetFilter, FilterSet};
use crate::model::media::{MediaAction, MediaItem};
use crate::model::member::{Member, MemberAction};
use crate::model::report::{ModerationAction, Report, ReportStatus};
use crate::model::Record;
use crate::notify::NotificationSink;
use crate::selection::SelectionSet;
use crate::store::RecordStore;

/// What an action applies to: the checked rows, explicit ids, or 1-based
/// positions in the current derived view.
#[derive(Debug, Clone)]
pub enum Target {
    Selected,
    Ids(Vec<Uuid>),
    Rows(Vec<usize>),
}

pub struct Dashboard<R: Record, S: RecordStore<R>, N: NotificationSink> {
    store: S,
    filters: FilterSet,
    selection: SelectionSet,
    sort: Option<SortKey>,
    badge: Badge,
    sink: N,
    _record: PhantomData<R>,
}

impl<R: Record, S: RecordStore<R>, N: NotificationSink> Dashboard<R, S, N> {
    pub fn new(store: S, sink: N) -> Self {
        Self {
            store,
            filters: FilterSet::new(),
            selection: SelectionSet::new(),
            sort: None,
            badge: Badge::default(),
            sink,
            _record: PhantomData,
        }
    }

    // --- filter state ---

    /// Set a filter condition, validated against the record's facet
    /// registry: the facet must exist and be marked filterable.
    pub fn set_filter(&mut self, filter: FacetFilter) -> Result<()> {
        let spec = get_spec(R::facet_specs(), &filter.facet).ok_or_else(|| {
            KeepsakeError::InvalidFilter(format!("unknown facet '{}'", filter.facet))
        })?;
        if !spec.filterable {
            return Err(KeepsakeError::InvalidFilter(format!(
                "facet '{}' cannot be filtered (filterable facets: {})",
                filter.facet,
                filterable_facets(R::facet_specs()).join(", ")
            )));
        }
        self.filters.set(filter);
        Ok(())
    }

    pub fn clear_facet(&mut self, facet: &str) {
        self.filters.clear_facet(facet);
    }

    pub fn set_search(&mut self, needle: impl Into<String>) {
        self.filters.set_search(needle);
    }

    pub fn reset_filters(&mut self) {
        self.filters.reset();
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn set_sort(&mut self, sort: Option<SortKey>) {
        self.sort = sort;
    }

    // --- derived view ---

    /// Recompute the derived view. Pure with respect to the store.
    pub fn view(&self) -> Result<Vec<R>> {
        Ok(commands::list::run(&self.store, &self.filters, self.sort)?.listed)
    }

    pub fn view_ids(&self) -> Result<Vec<Uuid>> {
        Ok(self.view()?.iter().map(|r| r.id()).collect())
    }

    // --- selection ---

    pub fn toggle(&mut self, id: Uuid) {
        self.selection.toggle(id);
    }

    /// Toggle-style select-all, scoped to the current derived view.
    pub fn select_all(&mut self) -> Result<()> {
        let ids = self.view_ids()?;
        self.selection.select_all(&ids);
        Ok(())
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    // --- actions ---

    /// Permanently delete the targeted records, pruning the selection so it
    /// never references a missing id.
    pub fn delete(&mut self, target: Target) -> Result<CmdResult<R>> {
        let ids = self.resolve(target)?;
        let result = commands::delete::run(&mut self.store, &ids)?;
        let existing: HashSet<Uuid> = self.store.list()?.iter().map(|r| r.id()).collect();
        self.selection.retain_existing(&existing);
        self.sink.notify_all(&result.messages);
        Ok(result)
    }

    /// Resolve a target to concrete record ids, in store order for the
    /// selection and in the view's order for row positions.
    fn resolve(&self, target: Target) -> Result<Vec<Uuid>> {
        match target {
            Target::Ids(ids) => Ok(ids),
            Target::Selected => {
                let store_order: Vec<Uuid> =
                    self.store.list()?.iter().map(|r| r.id()).collect();
                Ok(self.selection.in_view_order(&store_order))
            }
            Target::Rows(rows) => {
                let view_ids = self.view_ids()?;
                rows.into_iter()
                    .map(|row| {
                        // Rows are 1-based; 0 is out of range, not row -1
                        row.checked_sub(1)
                            .and_then(|i| view_ids.get(i).copied())
                            .ok_or_else(|| {
                                KeepsakeError::InvalidSelector(format!(
                                    "row {} is out of range (view has {} rows)",
                                    row,
                                    view_ids.len()
                                ))
                            })
                    })
                    .collect()
            }
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn sink(&self) -> &N {
        &self.sink
    }
}

impl<S: RecordStore<Report>, N: NotificationSink> Dashboard<Report, S, N> {
    /// Build a moderation dashboard, counting pending reports into the badge.
    pub fn moderation(store: S, sink: N) -> Result<Self> {
        let pending = store
            .list()?
            .iter()
            .filter(|r| r.status == ReportStatus::Pending)
            .count() as u32;
        let mut dashboard = Self::new(store, sink);
        dashboard.badge = Badge::new(pending);
        Ok(dashboard)
    }

    pub fn badge(&self) -> Badge {
        self.badge
    }

    /// Dismiss, remove, or restore the targeted reports.
    pub fn moderate(
        &mut self,
        action: ModerationAction,
        target: Target,
    ) -> Result<CmdResult<Report>> {
        let ids = self.resolve(target)?;
        let result = commands::moderate::run(&mut self.store, &mut self.badge, action, &ids)?;
        self.sink.notify_all(&result.messages);
        Ok(result)
    }
}

impl<S: RecordStore<Member>, N: NotificationSink> Dashboard<Member, S, N> {
    /// Suspend or reactivate the targeted members.
    pub fn member_action(
        &mut self,
        action: MemberAction,
        target: Target,
    ) -> Result<CmdResult<Member>> {
        let ids = self.resolve(target)?;
        let result = commands::members::run(&mut self.store, action, &ids)?;
        self.sink.notify_all(&result.messages);
        Ok(result)
    }
}

impl<S: RecordStore<MediaItem>, N: NotificationSink> Dashboard<MediaItem, S, N> {
    /// Share or unshare the targeted media items.
    pub fn media_action(
        &mut self,
        action: MediaAction,
        target: Target,
    ) -> Result<CmdResult<MediaItem>> {
        let ids = self.resolve(target)?;
        let result = commands::media::run(&mut self.store, action, &ids)?;
        self.sink.notify_all(&result.messages);
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::FacetFilter;
    use crate::model::report::ReportReason;
    use crate::notify::MemorySink;
    use crate::store::MemoryStore;

    fn moderation_fixture() -> Dashboard<Report, MemoryStore<Report>, MemorySink> {
        let reports = vec![
            Report::new("ada", "pending one", ReportReason::Spam),
            Report::new("joan", "pending two", ReportReason::Harassment),
            {
                let mut r = Report::new("grace", "already handled", ReportReason::Spam);
                r.status = ReportStatus::Dismissed;
                r
            },
        ];
        Dashboard::moderation(MemoryStore::seeded(reports), MemorySink::new()).unwrap()
    }

    #[test]
    fn moderation_badge_counts_pending_on_construction() {
        let dashboard = moderation_fixture();
        assert_eq!(dashboard.badge().count(), 2);
    }

    #[test]
    fn view_recomputes_from_filters() {
        let mut dashboard = moderation_fixture();
        assert_eq!(dashboard.view().unwrap().len(), 3);

        dashboard
            .set_filter(FacetFilter::tag_eq("status", "pending"))
            .unwrap();
        assert_eq!(dashboard.view().unwrap().len(), 2);

        dashboard.reset_filters();
        assert_eq!(dashboard.view().unwrap().len(), 3);
    }

    #[test]
    fn select_all_scopes_to_filtered_view() {
        let mut dashboard = moderation_fixture();
        dashboard
            .set_filter(FacetFilter::tag_eq("status", "pending"))
            .unwrap();
        dashboard.select_all().unwrap();

        assert_eq!(dashboard.selection().len(), 2);

        // Second select-all with the same view clears (toggle semantics)
        dashboard.select_all().unwrap();
        assert!(dashboard.selection().is_empty());
    }

    #[test]
    fn delete_prunes_selection() {
        let mut dashboard = moderation_fixture();
        let ids = dashboard.view_ids().unwrap();
        dashboard.toggle(ids[0]);
        dashboard.toggle(ids[2]);

        dashboard.delete(Target::Ids(vec![ids[0]])).unwrap();

        assert!(!dashboard.selection().contains(&ids[0]));
        assert!(dashboard.selection().contains(&ids[2]));
        assert!(!dashboard.view_ids().unwrap().contains(&ids[0]));
    }

    #[test]
    fn moderate_selected_acts_on_checked_rows_in_store_order() {
        let mut dashboard = moderation_fixture();
        let ids = dashboard.view_ids().unwrap();
        dashboard.toggle(ids[1]);
        dashboard.toggle(ids[0]);

        let result = dashboard
            .moderate(ModerationAction::Remove, Target::Selected)
            .unwrap();

        assert_eq!(result.affected.len(), 2);
        assert_eq!(result.affected[0].id, ids[0]);
        assert_eq!(result.affected[1].id, ids[1]);
        assert_eq!(dashboard.badge().count(), 0);
    }

    #[test]
    fn rows_resolve_against_current_view() {
        let mut dashboard = moderation_fixture();
        dashboard
            .set_filter(FacetFilter::tag_eq("status", "pending"))
            .unwrap();

        let result = dashboard
            .moderate(ModerationAction::Dismiss, Target::Rows(vec![1]))
            .unwrap();
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].author, "ada");
    }

    #[test]
    fn out_of_range_row_is_an_invalid_selector() {
        let mut dashboard = moderation_fixture();
        let err = dashboard
            .moderate(ModerationAction::Dismiss, Target::Rows(vec![99]))
            .unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidSelector(_)));
    }

    #[test]
    fn row_zero_is_an_invalid_selector() {
        let mut dashboard = moderation_fixture();
        let err = dashboard
            .moderate(ModerationAction::Dismiss, Target::Rows(vec![0]))
            .unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidSelector(_)));
    }

    #[test]
    fn filters_are_validated_against_the_facet_registry() {
        let mut dashboard = moderation_fixture();

        let err = dashboard
            .set_filter(FacetFilter::tag_eq("nonexistent", "x"))
            .unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidFilter(_)));

        // "excerpt" is searchable but not filterable
        let err = dashboard
            .set_filter(FacetFilter::tag_eq("excerpt", "x"))
            .unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidFilter(_)));
    }

    #[test]
    fn actions_notify_the_sink() {
        let mut dashboard = moderation_fixture();
        let ids = dashboard.view_ids().unwrap();
        dashboard
            .moderate(ModerationAction::Dismiss, Target::Ids(vec![ids[0]]))
            .unwrap();
        dashboard.delete(Target::Ids(vec![ids[1]])).unwrap();

        let notified = dashboard.sink().contents();
        assert_eq!(notified.len(), 2);
        assert!(notified[0].contains("dismissed"));
        assert!(notified[1].contains("Deleted"));
    }

    #[test]
    fn moderate_by_id_updates_the_store() {
        let mut dashboard = moderation_fixture();
        let ids = dashboard.view_ids().unwrap();
        dashboard
            .moderate(ModerationAction::Dismiss, Target::Ids(vec![ids[0]]))
            .unwrap();

        assert_eq!(
            dashboard.store().get(&ids[0]).unwrap().status,
            ReportStatus::Dismissed
        );
    }
}
