//! Comment-moderation records.
//!
//! A [`Report`] is a flagged comment sitting in the moderation queue. Its
//! lifecycle is a one-way machine with a single escape hatch:
//!
//! ```text
//! pending --dismiss--> dismissed
//! pending --remove---> removed
//! dismissed | removed --restore--> pending
//! ```
//!
//! Dismiss and remove are only valid from `pending`; restore is only valid
//! from a resolved state. Everything else is rejected (see
//! [`ReportStatus::transition`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KeepsakeError, Result};
use crate::facets::{FacetKind, FacetSpec, FacetValue};
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportReason {
    Spam,
    Harassment,
    Misinformation,
    Other,
}

impl ReportReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportReason::Spam => "spam",
            ReportReason::Harassment => "harassment",
            ReportReason::Misinformation => "misinformation",
            ReportReason::Other => "other",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "spam" => Ok(ReportReason::Spam),
            "harassment" => Ok(ReportReason::Harassment),
            "misinformation" => Ok(ReportReason::Misinformation),
            "other" => Ok(ReportReason::Other),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown report reason '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    #[default]
    Pending,
    Dismissed,
    Removed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Pending => "pending",
            ReportStatus::Dismissed => "dismissed",
            ReportStatus::Removed => "removed",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(ReportStatus::Pending),
            "dismissed" => Ok(ReportStatus::Dismissed),
            "removed" => Ok(ReportStatus::Removed),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown report status '{}'",
                other
            ))),
        }
    }

    /// The transition table. Returns the new status, or `None` when the
    /// action is not valid from `self`.
    pub fn transition(self, action: ModerationAction) -> Option<ReportStatus> {
        match (self, action) {
            (ReportStatus::Pending, ModerationAction::Dismiss) => Some(ReportStatus::Dismissed),
            (ReportStatus::Pending, ModerationAction::Remove) => Some(ReportStatus::Removed),
            (ReportStatus::Dismissed, ModerationAction::Restore)
            | (ReportStatus::Removed, ModerationAction::Restore) => Some(ReportStatus::Pending),
            _ => None,
        }
    }
}

/// Moderation actions a report can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModerationAction {
    Dismiss,
    Remove,
    Restore,
}

impl ModerationAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModerationAction::Dismiss => "dismiss",
            ModerationAction::Remove => "remove",
            ModerationAction::Restore => "restore",
        }
    }
}

/// Facet registry for reports.
pub const REPORT_FACETS: &[FacetSpec] = &[
    FacetSpec::new("status", FacetKind::Tag).filterable(),
    FacetSpec::new("reason", FacetKind::Tag).filterable(),
    FacetSpec::new("author", FacetKind::Text).searchable(),
    FacetSpec::new("excerpt", FacetKind::Text).searchable(),
    FacetSpec::new("reported_at", FacetKind::Timestamp).filterable(),
    FacetSpec::new("report_count", FacetKind::Count),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: Uuid,
    /// Author of the flagged comment
    pub author: String,
    /// The flagged comment text (or a leading excerpt of it)
    pub excerpt: String,
    pub reason: ReportReason,
    #[serde(default)]
    pub status: ReportStatus,
    pub reported_at: DateTime<Utc>,
    /// How many distinct users flagged this comment
    #[serde(default = "one")]
    pub report_count: u32,
}

fn one() -> u32 {
    1
}

impl Report {
    pub fn new(
        author: impl Into<String>,
        excerpt: impl Into<String>,
        reason: ReportReason,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            excerpt: excerpt.into(),
            reason,
            status: ReportStatus::Pending,
            reported_at: Utc::now(),
            report_count: 1,
        }
    }

    /// Strict transition for direct data-layer callers. Dispatcher paths
    /// use [`ReportStatus::transition`] and treat `None` as a no-op instead.
    pub fn try_apply(&mut self, action: ModerationAction) -> Result<()> {
        match self.status.transition(action) {
            Some(next) => {
                self.status = next;
                Ok(())
            }
            None => Err(KeepsakeError::InvalidTransition {
                status: self.status.as_str().to_string(),
                action: action.as_str().to_string(),
            }),
        }
    }
}

impl Record for Report {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.reported_at
    }

    fn label(&self) -> &str {
        &self.excerpt
    }

    fn facet(&self, name: &str) -> Option<FacetValue> {
        match name {
            "status" => Some(FacetValue::Tag(self.status.as_str().to_string())),
            "reason" => Some(FacetValue::Tag(self.reason.as_str().to_string())),
            "author" => Some(FacetValue::Text(self.author.clone())),
            "excerpt" => Some(FacetValue::Text(self.excerpt.clone())),
            "reported_at" => Some(FacetValue::Timestamp(self.reported_at)),
            "report_count" => Some(FacetValue::Count(self.report_count)),
            _ => None,
        }
    }

    fn facet_specs() -> &'static [FacetSpec] {
        REPORT_FACETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_report_starts_pending() {
        let report = Report::new("ada", "buy cheap widgets", ReportReason::Spam);
        assert_eq!(report.status, ReportStatus::Pending);
        assert_eq!(report.report_count, 1);
    }

    #[test]
    fn pending_can_be_dismissed_or_removed() {
        assert_eq!(
            ReportStatus::Pending.transition(ModerationAction::Dismiss),
            Some(ReportStatus::Dismissed)
        );
        assert_eq!(
            ReportStatus::Pending.transition(ModerationAction::Remove),
            Some(ReportStatus::Removed)
        );
    }

    #[test]
    fn resolved_states_only_accept_restore() {
        assert_eq!(
            ReportStatus::Dismissed.transition(ModerationAction::Remove),
            None
        );
        assert_eq!(
            ReportStatus::Removed.transition(ModerationAction::Dismiss),
            None
        );
        assert_eq!(
            ReportStatus::Dismissed.transition(ModerationAction::Restore),
            Some(ReportStatus::Pending)
        );
        assert_eq!(
            ReportStatus::Removed.transition(ModerationAction::Restore),
            Some(ReportStatus::Pending)
        );
    }

    #[test]
    fn restore_of_pending_is_invalid() {
        assert_eq!(
            ReportStatus::Pending.transition(ModerationAction::Restore),
            None
        );
    }

    #[test]
    fn try_apply_errors_on_invalid_transition() {
        let mut report = Report::new("ada", "x", ReportReason::Other);
        report.status = ReportStatus::Removed;

        let err = report.try_apply(ModerationAction::Dismiss).unwrap_err();
        assert!(matches!(
            err,
            KeepsakeError::InvalidTransition { .. }
        ));
        // Status is untouched on failure
        assert_eq!(report.status, ReportStatus::Removed);
    }

    #[test]
    fn try_apply_moves_valid_transition() {
        let mut report = Report::new("ada", "x", ReportReason::Other);
        report.try_apply(ModerationAction::Remove).unwrap();
        assert_eq!(report.status, ReportStatus::Removed);
        report.try_apply(ModerationAction::Restore).unwrap();
        assert_eq!(report.status, ReportStatus::Pending);
    }

    #[test]
    fn status_parse_roundtrip() {
        for status in [
            ReportStatus::Pending,
            ReportStatus::Dismissed,
            ReportStatus::Removed,
        ] {
            assert_eq!(ReportStatus::parse(status.as_str()).unwrap(), status);
        }
        assert!(ReportStatus::parse("resolved").is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        let report = Report::new("ada", "x", ReportReason::Harassment);
        let json = serde_json::to_string(&report).unwrap();
        assert!(json.contains("\"harassment\""));
        assert!(json.contains("\"pending\""));

        let loaded: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.id, report.id);
        assert_eq!(loaded.reason, ReportReason::Harassment);
    }

    #[test]
    fn legacy_report_without_status_defaults_to_pending() {
        let json = format!(
            r#"{{
            "id": "{}",
            "author": "ada",
            "excerpt": "x",
            "reason": "spam",
            "reported_at": "2023-01-01T00:00:00Z"
        }}"#,
            Uuid::new_v4()
        );
        let loaded: Report = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.status, ReportStatus::Pending);
        assert_eq!(loaded.report_count, 1);
    }

    #[test]
    fn facet_lookup_covers_registry() {
        let report = Report::new("ada", "excerpt text", ReportReason::Spam);
        for spec in REPORT_FACETS {
            assert!(report.facet(spec.name).is_some(), "missing {}", spec.name);
        }
        assert!(report.facet("unknown").is_none());
    }
}
