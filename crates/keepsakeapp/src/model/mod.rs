//! # Domain Model
//!
//! The record types behind each dashboard, plus the [`Record`] trait that
//! lets the generic machinery (filtering, selection, commands) work across
//! all of them.
//!
//! Three record types cover the shapes the dashboards instantiate:
//!
//! - [`Report`]: a flagged comment awaiting moderation
//! - [`Member`]: an account with a role and an access status
//! - [`MediaItem`]: a gallery entry that can be shared
//!
//! Each type declares its facets in a const registry (see
//! [`crate::facets::FacetSpec`]) and exposes values through
//! [`Record::facet`], so filters never need per-type code.
//!
//! ## Status machines
//!
//! Statuses are small closed enums with explicit transition tables
//! (`ReportStatus::transition`, `MemberStatus::transition`). A transition
//! returns `None` when the action is not valid from the current state;
//! dispatcher code treats that as a no-op, while the strict `try_apply`
//! entry points surface it as [`crate::error::KeepsakeError::InvalidTransition`]
//! so direct callers cannot corrupt a record silently.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::facets::{FacetSpec, FacetValue};

pub mod media;
pub mod member;
pub mod report;

pub use media::{MediaAction, MediaItem, MediaKind};
pub use member::{Member, MemberAction, MemberRole, MemberStatus};
pub use report::{ModerationAction, Report, ReportReason, ReportStatus};

/// A dashboard record: anything with a stable id, a primary timestamp, and
/// facets the filter system can inspect.
pub trait Record: Clone {
    /// Stable unique identifier.
    fn id(&self) -> Uuid;

    /// The record's primary timestamp (used for default newest-first sort).
    fn created_at(&self) -> DateTime<Utc>;

    /// Short human-readable label (used for alphabetical sort and display).
    fn label(&self) -> &str;

    /// Get a facet value by name. Returns `None` for unknown facets.
    fn facet(&self, name: &str) -> Option<FacetValue>;

    /// The facet registry for this record type.
    fn facet_specs() -> &'static [FacetSpec];
}
