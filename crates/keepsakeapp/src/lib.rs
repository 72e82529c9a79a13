//! # Keepsake
//!
//! UI-agnostic core for moderating and curating a shared digital keepsake
//! archive: reported comments, memorial members, and the media vault.
//!
//! ## Architecture
//!
//! The crate is organized in layers, lowest first:
//!
//! - [`model`]: the record types ([`model::Report`], [`model::Member`],
//!   [`model::MediaItem`]), their status machines, and the [`model::Record`]
//!   trait that exposes each as a bag of named facets.
//! - [`facets`]: typed facet values, per-type facet registries, and the
//!   AND-conjunctive [`facets::FilterSet`] with substring search.
//! - [`store`]: the [`store::RecordStore`] trait and its in-memory backend.
//! - [`commands`]: one module per operation. Each takes a store, does its
//!   work, and returns a [`commands::CmdResult`] carrying affected records
//!   and user-facing messages. Commands hold no UI state.
//! - [`dashboard`]: the per-screen facade tying a store to filter state,
//!   a selection, the pending badge, and a notification sink.
//!
//! Supporting modules: [`selection`] and [`selector`] for row selection,
//! [`badge`] for the pending counter, [`notify`] for feedback delivery,
//! [`progress`] for host-driven loading/upload tickers, [`samples`] for
//! the embedded seed data, and [`config`] for client presentation defaults.
//!
//! ## Example
//!
//! ```
//! use keepsakeapp::dashboard::{Dashboard, Target};
//! use keepsakeapp::facets::FacetFilter;
//! use keepsakeapp::model::report::ModerationAction;
//! use keepsakeapp::notify::NullSink;
//! use keepsakeapp::samples::sample_reports;
//! use keepsakeapp::store::MemoryStore;
//!
//! # fn main() -> keepsakeapp::Result<()> {
//! let store = MemoryStore::seeded(sample_reports());
//! let mut dashboard = Dashboard::moderation(store, NullSink)?;
//!
//! dashboard.set_filter(FacetFilter::tag_eq("status", "pending"))?;
//! dashboard.select_all()?;
//! dashboard.moderate(ModerationAction::Dismiss, Target::Selected)?;
//!
//! assert_eq!(dashboard.badge().count(), 0);
//! # Ok(())
//! # }
//! ```

pub mod badge;
pub mod commands;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod facets;
pub mod model;
pub mod notify;
pub mod progress;
pub mod samples;
pub mod selection;
pub mod selector;
pub mod store;

pub use error::{KeepsakeError, Result};
