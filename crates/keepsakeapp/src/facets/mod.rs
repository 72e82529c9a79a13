//! # Facet System
//!
//! A facet is one filterable field of a record (status, role, author,
//! timestamp). Instead of ad-hoc filter code per dashboard, the facet system
//! provides:
//!
//! - **Value types**: what kinds of values facets can hold
//! - **Specifications**: per-record-type schema (filterable, searchable)
//! - **Filtering**: [`FilterSet`] — AND-combined conditions plus free-text
//!   search, evaluated against any [`crate::model::Record`]
//! - **Date ranges**: the shared "today / past week / past month" presets
//!
//! ## Usage
//!
//! ```ignore
//! let filters = FilterSet::new()
//!     .with(FacetFilter::tag_eq("status", "pending"))
//!     .with_search("lovelace");
//! let view: Vec<&Report> = reports.iter().filter(|r| filters.matches(*r)).collect();
//! ```

mod filter;
mod range;
mod spec;
mod value;

pub use filter::{FacetFilter, FilterOp, FilterSet};
pub use range::DateRange;
pub use spec::{filterable_facets, get_spec, FacetKind, FacetSpec};
pub use value::FacetValue;
