//! Facet specifications.
//!
//! Each record type declares its facets: what kind of value they hold,
//! whether they may appear in filters, and whether text search scans them.
//! The registries are the single source of truth the CLI uses to validate
//! filter flags.

/// The kind of value a facet holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FacetKind {
    /// Free text (searchable fields)
    Text,

    /// Closed enum carried as a canonical string (e.g., `status`, `role`)
    Tag,

    /// Simple boolean (e.g., `shared`)
    Flag,

    /// Point in time (e.g., `reported_at`)
    Timestamp,

    /// Numeric metadata (e.g., `report_count`)
    Count,
}

/// Specification for a single facet of a record type.
#[derive(Debug, Clone)]
pub struct FacetSpec {
    /// The facet name used in the API (e.g., "status", "author")
    pub name: &'static str,

    /// The kind of value this facet holds
    pub kind: FacetKind,

    /// Whether this facet can be used in equality filters
    pub filterable: bool,

    /// Whether text search scans this facet
    pub searchable: bool,
}

impl FacetSpec {
    /// Create a new facet spec with default flags (all false).
    pub const fn new(name: &'static str, kind: FacetKind) -> Self {
        Self {
            name,
            kind,
            filterable: false,
            searchable: false,
        }
    }

    /// Set the filterable flag.
    pub const fn filterable(mut self) -> Self {
        self.filterable = true;
        self
    }

    /// Set the searchable flag.
    pub const fn searchable(mut self) -> Self {
        self.searchable = true;
        self
    }
}

/// Look up a facet spec by name.
pub fn get_spec<'a>(specs: &'a [FacetSpec], name: &str) -> Option<&'a FacetSpec> {
    specs.iter().find(|s| s.name == name)
}

/// Names of the facets that equality filters accept.
pub fn filterable_facets(specs: &[FacetSpec]) -> Vec<&'static str> {
    specs
        .iter()
        .filter(|s| s.filterable)
        .map(|s| s.name)
        .collect()
}
