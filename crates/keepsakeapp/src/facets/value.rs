//! Facet value types.
//!
//! A facet is one filterable field of a record. This module defines the
//! runtime representation of facet values, shared by getters and filters.

use chrono::{DateTime, Utc};

/// Runtime representation of a facet value.
#[derive(Debug, Clone, PartialEq)]
pub enum FacetValue {
    /// Free text (e.g., a comment excerpt, a member name)
    Text(String),

    /// A value from a closed enum, carried as its canonical string
    /// (e.g., `status` = "pending" | "dismissed" | "removed")
    Tag(String),

    /// Simple boolean (e.g., `shared`)
    Flag(bool),

    /// Point in time (e.g., `reported_at`, `joined_at`)
    Timestamp(DateTime<Utc>),

    /// Numeric metadata (e.g., `report_count`)
    Count(u32),
}

impl FacetValue {
    /// Get the text if this is a Text facet.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FacetValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Get the canonical string if this is a Tag facet.
    pub fn as_tag(&self) -> Option<&str> {
        match self {
            FacetValue::Tag(s) => Some(s),
            _ => None,
        }
    }

    /// Get the boolean if this is a Flag facet.
    pub fn as_flag(&self) -> Option<bool> {
        match self {
            FacetValue::Flag(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the instant if this is a Timestamp facet.
    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FacetValue::Timestamp(t) => Some(*t),
            _ => None,
        }
    }

    /// Get the number if this is a Count facet.
    pub fn as_count(&self) -> Option<u32> {
        match self {
            FacetValue::Count(n) => Some(*n),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_text_extracts_string() {
        assert_eq!(FacetValue::Text("hello".into()).as_text(), Some("hello"));
        assert_eq!(FacetValue::Flag(true).as_text(), None);
    }

    #[test]
    fn as_tag_extracts_string() {
        assert_eq!(FacetValue::Tag("pending".into()).as_tag(), Some("pending"));
        assert_eq!(FacetValue::Text("pending".into()).as_tag(), None);
    }

    #[test]
    fn as_flag_extracts_bool() {
        assert_eq!(FacetValue::Flag(true).as_flag(), Some(true));
        assert_eq!(FacetValue::Count(3).as_flag(), None);
    }

    #[test]
    fn as_timestamp_extracts_instant() {
        let now = Utc::now();
        assert_eq!(FacetValue::Timestamp(now).as_timestamp(), Some(now));
        assert_eq!(FacetValue::Flag(false).as_timestamp(), None);
    }

    #[test]
    fn as_count_extracts_number() {
        assert_eq!(FacetValue::Count(7).as_count(), Some(7));
        assert_eq!(FacetValue::Tag("7".into()).as_count(), None);
    }
}
