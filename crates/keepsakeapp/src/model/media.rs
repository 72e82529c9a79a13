//! Gallery records for the media dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KeepsakeError, Result};
use crate::facets::{FacetKind, FacetSpec, FacetValue};
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Photo,
    Video,
    Audio,
    Document,
}

impl MediaKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaKind::Photo => "photo",
            MediaKind::Video => "video",
            MediaKind::Audio => "audio",
            MediaKind::Document => "document",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "photo" => Ok(MediaKind::Photo),
            "video" => Ok(MediaKind::Video),
            "audio" => Ok(MediaKind::Audio),
            "document" => Ok(MediaKind::Document),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown media kind '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaAction {
    Share,
    Unshare,
}

impl MediaAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaAction::Share => "share",
            MediaAction::Unshare => "unshare",
        }
    }
}

/// Facet registry for media items.
pub const MEDIA_FACETS: &[FacetSpec] = &[
    FacetSpec::new("kind", FacetKind::Tag).filterable(),
    FacetSpec::new("collection", FacetKind::Tag).filterable(),
    FacetSpec::new("shared", FacetKind::Flag).filterable(),
    FacetSpec::new("title", FacetKind::Text).searchable(),
    FacetSpec::new("uploaded_at", FacetKind::Timestamp).filterable(),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MediaItem {
    pub id: Uuid,
    pub title: String,
    pub kind: MediaKind,
    /// Collection the item belongs to (e.g., "Family Photos")
    pub collection: String,
    #[serde(default)]
    pub shared: bool,
    pub uploaded_at: DateTime<Utc>,
}

impl MediaItem {
    pub fn new(title: impl Into<String>, kind: MediaKind, collection: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            kind,
            collection: collection.into(),
            shared: false,
            uploaded_at: Utc::now(),
        }
    }

    /// Whether `action` is valid for the current shared flag.
    /// Sharing an already-shared item (and vice versa) is a no-op.
    pub fn transition(&self, action: MediaAction) -> Option<bool> {
        match (self.shared, action) {
            (false, MediaAction::Share) => Some(true),
            (true, MediaAction::Unshare) => Some(false),
            _ => None,
        }
    }

    /// Strict transition for direct data-layer callers.
    pub fn try_apply(&mut self, action: MediaAction) -> Result<()> {
        match self.transition(action) {
            Some(next) => {
                self.shared = next;
                Ok(())
            }
            None => Err(KeepsakeError::InvalidTransition {
                status: if self.shared { "shared" } else { "private" }.to_string(),
                action: action.as_str().to_string(),
            }),
        }
    }
}

impl Record for MediaItem {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.uploaded_at
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn facet(&self, name: &str) -> Option<FacetValue> {
        match name {
            "kind" => Some(FacetValue::Tag(self.kind.as_str().to_string())),
            "collection" => Some(FacetValue::Tag(self.collection.clone())),
            "shared" => Some(FacetValue::Flag(self.shared)),
            "title" => Some(FacetValue::Text(self.title.clone())),
            "uploaded_at" => Some(FacetValue::Timestamp(self.uploaded_at)),
            _ => None,
        }
    }

    fn facet_specs() -> &'static [FacetSpec] {
        MEDIA_FACETS
    }
}
