//! Account records for the member-management dashboard.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{KeepsakeError, Result};
use crate::facets::{FacetKind, FacetSpec, FacetValue};
use crate::model::Record;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Owner,
    Curator,
    Contributor,
    Viewer,
}

impl MemberRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Owner => "owner",
            MemberRole::Curator => "curator",
            MemberRole::Contributor => "contributor",
            MemberRole::Viewer => "viewer",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "owner" => Ok(MemberRole::Owner),
            "curator" => Ok(MemberRole::Curator),
            "contributor" => Ok(MemberRole::Contributor),
            "viewer" => Ok(MemberRole::Viewer),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown member role '{}'",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Invited,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Invited => "invited",
            MemberStatus::Suspended => "suspended",
        }
    }

    pub fn parse(input: &str) -> Result<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "invited" => Ok(MemberStatus::Invited),
            "suspended" => Ok(MemberStatus::Suspended),
            other => Err(KeepsakeError::InvalidFilter(format!(
                "unknown member status '{}'",
                other
            ))),
        }
    }

    /// Suspend is only valid for active members; reactivate brings back
    /// suspended members and completes invitations.
    pub fn transition(self, action: MemberAction) -> Option<MemberStatus> {
        match (self, action) {
            (MemberStatus::Active, MemberAction::Suspend) => Some(MemberStatus::Suspended),
            (MemberStatus::Suspended, MemberAction::Reactivate)
            | (MemberStatus::Invited, MemberAction::Reactivate) => Some(MemberStatus::Active),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberAction {
    Suspend,
    Reactivate,
}

impl MemberAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberAction::Suspend => "suspend",
            MemberAction::Reactivate => "reactivate",
        }
    }
}

/// Facet registry for members.
pub const MEMBER_FACETS: &[FacetSpec] = &[
    FacetSpec::new("status", FacetKind::Tag).filterable(),
    FacetSpec::new("role", FacetKind::Tag).filterable(),
    FacetSpec::new("name", FacetKind::Text).searchable(),
    FacetSpec::new("email", FacetKind::Text).searchable(),
    FacetSpec::new("joined_at", FacetKind::Timestamp).filterable(),
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: MemberRole,
    #[serde(default)]
    pub status: MemberStatus,
    pub joined_at: DateTime<Utc>,
}

impl Member {
    pub fn new(name: impl Into<String>, email: impl Into<String>, role: MemberRole) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            role,
            status: MemberStatus::Active,
            joined_at: Utc::now(),
        }
    }

    /// Strict transition for direct data-layer callers.
    pub fn try_apply(&mut self, action: MemberAction) -> Result<()> {
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

impl Record for Member {
    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.joined_at
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn facet(&self, name: &str) -> Option<FacetValue> {
        match name {
            "status" => Some(FacetValue::Tag(self.status.as_str().to_string())),
            "role" => Some(FacetValue::Tag(self.role.as_str().to_string())),
            "name" => Some(FacetValue::Text(self.name.clone())),
            "email" => Some(FacetValue::Text(self.email.clone())),
            "joined_at" => Some(FacetValue::Timestamp(self.joined_at)),
            _ => None,
        }
    }

    fn facet_specs() -> &'static [FacetSpec] {
        MEMBER_FACETS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspend_only_from_active() {
        assert_eq!(
            MemberStatus::Active.transition(MemberAction::Suspend),
            Some(MemberStatus::Suspended)
        );
        assert_eq!(
            MemberStatus::Suspended.transition(MemberAction::Suspend),
            None
        );
        assert_eq!(MemberStatus::Invited.transition(MemberAction::Suspend), None);
    }

    #[test]
    fn reactivate_from_suspended_or_invited() {
        assert_eq!(
            MemberStatus::Suspended.transition(MemberAction::Reactivate),
            Some(MemberStatus::Active)
        );
        assert_eq!(
            MemberStatus::Invited.transition(MemberAction::Reactivate),
            Some(MemberStatus::Active)
        );
        assert_eq!(
            MemberStatus::Active.transition(MemberAction::Reactivate),
            None
        );
    }

    #[test]
    fn try_apply_guards_direct_calls() {
        let mut member = Member::new("Grace", "grace@example.org", MemberRole::Curator);
        member.try_apply(MemberAction::Suspend).unwrap();
        assert_eq!(member.status, MemberStatus::Suspended);

        let err = member.try_apply(MemberAction::Suspend).unwrap_err();
        assert!(matches!(err, KeepsakeError::InvalidTransition { .. }));
    }

    #[test]
    fn searchable_facets_cover_name_and_email() {
        let member = Member::new("Grace", "grace@example.org", MemberRole::Viewer);
        assert_eq!(
            member.facet("email").unwrap().as_text(),
            Some("grace@example.org")
        );
        assert_eq!(member.facet("role").unwrap().as_tag(), Some("viewer"));
    }
}
