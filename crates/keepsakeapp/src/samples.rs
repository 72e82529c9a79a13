//! Illustrative sample data.
//!
//! Every dashboard seeds from this embedded JSON, parsed once. Ids are
//! fixed so that docs and black-box tests can name rows stably.

use once_cell::sync::Lazy;

use crate::model::{MediaItem, Member, Report};

const REPORTS_JSON: &str = r#"[
  {
    "id": "6e1e6d57-3a6a-4aef-9a1d-10b1c1e5f001",
    "author": "sunnydale_bot",
    "excerpt": "Incredible deals on memorial frames, click here!!!",
    "reason": "spam",
    "status": "pending",
    "reported_at": "2024-03-11T09:15:00Z",
    "report_count": 4
  },
  {
    "id": "6e1e6d57-3a6a-4aef-9a1d-10b1c1e5f002",
    "author": "mel_torres",
    "excerpt": "You never deserved to inherit any of this.",
    "reason": "harassment",
    "status": "pending",
    "reported_at": "2024-03-12T18:40:00Z",
    "report_count": 2
  },
  {
    "id": "6e1e6d57-3a6a-4aef-9a1d-10b1c1e5f003",
    "author": "gran_archivist",
    "excerpt": "This photo was actually taken in 1952, not 1954.",
    "reason": "misinformation",
    "status": "dismissed",
    "reported_at": "2024-03-08T12:05:00Z",
    "report_count": 1
  },
  {
    "id": "6e1e6d57-3a6a-4aef-9a1d-10b1c1e5f004",
    "author": "anon_visitor",
    "excerpt": "Selling vintage stamps, message me for prices.",
    "reason": "spam",
    "status": "removed",
    "reported_at": "2024-03-05T07:22:00Z",
    "report_count": 6
  },
  {
    "id": "6e1e6d57-3a6a-4aef-9a1d-10b1c1e5f005",
    "author": "quiet_cousin",
    "excerpt": "I don't think this story is appropriate to publish.",
    "reason": "other",
    "status": "pending",
    "reported_at": "2024-03-13T21:00:00Z",
    "report_count": 1
  }
]"#;

const MEMBERS_JSON: &str = r#"[
  {
    "id": "b7a2f1c0-4c2d-4f8e-8a11-20c2d2e6a001",
    "name": "Elena Vasquez",
    "email": "elena@example.org",
    "role": "owner",
    "status": "active",
    "joined_at": "2023-06-01T10:00:00Z"
  },
  {
    "id": "b7a2f1c0-4c2d-4f8e-8a11-20c2d2e6a002",
    "name": "Marcus Webb",
    "email": "marcus@example.org",
    "role": "curator",
    "status": "active",
    "joined_at": "2023-08-14T15:30:00Z"
  },
  {
    "id": "b7a2f1c0-4c2d-4f8e-8a11-20c2d2e6a003",
    "name": "Priya Natarajan",
    "email": "priya@example.org",
    "role": "contributor",
    "status": "invited",
    "joined_at": "2024-02-20T09:45:00Z"
  },
  {
    "id": "b7a2f1c0-4c2d-4f8e-8a11-20c2d2e6a004",
    "name": "Tom Okafor",
    "email": "tom@example.org",
    "role": "viewer",
    "status": "suspended",
    "joined_at": "2023-11-02T11:20:00Z"
  }
]"#;

const MEDIA_JSON: &str = r#"[
  {
    "id": "c9d3e2b1-5d3e-4a9f-9b22-30d3e3f7b001",
    "title": "Wedding Day 1961",
    "kind": "photo",
    "collection": "Family Photos",
    "shared": true,
    "uploaded_at": "2024-01-15T14:00:00Z"
  },
  {
    "id": "c9d3e2b1-5d3e-4a9f-9b22-30d3e3f7b002",
    "title": "Grandpa's War Letters",
    "kind": "document",
    "collection": "Letters",
    "shared": false,
    "uploaded_at": "2024-02-03T16:30:00Z"
  },
  {
    "id": "c9d3e2b1-5d3e-4a9f-9b22-30d3e3f7b003",
    "title": "75th Birthday Speech",
    "kind": "video",
    "collection": "Celebrations",
    "shared": false,
    "uploaded_at": "2024-02-28T19:10:00Z"
  },
  {
    "id": "c9d3e2b1-5d3e-4a9f-9b22-30d3e3f7b004",
    "title": "Kitchen Stories Interview",
    "kind": "audio",
    "collection": "Oral History",
    "shared": true,
    "uploaded_at": "2024-03-10T08:50:00Z"
  }
]"#;

static REPORTS: Lazy<Vec<Report>> = Lazy::new(|| {
    serde_json::from_str(REPORTS_JSON).expect("embedded report samples are valid JSON")
});

static MEMBERS: Lazy<Vec<Member>> = Lazy::new(|| {
    serde_json::from_str(MEMBERS_JSON).expect("embedded member samples are valid JSON")
});

static MEDIA: Lazy<Vec<MediaItem>> = Lazy::new(|| {
    serde_json::from_str(MEDIA_JSON).expect("embedded media samples are valid JSON")
});

pub fn sample_reports() -> Vec<Report> {
    REPORTS.clone()
}

pub fn sample_members() -> Vec<Member> {
    MEMBERS.clone()
}

pub fn sample_media() -> Vec<MediaItem> {
    MEDIA.clone()
}
