//! Terminal rendering.
//!
//! Plain column layout, no templating: each list view is a fixed set of
//! columns with one flexible column truncated to fit [`LINE_WIDTH`].
//! Relative timestamps come from `timeago`; widths are measured with
//! `unicode-width` so multi-byte labels line up.

use chrono::{DateTime, Utc};
use console::style;
use keepsakeapp::badge::Badge;
use keepsakeapp::commands::{CmdMessage, MessageLevel};
use keepsakeapp::model::{MediaItem, Member, Report};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const LINE_WIDTH: usize = 100;

const COL_INDEX: usize = 4;
const COL_TAG: usize = 16;
const COL_TIME: usize = 14;

/// Truncate to `width` display columns, appending an ellipsis when cut.
fn truncate(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

fn pad(text: &str, width: usize) -> String {
    let gap = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(gap))
}

pub fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let formatter = timeago::Formatter::new();
    let now = Utc::now();
    if timestamp > now {
        return "now".to_string();
    }
    match (now - timestamp).to_std() {
        Ok(elapsed) => formatter.convert(elapsed),
        Err(_) => "now".to_string(),
    }
}

fn row(index: usize, tag: &str, label: &str, timestamp: DateTime<Utc>) -> String {
    let idx = pad(&format!("{}.", index), COL_INDEX);
    let tag = pad(&truncate(tag, COL_TAG - 1), COL_TAG);
    let time = format_time_ago(timestamp);
    let label_width = LINE_WIDTH.saturating_sub(COL_INDEX + COL_TAG + COL_TIME);
    let label = pad(&truncate(label, label_width), label_width);
    format!("{}{}{}{:>width$}", idx, tag, label, time, width = COL_TIME)
}

pub fn render_reports(reports: &[Report], badge: Badge) -> String {
    if reports.is_empty() {
        return "No reports match.".to_string();
    }
    let mut lines = vec![format!(
        "{} ({} pending)",
        style("Reports").bold(),
        badge.count()
    )];
    for (i, report) in reports.iter().enumerate() {
        let tag = format!("{}/{}", report.status.as_str(), report.reason.as_str());
        let label = format!("{}: {}", report.author, report.excerpt);
        lines.push(row(i + 1, &tag, &label, report.reported_at));
    }
    lines.join("\n")
}

pub fn render_members(members: &[Member]) -> String {
    if members.is_empty() {
        return "No members match.".to_string();
    }
    let mut lines = vec![style("Members").bold().to_string()];
    for (i, member) in members.iter().enumerate() {
        let tag = format!("{}/{}", member.status.as_str(), member.role.as_str());
        let label = format!("{} <{}>", member.name, member.email);
        lines.push(row(i + 1, &tag, &label, member.joined_at));
    }
    lines.join("\n")
}

pub fn render_media(items: &[MediaItem]) -> String {
    if items.is_empty() {
        return "No media items match.".to_string();
    }
    let mut lines = vec![style("Media").bold().to_string()];
    for (i, item) in items.iter().enumerate() {
        let shared = if item.shared { "shared" } else { "private" };
        let tag = format!("{}/{}", item.kind.as_str(), shared);
        let label = format!("{} ({})", item.title, item.collection);
        lines.push(row(i + 1, &tag, &label, item.uploaded_at));
    }
    lines.join("\n")
}

/// One line per message, colored by level.
pub fn render_messages(messages: &[CmdMessage]) -> String {
    messages
        .iter()
        .map(|m| match m.level {
            MessageLevel::Info => format!("{}", style(&m.content).dim()),
            MessageLevel::Success => format!("{}", style(&m.content).green()),
            MessageLevel::Warning => format!("{}", style(&m.content).yellow()),
            MessageLevel::Error => format!("{}", style(&m.content).red()),
        })
        .collect::<Vec<_>>()
        .join("\n")
}
