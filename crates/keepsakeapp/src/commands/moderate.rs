//! Moderation actions over reports: dismiss, remove, restore.
//!
//! The pending badge is adjusted here, at the same point the status
//! changes: a report leaving `pending` decrements it, a restore back into
//! `pending` increments it. The badge never goes below zero.

use std::collections::HashSet;

use uuid::Uuid;

use crate::badge::Badge;
use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::report::{ModerationAction, Report, ReportStatus};
use crate::store::RecordStore;

pub fn run<S: RecordStore<Report>>(
    store: &mut S,
    badge: &mut Badge,
    action: ModerationAction,
    targets: &[Uuid],
) -> Result<CmdResult<Report>> {
    let mut result = CmdResult::new();
    let mut processed: HashSet<Uuid> = HashSet::new();

    for id in targets {
        if !processed.insert(*id) {
            continue;
        }

        let report = store.get(id)?;
        let old_status = report.status;

        let Some(new_status) = old_status.transition(action) else {
            // Invalid source state: guarded no-op, matching the disabled
            // button in the UI
            result.add_message(CmdMessage::info(format!(
                "Report by {} is {}; cannot {}",
                report.author,
                old_status.as_str(),
                action.as_str()
            )));
            continue;
        };

        let updated = store.mutate(id, |r| r.status = new_status)?;

        if old_status == ReportStatus::Pending && new_status != ReportStatus::Pending {
            badge.decrement();
        } else if old_status != ReportStatus::Pending && new_status == ReportStatus::Pending {
            badge.increment();
        }

        result.add_message(CmdMessage::success(format!(
            "Report by {} {}",
            updated.author,
            new_status.as_str()
        )));
        result.affected.push(updated);
    }

    Ok(result)
}
