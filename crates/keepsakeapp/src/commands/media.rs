//! Gallery sharing actions: share and unshare.

use std::collections::HashSet;

use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::media::{MediaAction, MediaItem};
use crate::store::RecordStore;

pub fn run<S: RecordStore<MediaItem>>(
    store: &mut S,
    action: MediaAction,
    targets: &[Uuid],
) -> Result<CmdResult<MediaItem>> {
    let mut result = CmdResult::new();
    let mut processed: HashSet<Uuid> = HashSet::new();

    for id in targets {
        if !processed.insert(*id) {
            continue;
        }

        let item = store.get(id)?;
        let Some(shared) = item.transition(action) else {
            result.add_message(CmdMessage::info(format!(
                "'{}' is already {}",
                item.title,
                if item.shared { "shared" } else { "private" }
            )));
            continue;
        };

        let updated = store.mutate(id, |m| m.shared = shared)?;
        result.add_message(CmdMessage::success(format!(
            "'{}' is now {}",
            updated.title,
            if shared { "shared" } else { "private" }
        )));
        result.affected.push(updated);
    }

    Ok(result)
}
