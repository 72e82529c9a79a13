//! Permanent record removal.
//!
//! Deletion returns the removed ids so the caller can prune the selection
//! set (the selection must never reference a record absent from the store).

use std::collections::HashSet;

use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Record;
use crate::store::RecordStore;

pub fn run<R: Record, S: RecordStore<R>>(
    store: &mut S,
    targets: &[Uuid],
) -> Result<CmdResult<R>> {
    let mut result = CmdResult::new();
    let mut processed: HashSet<Uuid> = HashSet::new();

    for id in targets {
        if !processed.insert(*id) {
            continue;
        }

        let record = store.get(id)?;
        store.delete(id)?;
        result.add_message(CmdMessage::success(format!(
            "Deleted '{}'",
            record.label()
        )));
        result.affected.push(record);
    }

    Ok(result)
}
