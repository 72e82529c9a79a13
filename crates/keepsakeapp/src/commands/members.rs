//! Member access actions: suspend and reactivate.

use std::collections::HashSet;

use uuid::Uuid;

use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::member::{Member, MemberAction};
use crate::store::RecordStore;

pub fn run<S: RecordStore<Member>>(
    store: &mut S,
    action: MemberAction,
    targets: &[Uuid],
) -> Result<CmdResult<Member>> {
    let mut result = CmdResult::new();
    let mut processed: HashSet<Uuid> = HashSet::new();

    for id in targets {
        if !processed.insert(*id) {
            continue;
        }

        let member = store.get(id)?;
        let Some(new_status) = member.status.transition(action) else {
            result.add_message(CmdMessage::info(format!(
                "{} is {}; cannot {}",
                member.name,
                member.status.as_str(),
                action.as_str()
            )));
            continue;
        };

        let updated = store.mutate(id, |m| m.status = new_status)?;
        result.add_message(CmdMessage::success(format!(
            "{} is now {}",
            updated.name,
            new_status.as_str()
        )));
        result.affected.push(updated);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::member::{MemberRole, MemberStatus};
    use crate::store::MemoryStore;

    #[test]
    fn suspend_then_reactivate() {
        let member = Member::new("Grace", "grace@example.org", MemberRole::Curator);
        let id = member.id;
        let mut store = MemoryStore::seeded(vec![member]);

        run(&mut store, MemberAction::Suspend, &[id]).unwrap();
        assert_eq!(store.get(&id).unwrap().status, MemberStatus::Suspended);

        run(&mut store, MemberAction::Reactivate, &[id]).unwrap();
        assert_eq!(store.get(&id).unwrap().status, MemberStatus::Active);
    }

    #[test]
    fn suspend_of_suspended_is_noop() {
        let mut member = Member::new("Grace", "grace@example.org", MemberRole::Viewer);
        member.status = MemberStatus::Suspended;
        let id = member.id;
        let mut store = MemoryStore::seeded(vec![member]);

        let result = run(&mut store, MemberAction::Suspend, &[id]).unwrap();
        assert!(result.affected.is_empty());
        assert!(result.messages[0].content.contains("cannot suspend"));
    }

    #[test]
    fn reactivate_completes_invitation() {
        let mut member = Member::new("Joan", "joan@example.org", MemberRole::Contributor);
        member.status = MemberStatus::Invited;
        let id = member.id;
        let mut store = MemoryStore::seeded(vec![member]);

        run(&mut store, MemberAction::Reactivate, &[id]).unwrap();
        assert_eq!(store.get(&id).unwrap().status, MemberStatus::Active);
    }
}
