use crate::book::{AddressBook, LabelOutcome};
use crate::commands::{CmdMessage, CmdResult, MSG_NOT_FOUND};
use crate::error::Result;
use crate::store::Backend;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelAction {
    AddTag,
    RemoveTag,
    AssignGroup,
    RemoveGroup,
}

pub fn run<B: Backend>(
    book: &mut AddressBook<B>,
    action: LabelAction,
    id: u32,
    label: &str,
) -> Result<CmdResult> {
    let outcome = match action {
        LabelAction::AddTag => book.add_tag(id, label),
        LabelAction::RemoveTag => book.remove_tag(id, label),
        LabelAction::AssignGroup => book.assign_group(id, label),
        LabelAction::RemoveGroup => book.remove_from_group(id, label),
    };

    let message = match (outcome, action) {
        (LabelOutcome::NotFound, _) => CmdMessage::error(MSG_NOT_FOUND),
        (LabelOutcome::Applied, LabelAction::AddTag) => {
            CmdMessage::success(format!("Tag '{}' added to contact {}.", label, id))
        }
        (LabelOutcome::Applied, LabelAction::RemoveTag) => {
            CmdMessage::success(format!("Tag '{}' removed from contact {}.", label, id))
        }
        (LabelOutcome::Applied, LabelAction::AssignGroup) => {
            CmdMessage::success(format!("Contact {} assigned to group '{}'.", id, label))
        }
        (LabelOutcome::Applied, LabelAction::RemoveGroup) => {
            CmdMessage::success(format!("Contact {} removed from group '{}'.", id, label))
        }
        (LabelOutcome::Unchanged, LabelAction::AddTag) => {
            CmdMessage::warning("Tag already exists or is empty.")
        }
        (LabelOutcome::Unchanged, LabelAction::RemoveTag) => CmdMessage::warning("Tag not found."),
        (LabelOutcome::Unchanged, LabelAction::AssignGroup) => {
            CmdMessage::warning("Group already assigned or is empty.")
        }
        (LabelOutcome::Unchanged, LabelAction::RemoveGroup) => {
            CmdMessage::warning("Group not found.")
        }
    };

    Ok(CmdResult::default().with_message(message))
}
