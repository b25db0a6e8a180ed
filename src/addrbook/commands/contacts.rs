use crate::book::AddressBook;
use crate::commands::{CmdMessage, CmdResult, MSG_NOT_FOUND};
use crate::error::Result;
use crate::model::{ContactFields, ContactPatch};
use crate::store::Backend;

pub fn add<B: Backend>(book: &mut AddressBook<B>, fields: ContactFields) -> Result<CmdResult> {
    let id = book.add(fields);
    let mut result = CmdResult::default().with_message(CmdMessage::success(format!(
        "Contact added successfully with ID: {}",
        id
    )));
    result.added_id = Some(id);
    Ok(result)
}

pub fn edit<B: Backend>(
    book: &mut AddressBook<B>,
    id: u32,
    patch: ContactPatch,
) -> Result<CmdResult> {
    let message = if book.edit(id, patch) {
        CmdMessage::success("Contact updated successfully!")
    } else {
        CmdMessage::error(MSG_NOT_FOUND)
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn delete<B: Backend>(book: &mut AddressBook<B>, id: u32) -> Result<CmdResult> {
    let message = if book.delete(id) {
        CmdMessage::success("Contact deleted successfully.")
    } else {
        CmdMessage::error(MSG_NOT_FOUND)
    };
    Ok(CmdResult::default().with_message(message))
}

pub fn view<B: Backend>(book: &AddressBook<B>, id: u32) -> Result<CmdResult> {
    Ok(match book.view(id) {
        Some(contact) => CmdResult::default().with_contacts(vec![contact]),
        None => CmdResult::default().with_message(CmdMessage::error(MSG_NOT_FOUND)),
    })
}

pub fn list<B: Backend>(book: &AddressBook<B>) -> Result<CmdResult> {
    let previews = book.previews();
    let mut result = CmdResult::default();
    if previews.is_empty() {
        result.add_message(CmdMessage::info("No contacts in address book."));
    }
    Ok(result.with_previews(previews))
}
