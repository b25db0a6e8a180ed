//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer. It is the single entry point
//! for address-book operations, whichever front end drives them (the menu REPL or the
//! one-shot subcommands).
//!
//! ## Role and Responsibilities
//!
//! The API facade:
//! - **Dispatches** to the appropriate command function
//! - **Owns the store** for the lifetime of a session
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! ## What the API Does NOT Do
//!
//! - **Business logic**: That belongs in `commands/*.rs` and `book.rs`
//! - **Presentation**: No stdout or stderr, no formatting
//!
//! ## Generic Over Backend
//!
//! `AddressBookApi<B: Backend>` is generic over the storage backend:
//! - Production: `AddressBookApi<FileBackend>`
//! - Testing: `AddressBookApi<MemBackend>`

use crate::book::AddressBook;
use crate::commands;
use crate::commands::labels::LabelAction;
use crate::commands::search::Query;
use crate::error::Result;
use crate::model::{ContactFields, ContactPatch};
use crate::store::Backend;

/// The main API facade for address-book operations.
pub struct AddressBookApi<B: Backend> {
    book: AddressBook<B>,
}

impl<B: Backend> AddressBookApi<B> {
    pub fn new(backend: B) -> Self {
        Self {
            book: AddressBook::new(backend),
        }
    }

    /// Read access for callers that need a record before acting on it (edit prompts).
    pub fn book(&self) -> &AddressBook<B> {
        &self.book
    }

    pub fn add_contact(&mut self, fields: ContactFields) -> Result<commands::CmdResult> {
        commands::contacts::add(&mut self.book, fields)
    }

    pub fn edit_contact(&mut self, id: u32, patch: ContactPatch) -> Result<commands::CmdResult> {
        commands::contacts::edit(&mut self.book, id, patch)
    }

    pub fn delete_contact(&mut self, id: u32) -> Result<commands::CmdResult> {
        commands::contacts::delete(&mut self.book, id)
    }

    pub fn view_contact(&self, id: u32) -> Result<commands::CmdResult> {
        commands::contacts::view(&self.book, id)
    }

    pub fn list_contacts(&self) -> Result<commands::CmdResult> {
        commands::contacts::list(&self.book)
    }

    pub fn search(&self, query: &Query) -> Result<commands::CmdResult> {
        commands::search::run(&self.book, query)
    }

    pub fn add_tag(&mut self, id: u32, tag: &str) -> Result<commands::CmdResult> {
        commands::labels::run(&mut self.book, LabelAction::AddTag, id, tag)
    }

    pub fn remove_tag(&mut self, id: u32, tag: &str) -> Result<commands::CmdResult> {
        commands::labels::run(&mut self.book, LabelAction::RemoveTag, id, tag)
    }

    pub fn assign_group(&mut self, id: u32, group: &str) -> Result<commands::CmdResult> {
        commands::labels::run(&mut self.book, LabelAction::AssignGroup, id, group)
    }

    pub fn remove_from_group(&mut self, id: u32, group: &str) -> Result<commands::CmdResult> {
        commands::labels::run(&mut self.book, LabelAction::RemoveGroup, id, group)
    }

    pub fn load(&mut self) -> Result<commands::CmdResult> {
        commands::persist::load(&mut self.book)
    }

    pub fn save(&mut self) -> Result<commands::CmdResult> {
        commands::persist::save(&mut self.book)
    }

    pub fn missing_info_report(&self) -> Result<commands::CmdResult> {
        commands::reports::missing_info(&self.book)
    }

    pub fn type_counts_report(&self) -> Result<commands::CmdResult> {
        commands::reports::counts_by_type(&self.book)
    }

    pub fn groups_report(&self) -> Result<commands::CmdResult> {
        commands::reports::groups(&self.book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Report;
    use crate::model::ContactType;
    use crate::store::memory::MemBackend;

    fn make_api() -> AddressBookApi<MemBackend> {
        AddressBookApi::new(MemBackend::new())
    }

    #[test]
    fn add_then_list() {
        let mut api = make_api();
        api.add_contact(ContactFields::new(ContactType::Person, "Ann", "Lee"))
            .unwrap();
        api.add_contact(ContactFields::new(ContactType::Business, "Acme", "Co"))
            .unwrap();

        let listed = api.list_contacts().unwrap();
        assert_eq!(listed.previews.len(), 2);
        assert_eq!(listed.previews[1].name, "Acme Co");
    }

    #[test]
    fn type_filter_then_delete() {
        let mut api = make_api();
        api.add_contact(ContactFields::new(ContactType::Person, "Ann", "Lee"))
            .unwrap();
        api.add_contact(ContactFields::new(ContactType::Business, "Acme", "Co"))
            .unwrap();

        let people = api.search(&Query::Type("Person".into())).unwrap();
        assert_eq!(people.contacts.len(), 1);
        assert_eq!(people.contacts[0].id(), 1);

        api.delete_contact(1).unwrap();
        let ids: Vec<u32> = api
            .list_contacts()
            .unwrap()
            .previews
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![2]);
    }

    #[test]
    fn labels_route_to_the_right_set() {
        let mut api = make_api();
        api.add_contact(ContactFields::new(ContactType::Person, "Ann", "Lee"))
            .unwrap();
        api.add_tag(1, "vip").unwrap();
        api.assign_group(1, "family").unwrap();

        let ann = api.book().view(1).unwrap();
        assert!(ann.has_tag("vip"));
        assert!(!ann.has_group("vip"));
        assert!(ann.has_group("family"));

        api.remove_tag(1, "vip").unwrap();
        api.remove_from_group(1, "family").unwrap();
        let ann = api.book().view(1).unwrap();
        assert!(ann.tags.is_empty());
        assert!(ann.groups.is_empty());
    }

    #[test]
    fn save_then_load_through_api() {
        let mut api = make_api();
        api.add_contact(ContactFields::new(ContactType::Vendor, "Bo", "Ng"))
            .unwrap();
        api.save().unwrap();

        let content = api.book().backend().content().unwrap().to_string();
        let mut fresh = AddressBookApi::new(MemBackend::with_content(content));
        let loaded = fresh.load().unwrap();
        assert_eq!(loaded.messages[0].content, "Loaded 1 contacts from <memory>");
        assert_eq!(fresh.book().view(1).unwrap().kind, ContactType::Vendor);
    }

    #[test]
    fn reports_are_wrapped() {
        let api = make_api();
        assert!(matches!(
            api.missing_info_report().unwrap().report,
            Some(Report::MissingInfo(_))
        ));
        assert!(matches!(
            api.type_counts_report().unwrap().report,
            Some(Report::TypeCounts(_))
        ));
        assert!(matches!(
            api.groups_report().unwrap().report,
            Some(Report::Groups(_))
        ));
    }
}
