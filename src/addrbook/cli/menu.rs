//! The numbered-menu session.
//!
//! A session loads the book, then loops on the main menu until the user exits or input
//! runs out. Running out of input behaves like Exit without the save question.

use super::prompt::Prompter;
use super::render;
use addrbook::api::AddressBookApi;
use addrbook::commands::search::Query;
use addrbook::commands::{CmdMessage, CmdResult};
use addrbook::config::BookConfig;
use addrbook::error::{BookError, Result};
use addrbook::model::{ContactFields, ContactPatch};
use addrbook::store::Backend;
use log::debug;
use std::io::{BufRead, Write};

const MAIN_MENU: &str = "
===== Address Book =====
1) Add Contact
2) Edit Contact
3) Delete Contact
4) View Contacts
5) Search / Filter
6) Tags / Groups
7) Reports
8) Save to File
0) Exit
";

const VIEW_MENU: &str = "
--- View Contacts ---
1) List All Contacts
2) View Contact by ID
0) Back
";

const SEARCH_MENU: &str = "
--- Search / Filter ---
1) Search by Name
2) Search by Email
3) Search by Phone
4) Filter by Type
5) Filter by City
6) Filter by Tag
0) Back
";

const LABELS_MENU: &str = "
--- Tags / Groups ---
1) Add Tag
2) Remove Tag
3) Assign to Group
4) Remove from Group
0) Back
";

const REPORTS_MENU: &str = "
--- Reports ---
1) Contacts Missing Email or Phone
2) Contact Counts by Type
3) Group Summary
0) Back
";

const ARROW: &str = "> ";

pub struct Session<B: Backend, R, W> {
    api: AddressBookApi<B>,
    io: Prompter<R, W>,
    config: BookConfig,
}

impl<B: Backend, R: BufRead, W: Write> Session<B, R, W> {
    pub fn new(api: AddressBookApi<B>, io: Prompter<R, W>, config: BookConfig) -> Self {
        Self { api, io, config }
    }

    pub fn run(&mut self) -> Result<()> {
        let loaded = self.api.load()?;
        self.show(&loaded)?;

        loop {
            match self.step() {
                Ok(true) => continue,
                Ok(false) => return Ok(()),
                Err(BookError::InputClosed) => {
                    debug!("input closed, leaving without saving");
                    return self.io.say("\nGoodbye!\n");
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// One pass through the main menu. `false` means the user chose Exit.
    fn step(&mut self) -> Result<bool> {
        self.io.say(MAIN_MENU)?;
        let choice = self.io.read_int_in_range(ARROW, 0, 8)?;
        let acted = match choice {
            1 => self.add_contact()?,
            2 => self.edit_contact()?,
            3 => self.delete_contact()?,
            4 => self.view_menu()?,
            5 => self.search_menu()?,
            6 => self.labels_menu()?,
            7 => self.reports_menu()?,
            8 => {
                let saved = self.api.save()?;
                self.show(&saved)?;
                true
            }
            _ => {
                self.exit()?;
                return Ok(false);
            }
        };
        if acted {
            self.io.pause()?;
        }
        Ok(true)
    }

    fn exit(&mut self) -> Result<()> {
        if self.config.confirm_save_on_exit && self.io.confirm("Save before exiting?")? {
            let saved = self.api.save()?;
            self.show(&saved)?;
        }
        self.io.say("Goodbye!\n")
    }

    fn show(&mut self, result: &CmdResult) -> Result<()> {
        self.io.say(&render::messages(&result.messages))
    }

    fn field(&mut self, prompt: &str) -> Result<String> {
        let value = self.io.read_line(prompt)?;
        Ok(self.config.clip_field(&value))
    }

    /// Edit prompt showing the current value; blank keeps it.
    fn changed_field(&mut self, label: &str, current: &str) -> Result<Option<String>> {
        let value = self.io.read_line(&format!("{} [{}]: ", label, current))?;
        Ok(if value.is_empty() {
            None
        } else {
            Some(self.config.clip_field(&value))
        })
    }

    fn add_contact(&mut self) -> Result<bool> {
        self.io.say("\n=== Add New Contact ===\n")?;
        let kind = self.io.pick_type()?;
        let fields = ContactFields {
            kind,
            first_name: self.field("First Name: ")?,
            last_name: self.field("Last Name: ")?,
            email: self.field("Email: ")?,
            phone: self.field("Phone: ")?,
            address_line: self.field("Address Line: ")?,
            city: self.field("City: ")?,
            state: self.field("State: ")?,
            postal_code: self.field("Postal Code: ")?,
            notes: {
                let notes = self.io.read_line("Notes: ")?;
                self.config.clip_notes(&notes)
            },
        };
        let added = self.api.add_contact(fields)?;
        self.io.say("\n")?;
        self.show(&added)?;
        Ok(true)
    }

    fn edit_contact(&mut self) -> Result<bool> {
        let id = self.io.read_contact_id()?;
        let viewed = self.api.view_contact(id)?;
        let Some(current) = viewed.contacts.first().cloned() else {
            self.show(&viewed)?;
            return Ok(true);
        };

        self.io.say(&format!(
            "\n=== Edit Contact (ID: {}) ===\nLeave blank to keep current value.\n\nCurrent Information:\n{}",
            id, current
        ))?;

        let kind = self.io.pick_type_or_keep(current.kind)?;
        let first_name = self.changed_field("First Name", &current.first_name)?;
        let last_name = self.changed_field("Last Name", &current.last_name)?;
        let email = self.changed_field("Email", &current.email)?;
        let phone = self.changed_field("Phone", &current.phone)?;
        let address_line = self.changed_field("Address Line", &current.address_line)?;
        let city = self.changed_field("City", &current.city)?;
        let state = self.changed_field("State", &current.state)?;
        let postal_code = self.changed_field("Postal Code", &current.postal_code)?;
        let notes = self
            .io
            .read_line(&format!("Notes [{}]: ", current.notes))?;
        let notes = (!notes.is_empty()).then(|| self.config.clip_notes(&notes));

        let patch = ContactPatch {
            kind,
            first_name,
            last_name,
            email,
            phone,
            address_line,
            city,
            state,
            postal_code,
            notes,
        };
        let edited = self.api.edit_contact(id, patch)?;
        self.io.say("\n")?;
        self.show(&edited)?;
        Ok(true)
    }

    fn delete_contact(&mut self) -> Result<bool> {
        let id = self.io.read_contact_id()?;
        let viewed = self.api.view_contact(id)?;
        let Some(current) = viewed.contacts.first() else {
            self.show(&viewed)?;
            return Ok(true);
        };

        self.io.say(&render::contact_detail(current))?;
        if self.io.confirm("Delete this contact?")? {
            let deleted = self.api.delete_contact(id)?;
            self.show(&deleted)?;
        } else {
            self.show(&CmdResult::default().with_message(CmdMessage::info("Delete cancelled.")))?;
        }
        Ok(true)
    }

    fn view_menu(&mut self) -> Result<bool> {
        self.io.say(VIEW_MENU)?;
        match self.io.read_int_in_range(ARROW, 0, 2)? {
            1 => {
                let listed = self.api.list_contacts()?;
                self.io.say(&render::previews(&listed.previews))?;
                self.show(&listed)?;
            }
            2 => {
                let id = self.io.read_contact_id()?;
                let viewed = self.api.view_contact(id)?;
                for contact in &viewed.contacts {
                    self.io.say(&render::contact_detail(contact))?;
                }
                self.show(&viewed)?;
            }
            _ => return Ok(false),
        }
        Ok(true)
    }

    fn search_menu(&mut self) -> Result<bool> {
        self.io.say(SEARCH_MENU)?;
        let query = match self.io.read_int_in_range(ARROW, 0, 6)? {
            1 => Query::Name(self.io.read_line("Name contains: ")?),
            2 => Query::Email(self.io.read_line("Email contains: ")?),
            3 => Query::Phone(self.io.read_line("Phone contains: ")?),
            4 => Query::Type(self.io.pick_type()?.as_str().to_string()),
            5 => Query::City(self.io.read_line("City: ")?),
            6 => Query::Tag(self.io.read_non_empty("Tag: ")?),
            _ => return Ok(false),
        };
        let found = self.api.search(&query)?;
        let heading = found.heading.clone().unwrap_or_default();
        self.io
            .say(&render::search_results(&heading, &found.contacts))?;
        Ok(true)
    }

    fn labels_menu(&mut self) -> Result<bool> {
        self.io.say(LABELS_MENU)?;
        let choice = self.io.read_int_in_range(ARROW, 0, 4)?;
        if choice == 0 {
            return Ok(false);
        }
        let id = self.io.read_contact_id()?;
        let result = match choice {
            1 => {
                let tag = self.io.read_non_empty("Tag to add: ")?;
                self.api.add_tag(id, &tag)?
            }
            2 => {
                let tag = self.io.read_non_empty("Tag to remove: ")?;
                self.api.remove_tag(id, &tag)?
            }
            3 => {
                let group = self.io.read_non_empty("Group to assign: ")?;
                self.api.assign_group(id, &group)?
            }
            _ => {
                let group = self.io.read_non_empty("Group to remove: ")?;
                self.api.remove_from_group(id, &group)?
            }
        };
        self.show(&result)?;
        Ok(true)
    }

    fn reports_menu(&mut self) -> Result<bool> {
        self.io.say(REPORTS_MENU)?;
        let result = match self.io.read_int_in_range(ARROW, 0, 3)? {
            1 => self.api.missing_info_report()?,
            2 => self.api.type_counts_report()?,
            3 => self.api.groups_report()?,
            _ => return Ok(false),
        };
        if let Some(report) = &result.report {
            self.io.say(&render::report(report))?;
        }
        Ok(true)
    }

    #[cfg(test)]
    fn into_parts(self) -> (AddressBookApi<B>, W) {
        (self.api, self.io.into_output())
    }
}
