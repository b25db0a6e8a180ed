//! # The Address Book Store
//!
//! [`AddressBook`] owns every [`Contact`] of a session in one ordered `Vec`. Insertion
//! order is the display order; there is no index, lookups are linear scans.
//!
//! ## Ids
//!
//! The store carries its own id counter (`next_id`, starting at 1). Each `add` takes the
//! current value and bumps it. Loading persisted records keeps their ids and moves the
//! counter past the highest one seen, so ids handed out afterwards never collide with
//! imported ones. Ids of deleted contacts are not reused.
//!
//! ## Ownership
//!
//! Nothing outside the store holds a reference into the collection. Search, filter and
//! `view` hand back clones.
//!
//! ## Outcomes
//!
//! A missing id is an ordinary result (`false`, `None`, [`LabelOutcome::NotFound`]), not
//! an error. Only backend I/O produces `Err`.

use crate::error::Result;
use crate::model::{Contact, ContactFields, ContactPatch, ContactType};
use crate::store::codec::{decode_line, LineError};
use crate::store::Backend;
use log::{debug, info, warn};
use std::collections::{BTreeMap, HashSet};

/// One-line summary of a contact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preview {
    pub id: u32,
    pub name: String,
    pub kind: ContactType,
}

impl From<&Contact> for Preview {
    fn from(contact: &Contact) -> Self {
        Self {
            id: contact.id(),
            name: contact.full_name(),
            kind: contact.kind,
        }
    }
}

/// Result of a tag or group operation on a single contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelOutcome {
    /// The label set changed.
    Applied,
    /// The contact exists but nothing changed (empty/duplicate label on add, absent label
    /// on remove).
    Unchanged,
    NotFound,
}

impl LabelOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, LabelOutcome::Applied)
    }
}

/// A persisted line that was left out of a load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedLine {
    /// 1-based line number in the file.
    pub line_no: usize,
    pub reason: SkipReason,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SkipReason {
    Malformed(LineError),
    DuplicateId(u32),
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SkipReason::Malformed(e) => write!(f, "{}", e),
            SkipReason::DuplicateId(id) => write!(f, "duplicate id {}", id),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// False when nothing had been persisted yet; the store was left untouched.
    pub found: bool,
    pub loaded: usize,
    pub skipped: Vec<SkippedLine>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MissingInfoReport {
    /// Contacts lacking an email, a phone, or both.
    pub contacts: Vec<Preview>,
}

impl MissingInfoReport {
    pub fn total(&self) -> usize {
        self.contacts.len()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypeCounts {
    /// Types present in the book, ordered alphabetically by token.
    pub counts: Vec<(ContactType, usize)>,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupSummary {
    NoGroups,
    /// Group name and member count, alphabetical by name.
    Groups(Vec<(String, usize)>),
}

pub struct AddressBook<B: Backend> {
    contacts: Vec<Contact>,
    next_id: u32,
    backend: B,
}

impl<B: Backend> AddressBook<B> {
    pub fn new(backend: B) -> Self {
        Self::with_next_id(backend, 1)
    }

    /// Starts the id counter at `next_id` instead of 1.
    pub fn with_next_id(backend: B, next_id: u32) -> Self {
        Self {
            contacts: Vec::new(),
            next_id: next_id.max(1),
            backend,
        }
    }

    pub fn next_id(&self) -> u32 {
        self.next_id
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn location(&self) -> String {
        self.backend.location()
    }

    fn find(&self, id: u32) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id() == id)
    }

    fn find_mut(&mut self, id: u32) -> Option<&mut Contact> {
        self.contacts.iter_mut().find(|c| c.id() == id)
    }

    // --- CRUD ---

    /// Appends a new contact and returns its id.
    pub fn add(&mut self, fields: ContactFields) -> u32 {
        let id = self.next_id;
        // saturates at u32::MAX; persisted ids stop one short of it
        self.next_id = self.next_id.saturating_add(1);
        self.contacts.push(Contact::with_id(id, fields));
        debug!("added contact {}", id);
        id
    }

    pub fn edit(&mut self, id: u32, patch: ContactPatch) -> bool {
        match self.find_mut(id) {
            Some(contact) => {
                contact.apply(patch);
                debug!("edited contact {}", id);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self, id: u32) -> bool {
        match self.contacts.iter().position(|c| c.id() == id) {
            Some(pos) => {
                self.contacts.remove(pos);
                debug!("deleted contact {}", id);
                true
            }
            None => false,
        }
    }

    pub fn view(&self, id: u32) -> Option<Contact> {
        self.find(id).cloned()
    }

    pub fn previews(&self) -> Vec<Preview> {
        self.contacts.iter().map(Preview::from).collect()
    }

    // --- Search / Filter ---

    fn collect<F: Fn(&Contact) -> bool>(&self, pred: F) -> Vec<Contact> {
        self.contacts.iter().filter(|c| pred(c)).cloned().collect()
    }

    /// Matches first name, last name or full name, ignoring case.
    pub fn search_by_name(&self, query: &str) -> Vec<Contact> {
        self.collect(|c| {
            contains_ignore_case(&c.first_name, query)
                || contains_ignore_case(&c.last_name, query)
                || contains_ignore_case(&c.full_name(), query)
        })
    }

    pub fn search_by_email(&self, query: &str) -> Vec<Contact> {
        self.collect(|c| contains_ignore_case(&c.email, query))
    }

    pub fn search_by_phone(&self, query: &str) -> Vec<Contact> {
        self.collect(|c| contains_ignore_case(&c.phone, query))
    }

    /// Exact match on the canonical type token (`"Person"`, not `"person"`).
    pub fn filter_by_type(&self, token: &str) -> Vec<Contact> {
        self.collect(|c| c.kind.as_str() == token)
    }

    pub fn filter_by_city(&self, query: &str) -> Vec<Contact> {
        self.collect(|c| contains_ignore_case(&c.city, query))
    }

    pub fn filter_by_tag(&self, tag: &str) -> Vec<Contact> {
        self.collect(|c| c.has_tag(tag))
    }

    // --- Tags / Groups ---

    fn change_labels<F>(&mut self, id: u32, op: F) -> LabelOutcome
    where
        F: FnOnce(&mut Contact) -> bool,
    {
        match self.find_mut(id) {
            Some(contact) => {
                if op(contact) {
                    LabelOutcome::Applied
                } else {
                    LabelOutcome::Unchanged
                }
            }
            None => LabelOutcome::NotFound,
        }
    }

    pub fn add_tag(&mut self, id: u32, tag: &str) -> LabelOutcome {
        self.change_labels(id, |c| c.add_tag(tag))
    }

    pub fn remove_tag(&mut self, id: u32, tag: &str) -> LabelOutcome {
        self.change_labels(id, |c| c.remove_tag(tag))
    }

    pub fn assign_group(&mut self, id: u32, group: &str) -> LabelOutcome {
        self.change_labels(id, |c| c.add_group(group))
    }

    pub fn remove_from_group(&mut self, id: u32, group: &str) -> LabelOutcome {
        self.change_labels(id, |c| c.remove_group(group))
    }

    // --- Persistence ---

    /// Replaces the collection with the persisted records.
    ///
    /// Bad lines are skipped and listed in the report; they never abort the load. When the
    /// backend has nothing persisted yet, the collection is left as it is.
    pub fn load(&mut self) -> Result<LoadReport> {
        let content = match self.backend.read()? {
            Some(content) => content,
            None => {
                info!("no persisted data at {}", self.backend.location());
                return Ok(LoadReport::default());
            }
        };

        let mut contacts = Vec::new();
        let mut seen = HashSet::new();
        let mut skipped = Vec::new();

        for (idx, raw) in content.lines().enumerate() {
            let line_no = idx + 1;
            let line = raw.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }

            let reason = match decode_line(line) {
                Ok(contact) if seen.insert(contact.id()) => {
                    contacts.push(contact);
                    continue;
                }
                Ok(contact) => SkipReason::DuplicateId(contact.id()),
                Err(e) => SkipReason::Malformed(e),
            };
            warn!("skipping line {}: {}", line_no, reason);
            skipped.push(SkippedLine { line_no, reason });
        }

        if let Some(max_id) = contacts.iter().map(Contact::id).max() {
            self.next_id = self.next_id.max(max_id.saturating_add(1));
        }
        self.contacts = contacts;
        info!(
            "loaded {} contacts from {} ({} skipped)",
            self.contacts.len(),
            self.backend.location(),
            skipped.len()
        );

        Ok(LoadReport {
            found: true,
            loaded: self.contacts.len(),
            skipped,
        })
    }

    /// Overwrites the persisted data with the current collection. Returns the record count.
    pub fn save(&mut self) -> Result<usize> {
        let mut out = String::new();
        for contact in &self.contacts {
            out.push_str(&contact.to_csv());
            out.push('\n');
        }
        self.backend.write(&out)?;
        info!(
            "saved {} contacts to {}",
            self.contacts.len(),
            self.backend.location()
        );
        Ok(self.contacts.len())
    }

    // --- Reports ---

    pub fn missing_info(&self) -> MissingInfoReport {
        MissingInfoReport {
            contacts: self
                .contacts
                .iter()
                .filter(|c| c.email.is_empty() || c.phone.is_empty())
                .map(Preview::from)
                .collect(),
        }
    }

    pub fn counts_by_type(&self) -> TypeCounts {
        let mut counts: BTreeMap<&'static str, (ContactType, usize)> = BTreeMap::new();
        for contact in &self.contacts {
            counts
                .entry(contact.kind.as_str())
                .or_insert((contact.kind, 0))
                .1 += 1;
        }
        TypeCounts {
            counts: counts.into_values().collect(),
            total: self.contacts.len(),
        }
    }

    pub fn group_summary(&self) -> GroupSummary {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();
        for group in self.contacts.iter().flat_map(|c| c.groups.iter()) {
            *counts.entry(group.to_string()).or_default() += 1;
        }
        if counts.is_empty() {
            GroupSummary::NoGroups
        } else {
            GroupSummary::Groups(counts.into_iter().collect())
        }
    }
}

/// Case-insensitive substring test. An empty needle matches everything.
fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    needle.is_empty() || haystack.to_lowercase().contains(&needle.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::BookFixture;
    use crate::store::memory::MemBackend;

    fn ids(contacts: &[Contact]) -> Vec<u32> {
        contacts.iter().map(Contact::id).collect()
    }

    fn book() -> AddressBook<MemBackend> {
        AddressBook::new(MemBackend::new())
    }

    #[test]
    fn add_assigns_increasing_ids() {
        let mut b = book();
        assert_eq!(b.add(ContactFields::new(ContactType::Person, "Ann", "Lee")), 1);
        assert_eq!(b.add(ContactFields::new(ContactType::Business, "Acme", "Co")), 2);
        assert_eq!(b.next_id(), 3);
    }

    #[test]
    fn ids_are_not_reused_after_delete() {
        let mut b = book();
        let first = b.add(ContactFields::default());
        b.delete(first);
        assert_eq!(b.add(ContactFields::default()), first + 1);
    }

    #[test]
    fn injected_counter_is_honoured() {
        let mut b = AddressBook::with_next_id(MemBackend::new(), 40);
        assert_eq!(b.add(ContactFields::default()), 40);
        assert_eq!(AddressBook::with_next_id(MemBackend::new(), 0).next_id(), 1);
    }

    #[test]
    fn scenario_add_filter_delete_list() {
        let mut b = book();
        let ann = b.add(ContactFields::new(ContactType::Person, "Ann", "Lee"));
        let acme = b.add(ContactFields::new(ContactType::Business, "Acme", "Co"));
        assert_eq!((ann, acme), (1, 2));

        assert_eq!(ids(&b.filter_by_type("Person")), vec![1]);

        assert!(b.delete(1));
        assert_eq!(
            b.previews(),
            vec![Preview {
                id: 2,
                name: "Acme Co".into(),
                kind: ContactType::Business
            }]
        );
    }

    #[test]
    fn delete_then_view_is_not_found() {
        let mut b = BookFixture::new().with_contacts(2).book;
        assert!(b.view(1).is_some());
        assert!(b.delete(1));
        assert!(b.view(1).is_none());
        assert!(!b.delete(1));
    }

    #[test]
    fn view_returns_independent_copy() {
        let mut b = BookFixture::new().with_contacts(1).book;
        let mut copy = b.view(1).unwrap();
        copy.first_name = "Changed".into();
        copy.add_tag("x");
        assert_eq!(b.view(1).unwrap().first_name, "First1");
        assert!(b.filter_by_tag("x").is_empty());
        b.add_tag(1, "y");
        assert!(!copy.has_tag("y"));
    }

    #[test]
    fn edit_keeps_id_and_unset_fields() {
        let mut b = book();
        let id = b.add(ContactFields::new(ContactType::Person, "Ann", "Lee").email("a@x.test"));
        let patch = ContactPatch {
            kind: Some(ContactType::Vendor),
            city: Some("Paris".into()),
            ..ContactPatch::default()
        };
        assert!(b.edit(id, patch));

        let c = b.view(id).unwrap();
        assert_eq!(c.id(), id);
        assert_eq!(c.kind, ContactType::Vendor);
        assert_eq!(c.email, "a@x.test");
        assert_eq!(c.city, "Paris");
    }

    #[test]
    fn edit_unknown_id_reports_not_found() {
        let mut b = BookFixture::new().with_contacts(1).book;
        assert!(!b.edit(99, ContactPatch::default()));
    }

    #[test]
    fn name_search_checks_first_last_and_full() {
        let b = BookFixture::new()
            .with_contact(ContactFields::new(ContactType::Person, "Ada", "Lovelace"))
            .with_contact(ContactFields::new(ContactType::Person, "Alan", "Turing"))
            .with_contact(ContactFields::new(ContactType::Person, "Grace", "Hopper"))
            .book;

        assert_eq!(ids(&b.search_by_name("a l")), vec![1]);
        assert_eq!(ids(&b.search_by_name("TUR")), vec![2]);
        assert_eq!(ids(&b.search_by_name("a")), vec![1, 2, 3]);
        assert!(b.search_by_name("zzz").is_empty());
    }

    #[test]
    fn email_search_ignores_case() {
        let b = BookFixture::new()
            .with_contact(
                ContactFields::new(ContactType::Person, "Alice", "").email("Alice@Example.com"),
            )
            .with_contact(ContactFields::new(ContactType::Person, "Bob", "").email("bob@test.org"))
            .book;

        assert_eq!(ids(&b.search_by_email("example")), vec![1]);
        assert_eq!(ids(&b.search_by_email("EXAMPLE")), vec![1]);
    }

    #[test]
    fn empty_query_matches_everything() {
        let b = BookFixture::new().with_contacts(3).book;
        assert_eq!(ids(&b.search_by_name("")), vec![1, 2, 3]);
        assert_eq!(ids(&b.search_by_email("")), vec![1, 2, 3]);
        assert_eq!(ids(&b.search_by_phone("")), vec![1, 2, 3]);
        assert_eq!(ids(&b.filter_by_city("")), vec![1, 2, 3]);
    }

    #[test]
    fn phone_and_city_use_substring_match() {
        let b = BookFixture::new()
            .with_contact(
                ContactFields::new(ContactType::Person, "A", "")
                    .phone("555-0100")
                    .city("Springfield"),
            )
            .with_contact(
                ContactFields::new(ContactType::Person, "B", "")
                    .phone("555-0199")
                    .city("Shelbyville"),
            )
            .book;

        assert_eq!(ids(&b.search_by_phone("0100")), vec![1]);
        assert_eq!(ids(&b.search_by_phone("555")), vec![1, 2]);
        assert_eq!(ids(&b.filter_by_city("SPRING")), vec![1]);
    }

    #[test]
    fn type_filter_is_exact() {
        let b = BookFixture::new()
            .with_contact(ContactFields::new(ContactType::Vendor, "V", ""))
            .book;
        assert_eq!(ids(&b.filter_by_type("Vendor")), vec![1]);
        assert!(b.filter_by_type("vendor").is_empty());
        assert!(b.filter_by_type("Vend").is_empty());
    }

    #[test]
    fn tag_filter_is_exact_membership() {
        let b = BookFixture::new()
            .with_tagged("A", &["vip"])
            .with_tagged("B", &["VIP", "vip-lite"])
            .book;
        assert_eq!(ids(&b.filter_by_tag("vip")), vec![1]);
    }

    #[test]
    fn label_operations_report_outcomes() {
        let mut b = BookFixture::new().with_contacts(1).book;

        assert_eq!(b.add_tag(1, "vip"), LabelOutcome::Applied);
        assert_eq!(b.add_tag(1, "vip"), LabelOutcome::Unchanged);
        assert_eq!(b.add_tag(1, ""), LabelOutcome::Unchanged);
        assert_eq!(b.add_tag(9, "vip"), LabelOutcome::NotFound);
        assert_eq!(b.remove_tag(1, "vip"), LabelOutcome::Applied);
        assert_eq!(b.remove_tag(1, "vip"), LabelOutcome::Unchanged);

        assert_eq!(b.assign_group(1, "team"), LabelOutcome::Applied);
        assert_eq!(b.assign_group(1, "team"), LabelOutcome::Unchanged);
        assert_eq!(b.remove_from_group(1, "team"), LabelOutcome::Applied);
        assert_eq!(b.remove_from_group(2, "team"), LabelOutcome::NotFound);

        assert!(LabelOutcome::Applied.succeeded());
        assert!(!LabelOutcome::Unchanged.succeeded());
        assert!(!LabelOutcome::NotFound.succeeded());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut original = BookFixture::new()
            .with_contact(
                ContactFields::new(ContactType::Business, "Acme", "Co")
                    .email("hi@acme.test")
                    .phone("555-0100")
                    .city("Springfield"),
            )
            .with_grouped("Ann", &["family", "friends"])
            .with_tagged("Bob", &["vip"])
            .book;
        assert_eq!(original.save().unwrap(), 3);

        let persisted = original.backend().content().unwrap().to_string();
        let mut fresh = AddressBook::new(MemBackend::with_content(persisted));
        let report = fresh.load().unwrap();

        assert!(report.found);
        assert_eq!(report.loaded, 3);
        assert!(report.skipped.is_empty());
        assert_eq!(fresh.contacts(), original.contacts());
    }

    #[test]
    fn save_writes_one_line_per_contact() {
        let mut b = BookFixture::new().with_contacts(2).book;
        b.save().unwrap();
        assert_eq!(
            b.backend().content(),
            Some("1,Person,First1,Last1,,,,,,,,,\n2,Person,First2,Last2,,,,,,,,,\n")
        );
    }

    #[test]
    fn load_advances_counter_past_imported_ids() {
        let mut b = AddressBook::new(MemBackend::with_content(
            "7,Person,A,,,,,,,,,,\n3,Vendor,B,,,,,,,,,,\n",
        ));
        b.load().unwrap();
        assert_eq!(ids(b.contacts()), vec![7, 3]);
        assert_eq!(b.add(ContactFields::default()), 8);
    }

    #[test]
    fn load_at_the_top_of_the_id_range() {
        let content = "4294967295,Person,Max,,,,,,,,,,\n1,Person,Ann,,,,,,,,,,\n";
        let mut b = AddressBook::new(MemBackend::with_content(content));
        let report = b.load().unwrap();
        assert_eq!(report.loaded, 1);
        let skipped: Vec<usize> = report.skipped.iter().map(|s| s.line_no).collect();
        assert_eq!(skipped, vec![1]);
        assert_eq!(b.next_id(), 2);

        let mut b = AddressBook::new(MemBackend::with_content("4294967294,Person,Max,,,,,,,,,,\n"));
        b.load().unwrap();
        assert_eq!(b.add(ContactFields::default()), u32::MAX);
    }

    #[test]
    fn exhausted_counter_does_not_wrap() {
        let mut b = AddressBook::with_next_id(MemBackend::new(), u32::MAX);
        assert_eq!(b.add(ContactFields::default()), u32::MAX);
        assert_eq!(b.next_id(), u32::MAX);
    }

    #[test]
    fn load_never_moves_counter_backwards() {
        let mut b = AddressBook::with_next_id(MemBackend::with_content("2,Person,A,,,,,,,,,,\n"), 50);
        b.load().unwrap();
        assert_eq!(b.next_id(), 50);
    }

    #[test]
    fn load_skips_bad_lines_and_keeps_going() {
        let content = "1,Person,Ann,Lee,,,,,,,,,\n\
                       too,short\n\
                       \n\
                       x,Person,Bad,Id,,,,,,,,,\n\
                       1,Person,Dup,,,,,,,,,,\n\
                       2,Vendor,Bo,,,,,,,,,,\r\n";
        let mut b = AddressBook::new(MemBackend::with_content(content));
        let report = b.load().unwrap();

        assert_eq!(report.loaded, 2);
        assert_eq!(ids(b.contacts()), vec![1, 2]);
        assert_eq!(b.contacts()[1].tags.len(), 0);
        assert_eq!(
            report.skipped,
            vec![
                SkippedLine {
                    line_no: 2,
                    reason: SkipReason::Malformed(LineError::TooFewFields { found: 2 }),
                },
                SkippedLine {
                    line_no: 4,
                    reason: SkipReason::Malformed(LineError::InvalidId("x".into())),
                },
                SkippedLine {
                    line_no: 5,
                    reason: SkipReason::DuplicateId(1),
                },
            ]
        );
    }

    #[test]
    fn load_replaces_existing_collection() {
        let mut b = AddressBook::new(MemBackend::with_content("5,Person,Only,,,,,,,,,,\n"));
        b.add(ContactFields::new(ContactType::Person, "Temp", ""));
        b.load().unwrap();
        assert_eq!(ids(b.contacts()), vec![5]);
    }

    #[test]
    fn load_without_persisted_data_keeps_collection() {
        let mut b = BookFixture::new().with_contacts(2).book;
        let report = b.load().unwrap();
        assert!(!report.found);
        assert_eq!(b.len(), 2);
    }

    #[test]
    fn save_failure_is_an_error() {
        let mut b = AddressBook::new(MemBackend::new().failing_writes());
        b.add(ContactFields::default());
        assert!(b.save().is_err());
    }

    #[test]
    fn missing_info_lists_contacts_without_email_or_phone() {
        let b = BookFixture::new()
            .with_contact(
                ContactFields::new(ContactType::Person, "Full", "")
                    .email("f@x.test")
                    .phone("1"),
            )
            .with_contact(ContactFields::new(ContactType::Person, "NoPhone", "").email("n@x.test"))
            .with_contact(ContactFields::new(ContactType::Vendor, "NoEmail", "").phone("2"))
            .with_contact(ContactFields::new(ContactType::Person, "Neither", ""))
            .book;

        let report = b.missing_info();
        assert_eq!(report.total(), 3);
        assert_eq!(
            report.contacts.iter().map(|p| p.id).collect::<Vec<_>>(),
            vec![2, 3, 4]
        );
    }

    #[test]
    fn counts_by_type_are_alphabetical() {
        let b = BookFixture::new()
            .with_contact(ContactFields::new(ContactType::Vendor, "V1", ""))
            .with_contact(ContactFields::new(ContactType::Person, "P1", ""))
            .with_contact(ContactFields::new(ContactType::Vendor, "V2", ""))
            .with_contact(ContactFields::new(ContactType::Business, "B1", ""))
            .book;

        let report = b.counts_by_type();
        assert_eq!(
            report.counts,
            vec![
                (ContactType::Business, 1),
                (ContactType::Person, 1),
                (ContactType::Vendor, 2),
            ]
        );
        assert_eq!(report.total, 4);
    }

    #[test]
    fn group_summary_counts_each_membership() {
        let b = BookFixture::new()
            .with_grouped("A", &["work", "family"])
            .with_grouped("B", &["work"])
            .with_grouped("C", &[])
            .book;

        assert_eq!(
            b.group_summary(),
            GroupSummary::Groups(vec![("family".into(), 1), ("work".into(), 2)])
        );
    }

    #[test]
    fn group_summary_without_groups() {
        let b = BookFixture::new().with_contacts(2).book;
        assert_eq!(b.group_summary(), GroupSummary::NoGroups);
        assert_eq!(book().group_summary(), GroupSummary::NoGroups);
    }
}
