//! # Domain Model
//!
//! The record type of the address book, [`Contact`], together with the small types it is
//! built from:
//!
//! - [`ContactType`]: closed set of categories (`Person`, `Business`, `Vendor`, `Emergency`).
//! - [`Labels`]: an ordered, duplicate-free list of non-empty strings. Used twice per
//!   contact, once for groups and once for tags; the two never share entries.
//! - [`ContactFields`] / [`ContactPatch`]: input shapes for creating and editing a contact.
//!
//! ## Identity
//!
//! Contacts never pick their own id. The store hands one out on creation and the id is
//! frozen from then on: there is no setter for it. The only other way a contact gets an
//! id is [`Contact::with_id`], used when reading persisted records back.
//!
//! ## Text Forms
//!
//! A contact renders itself two ways:
//!
//! - [`Contact::details`]: labelled lines for people (`ID: 3`, `Type: Vendor`, ...).
//! - [`Contact::to_csv`]: the 13-column persistence line (see `store::codec`).
//!
//! The CSV form does no escaping. A comma, pipe, or newline inside a field will break the
//! record when it is read back.

use crate::error::{BookError, Result};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ContactType {
    #[default]
    Person,
    Business,
    Vendor,
    Emergency,
}

impl ContactType {
    pub const ALL: [ContactType; 4] = [
        ContactType::Person,
        ContactType::Business,
        ContactType::Vendor,
        ContactType::Emergency,
    ];

    /// Canonical token, as stored on disk and matched by type filters.
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactType::Person => "Person",
            ContactType::Business => "Business",
            ContactType::Vendor => "Vendor",
            ContactType::Emergency => "Emergency",
        }
    }

    /// Maps a 1-based menu choice onto a type.
    pub fn from_ordinal(choice: u32) -> Option<Self> {
        match choice {
            1 => Some(ContactType::Person),
            2 => Some(ContactType::Business),
            3 => Some(ContactType::Vendor),
            4 => Some(ContactType::Emergency),
            _ => None,
        }
    }

    /// Lenient parse used when reading persisted records: unknown tokens become `Person`.
    pub fn from_token_or_default(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl fmt::Display for ContactType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContactType {
    type Err = BookError;

    fn from_str(s: &str) -> Result<Self> {
        ContactType::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| BookError::Api(format!("Unknown contact type: {}", s)))
    }
}

/// Ordered set of labels (group names or tags).
///
/// Insertion order is kept for display and persistence. Matching is exact and
/// case-sensitive, so `Work` and `work` are different labels.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Labels(Vec<String>);

impl Labels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `label` unless it is empty or already present. Returns whether it was added.
    pub fn add(&mut self, label: &str) -> bool {
        if label.is_empty() || self.contains(label) {
            return false;
        }
        self.0.push(label.to_string());
        true
    }

    /// Removes every exact match. Returns whether anything was removed.
    pub fn remove(&mut self, label: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|l| l != label);
        self.0.len() != before
    }

    pub fn contains(&self, label: &str) -> bool {
        self.0.iter().any(|l| l == label)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn join(&self, sep: &str) -> String {
        self.0.join(sep)
    }
}

impl<'a> FromIterator<&'a str> for Labels {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut labels = Labels::new();
        for label in iter {
            labels.add(label);
        }
        labels
    }
}

/// Every editable field of a contact, used to create one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub kind: ContactType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub notes: String,
}

impl ContactFields {
    pub fn new(kind: ContactType, first_name: &str, last_name: &str) -> Self {
        Self {
            kind,
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            ..Self::default()
        }
    }

    pub fn email(mut self, email: &str) -> Self {
        self.email = email.to_string();
        self
    }

    pub fn phone(mut self, phone: &str) -> Self {
        self.phone = phone.to_string();
        self
    }

    pub fn city(mut self, city: &str) -> Self {
        self.city = city.to_string();
        self
    }
}

/// A partial edit. `None` keeps the current value; `Some` overwrites it, even with "".
///
/// Labels are not part of a patch: groups and tags change only through the label
/// operations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactPatch {
    pub kind: Option<ContactType>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address_line: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub notes: Option<String>,
}

/// A complete field set becomes a patch that overwrites everything.
impl From<ContactFields> for ContactPatch {
    fn from(fields: ContactFields) -> Self {
        Self {
            kind: Some(fields.kind),
            first_name: Some(fields.first_name),
            last_name: Some(fields.last_name),
            email: Some(fields.email),
            phone: Some(fields.phone),
            address_line: Some(fields.address_line),
            city: Some(fields.city),
            state: Some(fields.state),
            postal_code: Some(fields.postal_code),
            notes: Some(fields.notes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    id: u32,
    pub kind: ContactType,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address_line: String,
    pub city: String,
    pub state: String,
    pub postal_code: String,
    pub notes: String,
    pub groups: Labels,
    pub tags: Labels,
}

impl Contact {
    /// Builds a contact with an id that was assigned elsewhere (the store's counter or a
    /// persisted record).
    pub fn with_id(id: u32, fields: ContactFields) -> Self {
        Self {
            id,
            kind: fields.kind,
            first_name: fields.first_name,
            last_name: fields.last_name,
            email: fields.email,
            phone: fields.phone,
            address_line: fields.address_line,
            city: fields.city,
            state: fields.state,
            postal_code: fields.postal_code,
            notes: fields.notes,
            groups: Labels::new(),
            tags: Labels::new(),
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn full_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (true, _) => self.last_name.clone(),
            (false, true) => self.first_name.clone(),
            (false, false) => format!("{} {}", self.first_name, self.last_name),
        }
    }

    pub fn apply(&mut self, patch: ContactPatch) {
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        let fields = [
            (&mut self.first_name, patch.first_name),
            (&mut self.last_name, patch.last_name),
            (&mut self.email, patch.email),
            (&mut self.phone, patch.phone),
            (&mut self.address_line, patch.address_line),
            (&mut self.city, patch.city),
            (&mut self.state, patch.state),
            (&mut self.postal_code, patch.postal_code),
            (&mut self.notes, patch.notes),
        ];
        for (slot, value) in fields {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }

    pub fn add_group(&mut self, group: &str) -> bool {
        self.groups.add(group)
    }

    pub fn remove_group(&mut self, group: &str) -> bool {
        self.groups.remove(group)
    }

    pub fn has_group(&self, group: &str) -> bool {
        self.groups.contains(group)
    }

    pub fn add_tag(&mut self, tag: &str) -> bool {
        self.tags.add(tag)
    }

    pub fn remove_tag(&mut self, tag: &str) -> bool {
        self.tags.remove(tag)
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    /// Multi-line, labelled rendering.
    ///
    /// `ID` and `Type` are always present. Other lines appear only when the field is
    /// non-empty, unless `include_empty` is set, in which case every line is emitted.
    pub fn details(&self, include_empty: bool) -> String {
        let full_name = self.full_name();
        let groups = self.groups.join(", ");
        let tags = self.tags.join(", ");
        let optional = [
            ("Name", full_name.as_str()),
            ("Email", self.email.as_str()),
            ("Phone", self.phone.as_str()),
            ("Address", self.address_line.as_str()),
            ("City", self.city.as_str()),
            ("State", self.state.as_str()),
            ("Postal", self.postal_code.as_str()),
            ("Notes", self.notes.as_str()),
            ("Groups", groups.as_str()),
            ("Tags", tags.as_str()),
        ];

        let mut out = format!("ID: {}\nType: {}\n", self.id, self.kind);
        for (label, value) in optional {
            if include_empty || !value.is_empty() {
                out.push_str(&format!("{}: {}\n", label, value));
            }
        }
        out
    }

    /// The persistence line, without a trailing newline.
    pub fn to_csv(&self) -> String {
        [
            self.id.to_string(),
            self.kind.as_str().to_string(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.address_line.clone(),
            self.city.clone(),
            self.state.clone(),
            self.postal_code.clone(),
            self.notes.clone(),
            self.groups.join("|"),
            self.tags.join("|"),
        ]
        .join(",")
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.details(false))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(first: &str, last: &str) -> Contact {
        Contact::with_id(1, ContactFields::new(ContactType::Person, first, last))
    }

    #[test]
    fn full_name_combinations() {
        assert_eq!(named("", "").full_name(), "");
        assert_eq!(named("Ada", "").full_name(), "Ada");
        assert_eq!(named("", "Lovelace").full_name(), "Lovelace");
        assert_eq!(named("Ada", "Lovelace").full_name(), "Ada Lovelace");
    }

    #[test]
    fn type_tokens_parse_exactly() {
        for kind in ContactType::ALL {
            assert_eq!(kind.as_str().parse::<ContactType>().unwrap(), kind);
        }
        assert!("person".parse::<ContactType>().is_err());
        assert_eq!(
            ContactType::from_token_or_default("Alien"),
            ContactType::Person
        );
    }

    #[test]
    fn ordinals_follow_menu_order() {
        assert_eq!(ContactType::from_ordinal(1), Some(ContactType::Person));
        assert_eq!(ContactType::from_ordinal(4), Some(ContactType::Emergency));
        assert_eq!(ContactType::from_ordinal(0), None);
        assert_eq!(ContactType::from_ordinal(5), None);
    }

    #[test]
    fn adding_same_tag_twice_is_rejected() {
        let mut c = named("Ann", "Lee");
        assert!(c.add_tag("vip"));
        assert!(!c.add_tag("vip"));
        assert_eq!(c.tags.iter().collect::<Vec<_>>(), vec!["vip"]);
    }

    #[test]
    fn empty_labels_are_rejected() {
        let mut c = named("Ann", "Lee");
        assert!(!c.add_group(""));
        assert!(!c.add_tag(""));
        assert!(c.groups.is_empty());
        assert!(c.tags.is_empty());
    }

    #[test]
    fn labels_are_case_sensitive() {
        let mut c = named("Ann", "Lee");
        assert!(c.add_group("Work"));
        assert!(c.add_group("work"));
        assert!(c.has_group("Work"));
        assert!(!c.has_group("WORK"));
        assert_eq!(c.groups.len(), 2);
    }

    #[test]
    fn groups_and_tags_are_independent() {
        let mut c = named("Ann", "Lee");
        c.add_group("family");
        assert!(!c.has_tag("family"));
        assert!(c.add_tag("family"));
    }

    #[test]
    fn remove_reports_whether_anything_changed() {
        let mut c = named("Ann", "Lee");
        c.add_tag("a");
        c.add_tag("b");
        assert!(c.remove_tag("a"));
        assert!(!c.remove_tag("a"));
        assert!(!c.remove_group("a"));
        assert_eq!(c.tags.join("|"), "b");
    }

    #[test]
    fn labels_from_iter_skip_empty_and_duplicates() {
        let labels: Labels = "a||b|a".split('|').collect();
        assert_eq!(labels.join("|"), "a|b");
    }

    #[test]
    fn details_hide_empty_fields_by_default() {
        let mut c = Contact::with_id(
            7,
            ContactFields::new(ContactType::Vendor, "Acme", "").email("sales@acme.test"),
        );
        c.add_tag("supplier");
        c.add_tag("net30");

        assert_eq!(
            c.details(false),
            "ID: 7\nType: Vendor\nName: Acme\nEmail: sales@acme.test\nTags: supplier, net30\n"
        );
        assert_eq!(c.to_string(), c.details(false));
    }

    #[test]
    fn details_with_empty_fields_lists_every_label() {
        let c = Contact::with_id(2, ContactFields::default());
        let text = c.details(true);
        for label in [
            "ID: 2", "Type: Person", "Name: ", "Email: ", "Phone: ", "Address: ", "City: ",
            "State: ", "Postal: ", "Notes: ", "Groups: ", "Tags: ",
        ] {
            assert!(text.contains(label), "missing {label:?} in {text:?}");
        }
        assert_eq!(text.lines().count(), 12);
    }

    #[test]
    fn csv_line_has_thirteen_columns_in_order() {
        let mut c = Contact::with_id(
            12,
            ContactFields {
                kind: ContactType::Business,
                first_name: "Acme".into(),
                last_name: "Co".into(),
                email: "hi@acme.test".into(),
                phone: "555-0100".into(),
                address_line: "1 Main St".into(),
                city: "Springfield".into(),
                state: "IL".into(),
                postal_code: "62701".into(),
                notes: "call first".into(),
            },
        );
        c.add_group("clients");
        c.add_group("local");
        c.add_tag("vip");

        assert_eq!(
            c.to_csv(),
            "12,Business,Acme,Co,hi@acme.test,555-0100,1 Main St,Springfield,IL,62701,call first,clients|local,vip"
        );
    }

    #[test]
    fn csv_line_keeps_empty_trailing_columns() {
        let c = Contact::with_id(3, ContactFields::new(ContactType::Person, "Ann", "Lee"));
        let line = c.to_csv();
        assert_eq!(line, "3,Person,Ann,Lee,,,,,,,,,");
        assert_eq!(line.split(',').count(), 13);
    }

    #[test]
    fn patch_overwrites_only_supplied_fields() {
        let mut c = Contact::with_id(
            1,
            ContactFields::new(ContactType::Person, "Ann", "Lee").email("ann@x.test"),
        );
        c.apply(ContactPatch {
            last_name: Some("Park".into()),
            phone: Some(String::new()),
            ..ContactPatch::default()
        });
        assert_eq!(c.first_name, "Ann");
        assert_eq!(c.last_name, "Park");
        assert_eq!(c.email, "ann@x.test");
        assert_eq!(c.phone, "");
        assert_eq!(c.id(), 1);
    }

    #[test]
    fn full_patch_replaces_everything_but_id_and_labels() {
        let mut c = Contact::with_id(9, ContactFields::new(ContactType::Person, "Ann", "Lee"));
        c.add_tag("vip");
        c.apply(ContactFields::new(ContactType::Emergency, "", "Clinic").into());
        assert_eq!(c.id(), 9);
        assert_eq!(c.kind, ContactType::Emergency);
        assert_eq!(c.full_name(), "Clinic");
        assert!(c.has_tag("vip"));
    }
}
