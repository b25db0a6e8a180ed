use crate::book::AddressBook;
use crate::commands::CmdResult;
use crate::error::Result;
use crate::store::Backend;

/// One of the six search/filter criteria.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    Name(String),
    Email(String),
    Phone(String),
    /// Canonical type token, matched exactly.
    Type(String),
    City(String),
    /// Exact tag.
    Tag(String),
}

impl Query {
    pub fn describe(&self) -> String {
        match self {
            Query::Name(q) => format!("Name contains '{}'", q),
            Query::Email(q) => format!("Email contains '{}'", q),
            Query::Phone(q) => format!("Phone contains '{}'", q),
            Query::Type(t) => format!("Type = '{}'", t),
            Query::City(q) => format!("City contains '{}'", q),
            Query::Tag(t) => format!("Tag = '{}'", t),
        }
    }
}

pub fn run<B: Backend>(book: &AddressBook<B>, query: &Query) -> Result<CmdResult> {
    let matches = match query {
        Query::Name(q) => book.search_by_name(q),
        Query::Email(q) => book.search_by_email(q),
        Query::Phone(q) => book.search_by_phone(q),
        Query::Type(t) => book.filter_by_type(t),
        Query::City(q) => book.filter_by_city(q),
        Query::Tag(t) => book.filter_by_tag(t),
    };
    Ok(CmdResult::default()
        .with_heading(query.describe())
        .with_contacts(matches))
}
