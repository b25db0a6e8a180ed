//! Line codec for the persisted address book.
//!
//! Each record is one line of exactly 13 comma-separated columns:
//!
//! - `0` id: positive integer below `u32::MAX`, kept verbatim on load
//! - `1` type: `Person`, `Business`, `Vendor` or `Emergency`; anything else reads as `Person`
//! - `2..=10` first name, last name, email, phone, address line, city, state, postal code, notes
//! - `11` groups, `12` tags: labels joined by `|`
//!
//! There is no quoting or escaping. Encoding lives on [`Contact::to_csv`]; this module
//! decodes.

use crate::model::{Contact, ContactFields, ContactType, Labels};
use thiserror::Error;

pub const FIELD_COUNT: usize = 13;
pub const FIELD_SEPARATOR: char = ',';
pub const LABEL_SEPARATOR: char = '|';

/// Why a single persisted line was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LineError {
    #[error("expected 13 fields, found {found}")]
    TooFewFields { found: usize },

    #[error("invalid id '{0}'")]
    InvalidId(String),
}

/// Decodes one line. Columns past the 13th are ignored.
pub fn decode_line(line: &str) -> Result<Contact, LineError> {
    let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
    if fields.len() < FIELD_COUNT {
        return Err(LineError::TooFewFields {
            found: fields.len(),
        });
    }

    let id = parse_id(fields[0])?;
    let mut contact = Contact::with_id(
        id,
        ContactFields {
            kind: ContactType::from_token_or_default(fields[1]),
            first_name: fields[2].to_string(),
            last_name: fields[3].to_string(),
            email: fields[4].to_string(),
            phone: fields[5].to_string(),
            address_line: fields[6].to_string(),
            city: fields[7].to_string(),
            state: fields[8].to_string(),
            postal_code: fields[9].to_string(),
            notes: fields[10].to_string(),
        },
    );
    contact.groups = decode_labels(fields[11]);
    contact.tags = decode_labels(fields[12]);
    Ok(contact)
}

fn parse_id(raw: &str) -> Result<u32, LineError> {
    match raw.trim().parse::<u32>() {
        // u32::MAX would leave the id counter no successor
        Ok(id) if id > 0 && id < u32::MAX => Ok(id),
        _ => Err(LineError::InvalidId(raw.to_string())),
    }
}

fn decode_labels(column: &str) -> Labels {
    column.split(LABEL_SEPARATOR).collect()
}
